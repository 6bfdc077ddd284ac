//! Command-line interface for rowsample

use clap::Parser;

/// Hint shown when the tool is invoked without a filename.
pub const USAGE_HINT: &str = "Please provide the filename of the CSV file as an argument";

#[derive(Parser)]
#[command(name = "rowsample")]
#[command(about = "Draw a bounded random sample of rows from a delimited text file")]
#[command(version)]
pub struct Cli {
    /// Input file, relative to the current working directory
    pub filename: Option<String>,
}
