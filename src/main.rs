//! Main entry point for rowsample CLI

use clap::Parser;
use rowsample::cli::{Cli, USAGE_HINT};
use rowsample::commands::sample_command;
use rowsample::output::print_summary;

fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    let filename = match cli.filename {
        Some(filename) => filename,
        None => {
            println!("{}", USAGE_HINT);
            return;
        }
    };

    match sample_command(&filename) {
        Ok(report) => print_summary(&report),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
