//! # rowsample
//!
//! Draws a bounded uniform random sample of rows from a delimited text
//! file and writes it to a sibling `samples-` file, reporting the
//! population and sample sizes.

pub mod cli;
pub mod error;
pub mod resolver;
pub mod reader;
pub mod sampler;
pub mod writer;
pub mod output;
pub mod commands;

pub use error::{Result, SamplerError};
pub use output::SampleReport;
pub use reader::{ReadStrategy, Records};

/// Fraction of the population drawn into a sample
pub const SAMPLE_FRACTION: f64 = 0.25;

/// Upper bound on the number of sampled records
pub const MAX_SAMPLE_SIZE: usize = 25;

/// Bytes examined when detecting the input dialect
pub const DETECTION_BUFFER_SIZE: usize = 1024;

/// Prefix for output filenames
pub const OUTPUT_PREFIX: &str = "samples-";
