//! Error types for rowsample operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SamplerError>;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Filepath falls outside the base directory")]
    PathEscape,
}
