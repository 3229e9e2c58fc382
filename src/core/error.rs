//! Error Definitions
//!
//! Defines error types used throughout the project.

use thiserror::Error;

/// Core engine error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Rule index out of bounds: {0}")]
    RuleIndexOutOfBounds(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Core engine result type
pub type CoreResult<T> = Result<T, CoreError>;
