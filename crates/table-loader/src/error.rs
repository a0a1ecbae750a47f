//! Table Loading Error Types

use thiserror::Error;

/// Errors while loading a measurement table
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// Required column absent after header normalization
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// Cell that should hold a number does not parse as one
    #[error("Column '{column}' row {row} holds non-numeric value '{value}'")]
    InvalidNumber {
        column: &'static str,
        row: usize,
        value: String,
    },
}
