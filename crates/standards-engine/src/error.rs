//! Classification Error Types

use thiserror::Error;

/// Errors during classification
#[derive(Debug, Clone, Error)]
pub enum ClassifyError {
    /// Standard identifier not present in the registry
    #[error("Unknown standard identifier: {0}")]
    UnknownStandard(String),
}
