//! Pipeline Error Types

use spectral_engine::SpectralError;
use standards_engine::ClassifyError;
use table_loader::LoadError;
use thiserror::Error;

/// Any failure that aborts one analysis.
///
/// All variants are bad-input conditions: the upload is rejected whole, no
/// partial results are produced, and the caller re-submits corrected data.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// Table failed validation
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Spectrum preconditions not met
    #[error(transparent)]
    Spectral(#[from] SpectralError),

    /// Standard lookup failed
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
