//! Spectral Analysis Error Types

use thiserror::Error;

/// Errors during spectral analysis
#[derive(Debug, Clone, Error)]
pub enum SpectralError {
    /// Fewer samples than the FFT precondition allows
    #[error("Not enough data points for FFT: got {got}, need at least 2")]
    InsufficientData { got: usize },

    /// Non-positive mean sampling interval makes the frequency axis undefined
    #[error("Time interval is zero. Cannot compute FFT")]
    ZeroTimeInterval,
}
