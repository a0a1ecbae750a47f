//! Spectral Analysis Engine
//!
//! FFT-based amplitude/frequency extraction from vibration time series.

mod analyzer;
mod error;
mod spectrum;

pub use analyzer::SpectralAnalyzer;
pub use error::SpectralError;
pub use spectrum::{Spectrum, DEFAULT_LOW_FREQUENCY_CUTOFF_HZ};
