//! FFT-based Spectral Analyzer

use crate::error::SpectralError;
use crate::spectrum::Spectrum;
use rustfft::{num_complex::Complex, FftPlanner};
use tracing::debug;

/// Spectral analyzer for vibration time series.
///
/// Holds an FFT planner so repeated analyses of same-length series reuse the
/// planned transform.
pub struct SpectralAnalyzer {
    planner: FftPlanner<f64>,
}

impl SpectralAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Compute the one-sided amplitude spectrum of `acceleration` sampled at
    /// the instants in `time_sec`.
    ///
    /// The DC offset is removed before the transform; amplitudes are
    /// |coefficient| / n; the frequency axis derives from the mean sample
    /// spacing. Only the first `n / 2` bins (non-negative frequencies) are
    /// retained.
    pub fn analyze(
        &mut self,
        time_sec: &[f64],
        acceleration: &[f64],
    ) -> Result<Spectrum, SpectralError> {
        let n = acceleration.len().min(time_sec.len());
        if n < 2 {
            return Err(SpectralError::InsufficientData { got: n });
        }

        // non-positive mean spacing would put bins at negative frequencies
        let dt = mean_sample_spacing(&time_sec[..n]);
        if dt <= 0.0 {
            return Err(SpectralError::ZeroTimeInterval);
        }

        // Remove DC component so bin 0 reflects only residual offset
        let mean = acceleration[..n].iter().sum::<f64>() / n as f64;
        let mut buffer: Vec<Complex<f64>> = acceleration[..n]
            .iter()
            .map(|&a| Complex::new(a - mean, 0.0))
            .collect();

        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let half_n = n / 2;
        let amplitude: Vec<f64> = buffer
            .iter()
            .take(half_n)
            .map(|c| c.norm() / n as f64)
            .collect();

        // Bin width from mean spacing: bin i sits at i / (n * dt)
        let frequency_hz: Vec<f64> = (0..half_n).map(|i| i as f64 / (n as f64 * dt)).collect();

        debug!(
            samples = n,
            dt,
            bins = half_n,
            "computed amplitude spectrum"
        );

        Ok(Spectrum {
            frequency_hz,
            amplitude,
        })
    }
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean of consecutive time differences
fn mean_sample_spacing(time_sec: &[f64]) -> f64 {
    let diffs = time_sec.len() - 1;
    let total: f64 = time_sec.windows(2).map(|w| w[1] - w[0]).sum();
    total / diffs as f64
}
