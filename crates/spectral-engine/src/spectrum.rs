//! Amplitude Spectrum Type

use serde::{Deserialize, Serialize};

/// Cutoff used by the low-frequency presentation view, matching the range
/// the field spreadsheets plot.
pub const DEFAULT_LOW_FREQUENCY_CUTOFF_HZ: f64 = 1.0;

/// One-sided amplitude spectrum of a vibration series.
///
/// Both vecs have equal length and frequencies ascend from 0 Hz.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spectrum {
    /// Frequency bins (Hz), non-negative
    pub frequency_hz: Vec<f64>,
    /// Amplitude per bin (|FFT coefficient| / n)
    pub amplitude: Vec<f64>,
}

impl Spectrum {
    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.frequency_hz.len()
    }

    /// Whether the spectrum holds no bins
    pub fn is_empty(&self) -> bool {
        self.frequency_hz.is_empty()
    }

    /// Frequency at the bin with the largest amplitude, 0.0 for an empty
    /// spectrum.
    pub fn dominant_frequency(&self) -> f64 {
        let mut max_amplitude = f64::MIN;
        let mut dominant = 0.0;
        for (&freq, &amp) in self.frequency_hz.iter().zip(self.amplitude.iter()) {
            if amp > max_amplitude {
                max_amplitude = amp;
                dominant = freq;
            }
        }
        dominant
    }

    /// Presentation-time filter keeping only bins at or below `cutoff_hz`.
    ///
    /// The canonical spectrum is unaffected; consumers request this view for
    /// low-frequency plots.
    pub fn low_frequency_view(&self, cutoff_hz: f64) -> Spectrum {
        let keep: Vec<usize> = self
            .frequency_hz
            .iter()
            .enumerate()
            .filter(|(_, &f)| f <= cutoff_hz)
            .map(|(i, _)| i)
            .collect();
        Spectrum {
            frequency_hz: keep.iter().map(|&i| self.frequency_hz[i]).collect(),
            amplitude: keep.iter().map(|&i| self.amplitude[i]).collect(),
        }
    }
}
