//! Analysis Report Types

use serde::{Deserialize, Serialize};
use spectral_engine::Spectrum;
use standards_engine::Standard;

/// One measurement row with its derived velocity and safety label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// Timestamp, carried through from the upload
    pub date: String,
    /// Elapsed time in seconds
    pub time_sec: f64,
    /// Acceleration in m/s²
    pub acceleration_m_s2: f64,
    /// Peak-to-peak velocity in inches/sec
    pub v_peak_to_peak: f64,
    /// 1 = unsafe under the selected standard, 0 = safe
    pub label: u8,
}

/// In-memory series for the rendering collaborator.
///
/// The core has no opinion on image format or storage; a renderer turns one
/// of these into a saved chart under `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSeries {
    /// Chart name, `{upload base name}_{suffix}`
    pub name: String,
    /// Chart title
    pub title: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// X values
    pub x: Vec<f64>,
    /// Y values
    pub y: Vec<f64>,
}

/// Everything one analysis produces for the response layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Standard the table was classified under
    pub standard: Standard,
    /// Labeled rows, upload order preserved
    pub records: Vec<LabeledRecord>,
    /// Canonical one-sided amplitude spectrum
    pub spectrum: Spectrum,
    /// Frequency of the largest spectrum bin (Hz)
    pub dominant_frequency_hz: f64,
    /// Time-domain, spectrum, and velocity plot series
    pub plots: Vec<PlotSeries>,
}

impl AnalysisReport {
    /// Number of unsafe rows
    pub fn unsafe_count(&self) -> usize {
        self.records.iter().filter(|r| r.label == 1).count()
    }
}
