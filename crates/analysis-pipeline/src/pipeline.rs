//! Single-Shot Analysis Orchestration

use crate::error::AnalysisError;
use crate::report::{AnalysisReport, LabeledRecord, PlotSeries};
use spectral_engine::SpectralAnalyzer;
use standards_engine::{classify, ClassificationInput, Standard};
use table_loader::{v_peak_to_peak, MeasurementTable, RawTable};
use tracing::info;

/// Pipeline front end holding the reusable FFT planner.
pub struct Analyzer {
    spectral: SpectralAnalyzer,
}

impl Analyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self {
            spectral: SpectralAnalyzer::new(),
        }
    }

    /// Run one upload through the full pipeline.
    ///
    /// `source_name` is the upload's filename; its extension is stripped to
    /// form the plot-series name prefix. Any error aborts the whole
    /// analysis.
    pub fn analyze(
        &mut self,
        raw: &RawTable,
        standard_id: &str,
        source_name: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let table = MeasurementTable::from_raw(raw)?;
        let vpp = v_peak_to_peak(&table);

        let time = table.time_series();
        let acceleration = table.acceleration_series();
        let spectrum = self.spectral.analyze(&time, &acceleration)?;
        let dominant_frequency_hz = spectrum.dominant_frequency();

        let standard: Standard = standard_id.parse()?;
        let labels = classify(
            standard,
            &ClassificationInput {
                acceleration_m_s2: &acceleration,
                v_peak_to_peak: &vpp,
                dominant_frequency_hz,
            },
        );

        let records: Vec<LabeledRecord> = table
            .records()
            .iter()
            .zip(vpp.iter().zip(labels.iter()))
            .map(|(r, (&v, &label))| LabeledRecord {
                date: r.date.clone(),
                time_sec: r.time_sec,
                acceleration_m_s2: r.acceleration_m_s2,
                v_peak_to_peak: v,
                label,
            })
            .collect();

        let base = base_name(source_name);
        let plots = vec![
            PlotSeries {
                name: format!("{base}_acc"),
                title: "Acceleration vs Time".to_string(),
                x_label: "Time (sec)".to_string(),
                y_label: "Acceleration (m/sec²)".to_string(),
                x: time,
                y: acceleration,
            },
            PlotSeries {
                name: format!("{base}_amp"),
                title: "Amplitude vs Frequency".to_string(),
                x_label: "Frequency (Hz)".to_string(),
                y_label: "Amplitude".to_string(),
                x: spectrum.frequency_hz.clone(),
                y: spectrum.amplitude.clone(),
            },
            PlotSeries {
                name: format!("{base}_vpp"),
                title: "Velocity Peak to Peak vs Time".to_string(),
                x_label: "Time (sec)".to_string(),
                y_label: "Velocity Peak to Peak (inches/sec)".to_string(),
                x: table.time_series(),
                y: vpp,
            },
        ];

        info!(
            standard = standard.as_str(),
            rows = records.len(),
            dominant_frequency_hz,
            "analysis complete"
        );

        Ok(AnalysisReport {
            standard,
            records,
            spectrum,
            dominant_frequency_hz,
            plots,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one analysis with a fresh planner; convenience for one-off callers.
pub fn analyze(
    raw: &RawTable,
    standard_id: &str,
    source_name: &str,
) -> Result<AnalysisReport, AnalysisError> {
    Analyzer::new().analyze(raw, standard_id, source_name)
}

/// Upload base name with the extension stripped
fn base_name(source_name: &str) -> &str {
    match source_name.rsplit_once('.') {
        Some((base, _)) if !base.is_empty() => base,
        _ => source_name,
    }
}
