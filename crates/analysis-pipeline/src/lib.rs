//! Vibration Analysis Pipeline
//!
//! Orchestrates one upload end-to-end: header normalization, derived
//! velocity, amplitude spectrum, and standard classification. Single-shot
//! and stateless; every call owns its table for the duration of the analysis
//! and hands the results over read-only.

mod error;
mod pipeline;
mod report;

pub use error::AnalysisError;
pub use pipeline::{analyze, Analyzer};
pub use report::{AnalysisReport, LabeledRecord, PlotSeries};
