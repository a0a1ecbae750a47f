//! Measurement Table Loading and Normalization
//!
//! Turns raw tabular sensor data with arbitrary headers into a validated
//! measurement table and computes the derived velocity series.

mod derive;
mod error;
mod normalizer;
mod table;

pub use derive::{v_peak_to_peak, VPP_CONVERSION};
pub use error::LoadError;
pub use normalizer::{normalize_header, required_columns, ColumnMap};
pub use table::{MeasurementRecord, MeasurementTable, RawTable};
