//! Header Normalization and Required-Column Validation

use crate::error::LoadError;
use tracing::debug;

/// Canonical names of the three required columns, in validation order.
const REQUIRED_COLUMNS: [&str; 3] = ["date", "timesec", "accelerationmsec2"];

/// The required canonical column names, in the order they are checked.
pub fn required_columns() -> &'static [&'static str] {
    &REQUIRED_COLUMNS
}

/// Canonicalize one header: trim, lowercase, strip space `(` `)` `/` `^`.
///
/// Maps spreadsheet-style headers such as `"Acceleration (m/sec^2)"` to
/// `"accelerationmsec2"`.
pub fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '/' | '^'))
        .collect()
}

/// Positions of the required columns within a raw header row
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    /// Index of the `date` column
    pub date: usize,
    /// Index of the `timesec` column
    pub time_sec: usize,
    /// Index of the `accelerationmsec2` column
    pub acceleration: usize,
}

impl ColumnMap {
    /// Resolve the required columns from raw headers.
    ///
    /// Headers are normalized first; the first required column still absent
    /// afterwards is reported. Extra columns are ignored.
    pub fn resolve(headers: &[String]) -> Result<Self, LoadError> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        debug!(?normalized, "resolved canonical headers");

        let mut indices = [0usize; 3];
        for (slot, &required) in indices.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
            match normalized.iter().position(|h| h == required) {
                Some(idx) => *slot = idx,
                // REQUIRED_COLUMNS order fixes which missing column wins
                None => return Err(LoadError::MissingColumn(required)),
            }
        }

        Ok(Self {
            date: indices[0],
            time_sec: indices[1],
            acceleration: indices[2],
        })
    }
}
