//! Measurement Table Model

use crate::error::LoadError;
use crate::normalizer::ColumnMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw tabular data as handed over by the input provider.
///
/// Headers are arbitrary spreadsheet strings; cells are untyped text. The
/// input provider decodes the file format and nothing else.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Header row, verbatim from the source file
    pub headers: Vec<String>,
    /// Data rows, one vec of cells per row
    pub rows: Vec<Vec<String>>,
}

/// One validated vibration measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Timestamp of the sample, carried through unparsed
    pub date: String,
    /// Elapsed time in seconds
    pub time_sec: f64,
    /// Acceleration in m/s²
    pub acceleration_m_s2: f64,
}

/// Validated, ordered measurement table for one upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementTable {
    records: Vec<MeasurementRecord>,
}

impl MeasurementTable {
    /// Validate a raw table and extract the required columns.
    ///
    /// Row order and count are preserved exactly. Fails on a missing
    /// required column or a non-numeric time/acceleration cell.
    pub fn from_raw(raw: &RawTable) -> Result<Self, LoadError> {
        let map = ColumnMap::resolve(&raw.headers)?;

        let mut records = Vec::with_capacity(raw.rows.len());
        for (row_idx, row) in raw.rows.iter().enumerate() {
            let date = cell(row, map.date).to_string();
            let time_sec = parse_cell(row, map.time_sec, "timesec", row_idx)?;
            let acceleration_m_s2 = parse_cell(row, map.acceleration, "accelerationmsec2", row_idx)?;
            records.push(MeasurementRecord {
                date,
                time_sec,
                acceleration_m_s2,
            });
        }

        debug!(rows = records.len(), "loaded measurement table");
        Ok(Self { records })
    }

    /// All records in upload order
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `timesec` column as a contiguous series
    pub fn time_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.time_sec).collect()
    }

    /// The `accelerationmsec2` column as a contiguous series
    pub fn acceleration_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.acceleration_m_s2).collect()
    }
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn parse_cell(
    row: &[String],
    idx: usize,
    column: &'static str,
    row_idx: usize,
) -> Result<f64, LoadError> {
    let text = cell(row, idx);
    text.trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidNumber {
            column,
            row: row_idx,
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_load_preserves_rows_and_order() {
        let table = MeasurementTable::from_raw(&raw(
            &["Date", "Time (sec)", "Acceleration (m/sec^2)"],
            &[
                &["2024-01-01 10:00:00", "0.0", "0.01"],
                &["2024-01-01 10:00:01", "0.01", "-0.02"],
                &["2024-01-01 10:00:02", "0.02", "0.03"],
            ],
        ))
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[1].time_sec, 0.01);
        assert_eq!(table.records()[1].acceleration_m_s2, -0.02);
        assert_eq!(table.records()[2].date, "2024-01-01 10:00:02");
    }

    #[test]
    fn test_missing_column_rejected() {
        let err = MeasurementTable::from_raw(&raw(
            &["Time (sec)", "Acceleration (m/sec^2)"],
            &[&["0.0", "0.01"]],
        ))
        .unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("date")));
    }

    #[test]
    fn test_non_numeric_cell_rejected() {
        let err = MeasurementTable::from_raw(&raw(
            &["Date", "Time (sec)", "Acceleration (m/sec^2)"],
            &[
                &["2024-01-01", "0.0", "0.01"],
                &["2024-01-01", "abc", "0.02"],
            ],
        ))
        .unwrap_err();
        match err {
            LoadError::InvalidNumber { column, row, value } => {
                assert_eq!(column, "timesec");
                assert_eq!(row, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_table_loads() {
        let table = MeasurementTable::from_raw(&raw(
            &["Date", "Time (sec)", "Acceleration (m/sec^2)"],
            &[],
        ))
        .unwrap();
        assert!(table.is_empty());
    }
}
