//! CSV Upload Ingestion
//!
//! Decodes an uploaded spreadsheet (CSV export) into a raw table. File
//! format is the only concern here; column semantics belong to the loader.

use table_loader::RawTable;
use thiserror::Error;

/// Errors while decoding an upload into a raw table
#[derive(Debug, Error)]
pub enum IngestError {
    /// Malformed CSV content
    #[error("Could not read CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// File held no header row at all
    #[error("Uploaded file is empty")]
    EmptyFile,
}

/// Parse CSV bytes into a raw table of header strings and text cells.
///
/// Ragged rows are tolerated here; the loader reports missing cells against
/// the columns it actually needs.
pub fn raw_table_from_csv(bytes: &[u8]) -> Result<RawTable, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_with_headers() {
        let data = b"Date,Time (sec),Acceleration (m/sec^2)\n2024-01-01,0.0,0.01\n2024-01-01,0.01,0.02\n";
        let raw = raw_table_from_csv(data).unwrap();
        assert_eq!(raw.headers[1], "Time (sec)");
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[1], vec!["2024-01-01", "0.01", "0.02"]);
    }

    #[test]
    fn test_empty_upload_rejected() {
        assert!(matches!(
            raw_table_from_csv(b""),
            Err(IngestError::EmptyFile)
        ));
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let data = b"Date,Time (sec),Acceleration (m/sec^2)\n2024-01-01,0.0\n";
        let raw = raw_table_from_csv(data).unwrap();
        assert_eq!(raw.rows[0].len(), 2);
    }
}
