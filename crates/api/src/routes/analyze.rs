//! Upload + Analyze Route

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::ingest::raw_table_from_csv;
use crate::{ApiError, AppState};
use analysis_pipeline::{Analyzer, AnalysisReport};

/// Metadata echoed back with every analysis
#[derive(Debug, Serialize)]
pub struct AnalyzeMeta {
    /// Original upload filename
    pub filename: String,
    /// Standard the table was classified under
    pub standard: String,
    /// Number of rows analyzed
    pub rows: usize,
    /// Rows labeled unsafe
    pub unsafe_rows: usize,
    /// Dominant frequency of the series (Hz)
    pub dominant_frequency_hz: f64,
}

/// Response for the analyze endpoint
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub meta: AnalyzeMeta,
    pub report: AnalysisReport,
}

/// Accept a multipart upload (`file` = CSV export, `code` = standard
/// identifier) and run the full analysis.
///
/// Each request gets its own analyzer; nothing is shared between uploads.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut code: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed upload: {e}")))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed upload: {e}")))?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("code") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed upload: {e}")))?;
                code = Some(text);
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| ApiError::bad_request("No file part in the form"))?;
    if filename.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }
    if !has_allowed_extension(&filename) {
        return Err(ApiError::bad_request(
            "Invalid file type. Only .csv exports are accepted",
        ));
    }

    let code = code.unwrap_or_else(|| state.config.default_standard.clone());
    info!(filename, code, bytes = bytes.len(), "received upload");

    let raw = raw_table_from_csv(&bytes)?;
    let report = Analyzer::new().analyze(&raw, &code, &filename)?;

    Ok(Json(AnalyzeResponse {
        meta: AnalyzeMeta {
            filename,
            standard: report.standard.to_string(),
            rows: report.records.len(),
            unsafe_rows: report.unsafe_count(),
            dominant_frequency_hz: report.dominant_frequency_hz,
        },
        report,
    }))
}

fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}
