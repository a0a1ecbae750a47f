//! Standard Registry Route

use axum::Json;
use serde::Serialize;
use standards_engine::{Quantity, Standard};

/// One registry entry as exposed to clients
#[derive(Debug, Serialize)]
pub struct StandardInfo {
    /// Identifier accepted by the analyze endpoint
    pub id: &'static str,
    /// Quantity the rule thresholds on
    pub quantity: Quantity,
    /// Threshold in the quantity's unit
    pub threshold: f64,
    /// Whether rows are labeled individually (false = one broadcast label)
    pub per_record: bool,
}

/// List every supported standard
pub async fn list() -> Json<Vec<StandardInfo>> {
    let standards = Standard::all()
        .iter()
        .map(|s| {
            let rule = s.rule();
            StandardInfo {
                id: s.as_str(),
                quantity: rule.quantity,
                threshold: rule.threshold,
                per_record: !s.labels_whole_table(),
            }
        })
        .collect();
    Json(standards)
}
