//! Derived Velocity Series

use crate::table::MeasurementTable;

/// Conversion factor baked into the peak-to-peak velocity formula.
///
/// Matches the spreadsheet formula the field teams use:
/// `vpp [in/s] = acceleration [m/s²] * time [s] * 0.0393701`.
pub const VPP_CONVERSION: f64 = 0.039_370_1;

/// Compute the peak-to-peak velocity series (inches/sec), one value per row.
///
/// Always computable from a validated table; output index i corresponds to
/// record i.
pub fn v_peak_to_peak(table: &MeasurementTable) -> Vec<f64> {
    table
        .records()
        .iter()
        .map(|r| r.acceleration_m_s2 * r.time_sec * VPP_CONVERSION)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{MeasurementTable, RawTable};

    fn table(rows: &[(f64, f64)]) -> MeasurementTable {
        let raw = RawTable {
            headers: vec![
                "Date".to_string(),
                "Time (sec)".to_string(),
                "Acceleration (m/sec^2)".to_string(),
            ],
            rows: rows
                .iter()
                .map(|(t, a)| vec!["2024-01-01".to_string(), t.to_string(), a.to_string()])
                .collect(),
        };
        MeasurementTable::from_raw(&raw).unwrap()
    }

    #[test]
    fn test_vpp_formula_per_row() {
        let t = table(&[(0.0, 1.0), (0.5, 2.0), (1.0, -3.0)]);
        let vpp = v_peak_to_peak(&t);

        assert_eq!(vpp.len(), 3);
        for (i, r) in t.records().iter().enumerate() {
            let expected = r.acceleration_m_s2 * r.time_sec * 0.0393701;
            assert!((vpp[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_vpp_empty_table() {
        let t = table(&[]);
        assert!(v_peak_to_peak(&t).is_empty());
    }
}
