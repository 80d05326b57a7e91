use crate::utils::tonnes;
use serde::Serialize;

/// Single-row shift summary produced on "Shift Over".
///
/// Field order is the column order of every export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftReport {
    #[serde(rename = "Serial No")]
    pub serial_no: u32,
    #[serde(rename = "Mine Name")]
    pub mine_name: String,
    #[serde(rename = "Shift ID")]
    pub shift_id: String,
    #[serde(rename = "Total Quantity (T)")]
    pub total_quantity: f64,
    #[serde(rename = "Shift Incharge")]
    pub shift_incharge: String,
    #[serde(rename = "Grade")]
    pub grade: String,
}

/// Session-constant fields copied into every report.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftMeta {
    pub mine_name: String,
    pub shift_incharge: String,
    pub grade: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Serial No",
        "Mine Name",
        "Shift ID",
        "Total Quantity (T)",
        "Shift Incharge",
        "Grade",
    ]
}

/// Serial number and total quantity.
pub(crate) const NUMERIC_COLUMNS: &[usize] = &[0, 3];

pub(crate) fn report_to_row(r: &ShiftReport) -> Vec<String> {
    vec![
        r.serial_no.to_string(),
        r.mine_name.clone(),
        r.shift_id.clone(),
        tonnes(r.total_quantity),
        r.shift_incharge.clone(),
        r.grade.clone(),
    ]
}
