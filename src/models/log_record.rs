use super::truck::Truck;
use super::truck_status::TruckStatus;
use crate::utils::tonnes;
use serde::Serialize;

/// One row of the haulage log, captured after a truck has been advanced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    #[serde(rename = "Time")]
    pub time: String, // HH:MM:SS
    #[serde(rename = "Truck ID")]
    pub truck_id: String,
    #[serde(rename = "Status")]
    pub status: TruckStatus,
    #[serde(rename = "Weight (T)")]
    pub weight: f64,
    #[serde(rename = "Speed (km/h)")]
    pub speed: u32,
    #[serde(rename = "Shovel ID")]
    pub shovel_id: String,
    #[serde(rename = "Shift ID")]
    pub shift_id: String,
}

impl LogRecord {
    pub fn capture(truck: &Truck, time: &str, shift_id: &str) -> Self {
        Self {
            time: time.to_string(),
            truck_id: truck.id.clone(),
            status: truck.status,
            weight: truck.weight,
            speed: truck.speed,
            shovel_id: truck.shovel_id.clone(),
            shift_id: shift_id.to_string(),
        }
    }
}

/// Header for CSV / XLSX / live table
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Time",
        "Truck ID",
        "Status",
        "Weight (T)",
        "Speed (km/h)",
        "Shovel ID",
        "Shift ID",
    ]
}

/// Weight and speed; every other column is text.
pub(crate) const NUMERIC_COLUMNS: &[usize] = &[3, 4];

pub(crate) fn record_to_row(r: &LogRecord) -> Vec<String> {
    vec![
        r.time.clone(),
        r.truck_id.clone(),
        r.status.ts_as_str().to_string(),
        tonnes(r.weight),
        r.speed.to_string(),
        r.shovel_id.clone(),
        r.shift_id.clone(),
    ]
}
