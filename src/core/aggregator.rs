use crate::models::shift_report::{ShiftMeta, ShiftReport};
use crate::models::LogRecord;
use crate::utils::formatting::round2;

/// Serial number of the one-row shift report.
const REPORT_SERIAL: u32 = 1;

/// Total tonnes hauled during `shift_id`, rounded to 2 decimals.
///
/// An empty selection sums to 0.
pub fn total_for_shift<'a, I>(records: I, shift_id: &str) -> f64
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let sum: f64 = records
        .into_iter()
        .filter(|r| r.shift_id == shift_id)
        .map(|r| r.weight)
        .sum();

    round2(sum)
}

/// Build the "Shift Over" report for `shift_id`.
pub fn shift_report<'a, I>(records: I, shift_id: &str, meta: &ShiftMeta) -> ShiftReport
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    ShiftReport {
        serial_no: REPORT_SERIAL,
        mine_name: meta.mine_name.clone(),
        shift_id: shift_id.to_string(),
        total_quantity: total_for_shift(records, shift_id),
        shift_incharge: meta.shift_incharge.clone(),
        grade: meta.grade.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TruckStatus;

    fn rec(weight: f64, shift: &str) -> LogRecord {
        LogRecord {
            time: "10:15:00".into(),
            truck_id: "T01".into(),
            status: TruckStatus::Loaded,
            weight,
            speed: 20,
            shovel_id: "SH-1".into(),
            shift_id: shift.into(),
        }
    }

    fn meta() -> ShiftMeta {
        ShiftMeta {
            mine_name: "Mine A".into(),
            shift_incharge: "Incharge A".into(),
            grade: "W-IV".into(),
        }
    }

    #[test]
    fn sums_weights_of_the_shift() {
        let log = vec![
            rec(19.59, "WS1"),
            rec(19.59, "WS1"),
            rec(0.0, "WS1"),
            rec(5.23, "WS1"),
        ];
        assert_eq!(total_for_shift(&log, "WS1"), 44.41);
    }

    #[test]
    fn empty_log_totals_zero() {
        let log: Vec<LogRecord> = Vec::new();
        assert_eq!(total_for_shift(&log, "WS1"), 0.0);

        let report = shift_report(&log, "WS1", &meta());
        assert_eq!(report.total_quantity, 0.0);
        assert_eq!(format!("{:.2}", report.total_quantity), "0.00");
    }

    #[test]
    fn other_shifts_are_ignored() {
        let log = vec![rec(19.59, "WS1"), rec(12.5, "WS2"), rec(7.25, "WS2")];
        assert_eq!(total_for_shift(&log, "WS1"), 19.59);
        assert_eq!(total_for_shift(&log, "WS2"), 19.75);
        assert_eq!(total_for_shift(&log, "WS3"), 0.0);
    }

    #[test]
    fn report_carries_session_metadata() {
        let log = vec![rec(19.59, "WS1")];
        let report = shift_report(&log, "WS1", &meta());

        assert_eq!(
            report,
            ShiftReport {
                serial_no: 1,
                mine_name: "Mine A".into(),
                shift_id: "WS1".into(),
                total_quantity: 19.59,
                shift_incharge: "Incharge A".into(),
                grade: "W-IV".into(),
            }
        );
    }
}
