use crate::models::log_record::{self, LogRecord};
use crate::models::shift_report::{self, ShiftReport};
use crate::utils::colors::paint_status;
use crate::utils::table::Table;

/// Live truck data: the most recent records, oldest first.
pub fn render_live_table(records: &[&LogRecord], color: bool) -> String {
    let mut table = Table::with_headers(&log_record::get_headers());

    for r in records {
        let mut row = log_record::record_to_row(r);
        // Status column
        let status = paint_status(r.status, &row[2], color);
        row[2] = status;
        table.add_row(row);
    }

    table.render()
}

pub fn render_report(report: &ShiftReport) -> String {
    let mut table = Table::with_headers(&shift_report::get_headers());
    table.add_row(shift_report::report_to_row(report));
    table.render()
}
