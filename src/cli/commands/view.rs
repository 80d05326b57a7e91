//! Output shared by `run` and `session`.

use crate::core::Session;
use crate::errors::AppResult;
use crate::export::logic::{ExportLogic, ExportTarget};
use crate::models::ShiftReport;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::profile::{fleet_summary, render_profile};
use crate::ui::tables::{render_live_table, render_report};
use std::io::BufRead;

/// Mine profile followed by the live table of the latest records.
pub fn print_refresh(session: &Session, rows: usize, color: bool) {
    header(format!(
        "Refresh #{} | shift {}",
        session.steps_taken(),
        session.shift_id()
    ));
    println!("{}", render_profile(session.trucks(), color));
    println!("{}", fleet_summary(session.trucks()));
    println!();
    print_live_table(session, rows, color);
}

pub fn print_live_table(session: &Session, rows: usize, color: bool) {
    println!("Live Truck Data");
    println!("{}", render_live_table(&session.recent(rows), color));
}

/// "Shift Over": aggregate, display and export the report of the running shift.
pub fn shift_over(
    session: &Session,
    target: &ExportTarget<'_>,
    input: &mut dyn BufRead,
) -> AppResult<ShiftReport> {
    let report = session.shift_over();

    header("Shift-wise Reporting");
    let evicted = session.log().evicted();
    if evicted > 0 {
        warning(format!(
            "{evicted} log records were evicted by log_retention; the total covers the retained records only."
        ));
    }
    success("Shift Report Generated:");
    println!("{}", render_report(&report));

    let path = ExportLogic::export_report(&report, target, input)?;
    info(format!("Report saved as {}", path.display()));
    Ok(report)
}
