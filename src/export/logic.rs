// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, LOG_STEM, REPORT_STEM};
use crate::models::log_record::{self, LogRecord};
use crate::models::shift_report::{self, ShiftReport};
use crate::ui::messages::warning;
use crate::utils::path::output_file;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Where and how an export is written.
pub struct ExportTarget<'a> {
    pub dir: &'a Path,
    pub format: ExportFormat,
    pub force: bool,
}

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the shift report to `<dir>/shift_report.<ext>`.
    ///
    /// Header = report field names, one data row.
    pub fn export_report(
        report: &ShiftReport,
        target: &ExportTarget<'_>,
        input: &mut dyn BufRead,
    ) -> AppResult<PathBuf> {
        let path = prepare(target, REPORT_STEM, input)?;
        let headers = shift_report::get_headers();
        let label = "shift report";
        let rows = [shift_report::report_to_row(report)];

        match target.format {
            ExportFormat::Csv => export_csv(label, &headers, &rows, &path)?,
            ExportFormat::Json => export_json(label, std::slice::from_ref(report), &path)?,
            ExportFormat::Xlsx => {
                export_xlsx(label, &headers, &rows, shift_report::NUMERIC_COLUMNS, &path)?
            }
        }

        log::debug!("shift report {} written to {}", report.shift_id, path.display());
        Ok(path)
    }

    /// Write the haulage log to `<dir>/truck_log.<ext>`.
    pub fn export_log(
        records: &[LogRecord],
        target: &ExportTarget<'_>,
        input: &mut dyn BufRead,
    ) -> AppResult<PathBuf> {
        if records.is_empty() {
            warning("Haulage log is empty: exporting header only.");
        }

        let path = prepare(target, LOG_STEM, input)?;
        let headers = log_record::get_headers();
        let label = "truck log";

        let rows = || -> Vec<Vec<String>> { records.iter().map(log_record::record_to_row).collect() };

        match target.format {
            ExportFormat::Csv => export_csv(label, &headers, &rows(), &path)?,
            ExportFormat::Json => export_json(label, records, &path)?,
            ExportFormat::Xlsx => {
                export_xlsx(label, &headers, &rows(), log_record::NUMERIC_COLUMNS, &path)?
            }
        }

        log::debug!("{} log records written to {}", records.len(), path.display());
        Ok(path)
    }
}

fn prepare(target: &ExportTarget<'_>, stem: &str, input: &mut dyn BufRead) -> AppResult<PathBuf> {
    ensure_dir(target.dir)?;
    let path = output_file(target.dir, stem, target.format.extension());
    ensure_writable(&path, target.force, input)?;
    Ok(path)
}
