// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize>(label: &str, items: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting {label} to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(items)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV from pre-formatted rows, so numbers match the terminal view
/// (tonnes always carry two decimals). The header row is written explicitly
/// so an empty dataset still produces a valid file.
pub(crate) fn export_csv(
    label: &str,
    headers: &[&str],
    rows: &[Vec<String>],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting {label} to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
