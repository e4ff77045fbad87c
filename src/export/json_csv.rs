// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::fs_utils::write_atomically;
use crate::export::notify_export_success;
use crate::models::{REPORT_HEADERS, ReportRow};
use crate::ui::messages::info;
use std::io::Write;
use std::path::Path;

/// Export CSV: fixed header line (even with no rows), then one record per row.
pub(crate) fn export_csv(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    write_atomically(path, |file| {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        wtr.write_record(REPORT_HEADERS)?;
        for row in rows {
            wtr.serialize(row)?;
        }

        wtr.flush()?;
        Ok(())
    })?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export JSON pretty-printed, keyed by the same column names.
pub(crate) fn export_json(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    write_atomically(path, |file| {
        serde_json::to_writer_pretty(&mut *file, rows)?;
        file.write_all(b"\n")?;
        Ok(())
    })?;

    notify_export_success("JSON", path);
    Ok(())
}
