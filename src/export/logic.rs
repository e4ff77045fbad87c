// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::ReportRow;
use crate::utils::path::expand_tilde;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export report rows to `path` in the given format.
    ///
    /// Refuses to replace an existing file unless `force` or the user
    /// confirms. An empty row list still produces a file with the header.
    pub fn export(
        rows: &[ReportRow],
        path: &Path,
        format: ExportFormat,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
        }

        Ok(())
    }

    /// Destination for an export.
    ///
    /// - explicit `file`: used as given (`~` expanded)
    /// - otherwise: [`default_export_name`](Self::default_export_name) inside `dir`
    ///   (current directory when `dir` is empty)
    ///
    /// The format extension is appended when the name lacks it.
    pub fn resolve_destination<Tz>(
        file: Option<&str>,
        dir: &str,
        format: ExportFormat,
        now: &DateTime<Tz>,
    ) -> PathBuf
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let base = match file {
            Some(f) => expand_tilde(f),
            None => {
                let name = Self::default_export_name(now);
                if dir.trim().is_empty() {
                    PathBuf::from(name)
                } else {
                    expand_tilde(dir).join(name)
                }
            }
        };

        with_extension(base, format.extension())
    }

    /// `YYYY-MM-DD HH-MM` of `now`, in its own timezone.
    pub fn default_export_name<Tz>(now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        now.format("%Y-%m-%d %H-%M").to_string()
    }
}

fn with_extension(path: PathBuf, ext: &str) -> PathBuf {
    let has_ext = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false);

    if has_ext {
        return path;
    }

    let mut name = path.into_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
