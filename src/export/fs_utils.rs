// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check whether a file may be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Write(format!(
            "export cancelled, '{}' not overwritten",
            path.display()
        )))
    }
}

/// Sibling temp file used while writing `path`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `path` all-or-nothing: `body` fills a temp file that is renamed
/// over `path` only when everything succeeded.
pub(crate) fn write_atomically<F>(path: &Path, body: F) -> AppResult<()>
where
    F: FnOnce(&mut File) -> AppResult<()>,
{
    let tmp = temp_path(path);

    let result = File::create(&tmp)
        .map_err(AppError::from)
        .and_then(|mut file| {
            body(&mut file)?;
            file.sync_all()?;
            Ok(())
        })
        .and_then(|_| fs::rename(&tmp, path).map_err(AppError::from));

    result.map_err(|e| {
        fs::remove_file(&tmp).ok();
        match e {
            AppError::Write(_) => e,
            other => AppError::Write(format!("{}: {other}", path.display())),
        }
    })
}
