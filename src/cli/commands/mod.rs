pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod summary;

use crate::config::Config;
use crate::core::ReportSession;
use crate::errors::AppResult;
use crate::source::SqliteCalendar;
use crate::ui::messages::header;
use crate::utils::time::{format_in, parse_timezone};

/// Load a session over the configured store for `days` (config default when None).
pub(crate) fn open_session(
    cfg: &Config,
    days: Option<u32>,
) -> AppResult<ReportSession<SqliteCalendar>> {
    let tz = parse_timezone(&cfg.timezone)?;
    let source = SqliteCalendar::new(&cfg.database);
    let days = days.unwrap_or(cfg.default_days);

    ReportSession::new(source, tz, Some(days))
}

pub(crate) fn print_window(session: &ReportSession<SqliteCalendar>) {
    if let Some(w) = session.window() {
        let tz = session.timezone();
        header(format!(
            "Meetings {} → {} ({})",
            format_in(w.start, tz),
            format_in(w.end, tz),
            tz.name()
        ));
    }
}
