use super::{CalendarSource, coarse_day_bounds, expand_recurrence, sort_by_start};
use crate::db::pool::DbPool;
use crate::db::queries::{StoredItem, load_items_for_days};
use crate::errors::{AppError, AppResult};
use crate::models::{BusyStatus, CalendarEvent};
use crate::utils::path::expand_tilde;
use chrono::{DateTime, FixedOffset, Utc};
use std::path::PathBuf;

/// Calendar store kept in a local SQLite file (`calendar_items` table).
///
/// The store is only ever opened read-only.
#[derive(Debug, Clone)]
pub struct SqliteCalendar {
    path: PathBuf,
}

impl SqliteCalendar {
    pub fn new(path: &str) -> Self {
        Self {
            path: expand_tilde(path),
        }
    }

    fn open(&self) -> AppResult<DbPool> {
        if !self.path.exists() {
            return Err(AppError::SourceUnavailable(format!(
                "calendar store not found at {}",
                self.path.display()
            )));
        }

        DbPool::open_read_only(&self.path.to_string_lossy()).map_err(|e| {
            AppError::SourceUnavailable(format!("cannot open {}: {e}", self.path.display()))
        })
    }
}

impl CalendarSource for SqliteCalendar {
    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<CalendarEvent>> {
        let mut pool = self.open()?;
        let (from_day, to_day) = coarse_day_bounds(start, end);

        let items = load_items_for_days(&mut pool, from_day, to_day).map_err(|e| match e {
            AppError::Db(
                inner @ (rusqlite::Error::InvalidColumnType(..)
                | rusqlite::Error::FromSqlConversionFailure(..)),
            ) => AppError::DataIntegrity(format!("unreadable calendar item: {inner}")),
            other => AppError::SourceUnavailable(format!(
                "query rejected by {}: {other}",
                self.path.display()
            )),
        })?;

        // Recurring instances are looked up over the same widened window.
        let expand_from = from_day.and_hms_opt(0, 0, 0).map(|d| d.and_utc()).unwrap_or(start);
        let expand_to = to_day.and_hms_opt(23, 59, 59).map(|d| d.and_utc()).unwrap_or(end);

        let mut events = Vec::with_capacity(items.len());
        for item in &items {
            let event = decode_item(item)?;

            match item.rrule.as_deref() {
                Some(rule) if item.is_recurring() => events.extend(expand_recurrence(
                    &event,
                    rule,
                    item.timezone.as_deref(),
                    expand_from,
                    expand_to,
                )?),
                _ => events.push(event),
            }
        }

        sort_by_start(&mut events);
        Ok(events)
    }
}

fn required<T>(item: &StoredItem, column: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| {
        AppError::DataIntegrity(format!("calendar item #{} has no {column}", item.id))
    })
}

fn parse_instant(item: &StoredItem, column: &str, raw: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).map_err(|e| {
        AppError::DataIntegrity(format!(
            "calendar item #{} has invalid {column} '{raw}': {e}",
            item.id
        ))
    })
}

/// Strict decoding: a row missing any field fails the whole lookup.
fn decode_item(item: &StoredItem) -> AppResult<CalendarEvent> {
    let subject = required(item, "subject", item.subject.clone())?;
    let start_raw = required(item, "start_time", item.start_time.as_deref())?;
    let end_raw = required(item, "end_time", item.end_time.as_deref())?;
    let duration = required(item, "duration", item.duration)?;
    let code = required(item, "busy_status", item.busy_status)?;

    let start = parse_instant(item, "start_time", start_raw)?;
    let end = parse_instant(item, "end_time", end_raw)?;

    let busy_status = BusyStatus::from_code(code).ok_or_else(|| {
        AppError::DataIntegrity(format!(
            "calendar item #{} has unknown busy status {code}",
            item.id
        ))
    })?;

    if duration < 0 {
        return Err(AppError::DataIntegrity(format!(
            "calendar item #{} has negative duration {duration}",
            item.id
        )));
    }

    Ok(CalendarEvent::new(subject, start, end, duration, busy_status))
}
