use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::NaiveDate;
use rusqlite::{Result, Row, params};

/// Raw `calendar_items` row. Every column may be missing; decoding into a
/// `CalendarEvent` is where incomplete rows are rejected.
#[derive(Debug, Clone, Default)]
pub struct StoredItem {
    pub id: i64,
    pub subject: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration: Option<i64>,
    pub busy_status: Option<i64>,
    pub rrule: Option<String>,
    pub timezone: Option<String>,
}

impl StoredItem {
    pub fn is_recurring(&self) -> bool {
        self.rrule.as_deref().is_some_and(|r| !r.trim().is_empty())
    }
}

/// Coarse, day-granular lookup.
///
/// Returns rows whose start day lies in `[from, to]`, every recurring
/// master (its instances may fall anywhere), and rows whose start is
/// missing or does not begin with an ISO date, so the caller can reject them.
pub fn load_items_for_days(
    pool: &mut DbPool,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<StoredItem>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, subject, start_time, end_time, duration, busy_status, rrule, timezone
         FROM calendar_items
         WHERE start_time IS NULL
            OR start_time NOT GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]*'
            OR (rrule IS NOT NULL AND trim(rrule) <> '')
            OR substr(start_time, 1, 10) BETWEEN ?1 AND ?2
         ORDER BY start_time ASC, id ASC",
    )?;

    let from_str = from.format("%Y-%m-%d").to_string();
    let to_str = to.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![from_str, to_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Mapping DB → StoredItem.
pub fn map_row(row: &Row<'_>) -> Result<StoredItem> {
    Ok(StoredItem {
        id: row.get("id")?,
        subject: row.get("subject")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        duration: row.get("duration")?,
        busy_status: row.get("busy_status")?,
        rrule: row.get("rrule")?,
        timezone: row.get("timezone")?,
    })
}
