//! Calendar sources: where raw meetings come from.

mod recurrence;
mod sqlite;

pub use recurrence::{MAX_INSTANCES, expand_recurrence};
pub use sqlite::SqliteCalendar;

use crate::errors::AppResult;
use crate::models::CalendarEvent;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Anything that can enumerate calendar entries for a time range.
///
/// Implementations return entries sorted ascending by start, with recurring
/// entries already expanded into instances. The range restriction may be
/// coarse (whole days); callers re-filter precisely.
pub trait CalendarSource {
    fn events_between(&self, start: DateTime<Utc>, end: DateTime<Utc>)
    -> AppResult<Vec<CalendarEvent>>;
}

impl<S: CalendarSource + ?Sized> CalendarSource for &S {
    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<CalendarEvent>> {
        (**self).events_between(start, end)
    }
}

/// Day bounds for a coarse lookup of `[start, end)`.
///
/// Stored timestamps carry their own offset (at most ±14h), so the UTC
/// window is widened by one day on each side.
pub fn coarse_day_bounds(start: DateTime<Utc>, end: DateTime<Utc>) -> (NaiveDate, NaiveDate) {
    let from = (start - Duration::days(1)).date_naive();
    let to = (end + Duration::days(1)).date_naive();
    (from, to)
}

/// Stable sort by UTC start.
pub(crate) fn sort_by_start(events: &mut [CalendarEvent]) {
    events.sort_by_key(|e| e.start_utc());
}
