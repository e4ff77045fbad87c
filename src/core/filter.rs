//! Window and busy-status filtering over a start-sorted event list.

use crate::models::CalendarEvent;
use chrono::{DateTime, Utc};

/// True when `event` belongs in a report for `[start, end)`.
///
/// The comparison uses the UTC-normalized start; the window is half-open,
/// so an event starting exactly at `end` is out.
pub fn is_reportable(event: &CalendarEvent, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    let at = event.start_utc();
    start <= at && at < end && event.busy_status.is_meeting_load()
}

/// Keep the meetings of `[start, end)` from a list sorted by start.
///
/// Entries before `start` are skipped (the source filter is only
/// day-granular); the scan stops at the first entry starting at or after
/// `end`, since nothing later can qualify.
pub fn filter_events(
    events: Vec<CalendarEvent>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<CalendarEvent> {
    let mut kept = Vec::new();

    for event in events {
        if event.start_utc() >= end {
            break;
        }
        if is_reportable(&event, start, end) {
            kept.push(event);
        }
    }

    kept
}
