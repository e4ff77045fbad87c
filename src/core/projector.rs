//! CalendarEvent → ReportRow.

use crate::models::{CalendarEvent, ReportRow};

/// Minutes as hours, rounded to two decimals (125 → 2.08).
pub fn minutes_to_hours(minutes: i64) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

/// Project an event into its report row.
///
/// Day and times are rendered in the event's own offset, not the
/// reference timezone.
pub fn project(event: &CalendarEvent) -> ReportRow {
    ReportRow {
        subject: event.subject.clone(),
        day: event.start.format("%Y-%m-%d").to_string(),
        start: event.start.format("%H:%M").to_string(),
        end: event.end.format("%H:%M").to_string(),
        duration_minutes: event.duration,
        duration_hours: minutes_to_hours(event.duration),
    }
}
