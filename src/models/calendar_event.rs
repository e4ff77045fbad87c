use super::busy_status::BusyStatus;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// A concrete calendar entry as delivered by a [`CalendarSource`].
///
/// Recurring entries are already expanded: every instance is its own
/// `CalendarEvent`. Start and end keep the offset the entry was stored with.
///
/// [`CalendarSource`]: crate::source::CalendarSource
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarEvent {
    pub subject: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub duration: i64, // minutes
    pub busy_status: BusyStatus,
}

impl CalendarEvent {
    pub fn new(
        subject: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        duration: i64,
        busy_status: BusyStatus,
    ) -> Self {
        Self {
            subject: subject.into(),
            start,
            end,
            duration,
            busy_status,
        }
    }

    /// Start instant normalized to UTC, used for every window comparison.
    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.with_timezone(&Utc)
    }
}
