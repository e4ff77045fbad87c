//! Report session: the meetings of one window, held for listing,
//! totals and export.

use crate::core::filter::filter_events;
use crate::core::projector::{minutes_to_hours, project};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::models::{CalendarEvent, REPORT_HEADERS, ReportRow};
use crate::source::CalendarSource;
use crate::ui::messages::info;
use crate::utils::table::Table;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use std::path::PathBuf;

/// Half-open reporting window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReportWindow {
    pub fn starting_at(start: DateTime<Utc>, days: u32) -> Self {
        Self {
            start,
            end: start + Duration::days(i64::from(days)),
        }
    }
}

#[derive(Debug)]
enum SessionState {
    Empty,
    Loaded {
        window: ReportWindow,
        events: Vec<CalendarEvent>,
    },
}

/// Meetings loaded from a [`CalendarSource`] for one window.
///
/// Every held event starts inside the window and is neither free nor
/// out-of-office. Reloading replaces the collection as a whole.
#[derive(Debug)]
pub struct ReportSession<S: CalendarSource> {
    source: S,
    timezone: Tz,
    state: SessionState,
}

impl<S: CalendarSource> ReportSession<S> {
    /// Create a session; loads `num_of_days` from now when given,
    /// otherwise stays empty until [`load`](Self::load) is called.
    pub fn new(source: S, timezone: Tz, num_of_days: Option<u32>) -> AppResult<Self> {
        let mut session = Self {
            source,
            timezone,
            state: SessionState::Empty,
        };

        if let Some(days) = num_of_days {
            session.load(days)?;
        }

        Ok(session)
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Current instant in the reference timezone.
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }

    /// Load the meetings of the next `days` days, starting now.
    pub fn load(&mut self, days: u32) -> AppResult<()> {
        let start = self.now().with_timezone(&Utc);
        self.load_from(start, days)
    }

    /// Load the meetings of `[start, start + days)`.
    ///
    /// On error the previously held collection is kept.
    pub fn load_from(&mut self, start: DateTime<Utc>, days: u32) -> AppResult<()> {
        let window = ReportWindow::starting_at(start, days);

        let raw = self.source.events_between(window.start, window.end)?;
        let events = filter_events(raw, window.start, window.end);

        self.state = SessionState::Loaded { window, events };
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SessionState::Loaded { .. })
    }

    pub fn window(&self) -> Option<ReportWindow> {
        match &self.state {
            SessionState::Empty => None,
            SessionState::Loaded { window, .. } => Some(*window),
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        match &self.state {
            SessionState::Empty => &[],
            SessionState::Loaded { events, .. } => events,
        }
    }

    /// Rows in held order; empty before the first load.
    pub fn list_rows(&self) -> Vec<ReportRow> {
        self.events().iter().map(project).collect()
    }

    pub fn total_duration_minutes(&self) -> i64 {
        self.events().iter().map(|e| e.duration).sum()
    }

    pub fn total_duration_hours(&self) -> f64 {
        minutes_to_hours(self.total_duration_minutes())
    }

    /// One line per meeting: subject, start and end.
    pub fn print_listing(&self) {
        if self.events().is_empty() {
            info("No meetings in the selected window.");
            return;
        }

        for ev in self.events() {
            println!("{}", listing_line(ev));
        }
    }

    pub fn print_summary(&self) {
        println!("{}", summary_line(self.total_duration_hours()));
    }

    /// Rows as an aligned table (same columns as the export).
    pub fn print_rows(&self) {
        let rows = self.list_rows();
        if rows.is_empty() {
            info("No meetings in the selected window.");
            return;
        }

        let mut table = Table::with_headers(&REPORT_HEADERS);
        for row in &rows {
            table.add_row(row.to_cells());
        }
        print!("{}", table.render());
    }

    /// Write the held rows to `file` (or a timestamped default name in
    /// `dir`). Returns the path actually written.
    pub fn export(
        &self,
        file: Option<&str>,
        dir: &str,
        format: ExportFormat,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = ExportLogic::resolve_destination(file, dir, format, &self.now());
        ExportLogic::export(&self.list_rows(), &path, format, force)?;
        Ok(path)
    }
}

pub fn listing_line(event: &CalendarEvent) -> String {
    format!(
        "Subject: {} - Start: {} - End: {}",
        event.subject,
        event.start.format("%Y-%m-%d %H:%M%:z"),
        event.end.format("%Y-%m-%d %H:%M%:z")
    )
}

pub fn summary_line(hours: f64) -> String {
    format!("Total time of meetings: {hours:.2}h")
}
