pub mod busy_status;
pub mod calendar_event;
pub mod report_row;

pub use busy_status::BusyStatus;
pub use calendar_event::CalendarEvent;
pub use report_row::{REPORT_HEADERS, ReportRow};
