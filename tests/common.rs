#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calreport::errors::AppResult;
use calreport::models::{BusyStatus, CalendarEvent};
use calreport::source::CalendarSource;
use chrono::{DateTime, FixedOffset, Utc};
use rusqlite::{Connection, params};
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real config file.
pub fn cal() -> Command {
    let home = env::temp_dir().join("calreport_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("calreport");
    cmd.env("HOME", &home).env("APPDATA", &home).env("NO_COLOR", "1");
    cmd
}

/// Unique store path inside the system temp dir; any previous file is removed.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_calreport.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path inside tempdir, removed beforehand.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid RFC 3339 timestamp")
}

pub fn utc(rfc3339: &str) -> DateTime<Utc> {
    at(rfc3339).with_timezone(&Utc)
}

pub fn event(subject: &str, start: &str, end: &str, minutes: i64, status: BusyStatus) -> CalendarEvent {
    CalendarEvent::new(subject, at(start), at(end), minutes, status)
}

/// In-memory calendar: day-granular pre-filter and sort, like a real store.
pub struct FixedCalendar {
    pub events: Vec<CalendarEvent>,
    pub calls: Cell<usize>,
}

impl FixedCalendar {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events,
            calls: Cell::new(0),
        }
    }
}

impl CalendarSource for FixedCalendar {
    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<CalendarEvent>> {
        self.calls.set(self.calls.get() + 1);
        let (from, to) = calreport::source::coarse_day_bounds(start, end);
        let mut out: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|e| {
                let day = e.start.date_naive();
                from <= day && day <= to
            })
            .cloned()
            .collect();
        out.sort_by_key(|e| e.start_utc());
        Ok(out)
    }
}

/// Create an empty store through the library migration runner.
pub fn init_store(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open db");
    calreport::db::initialize::init_db(&conn).expect("init db");
    conn
}

/// Insert a single (non-recurring) entry.
pub fn insert_item(
    conn: &Connection,
    subject: &str,
    start: &str,
    end: &str,
    minutes: i64,
    status: BusyStatus,
) {
    conn.execute(
        "INSERT INTO calendar_items (subject, start_time, end_time, duration, busy_status)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![subject, start, end, minutes, status.code()],
    )
    .expect("insert item");
}

/// Insert a recurring master.
pub fn insert_recurring(
    conn: &Connection,
    subject: &str,
    start: &str,
    end: &str,
    minutes: i64,
    status: BusyStatus,
    rrule: &str,
    timezone: Option<&str>,
) {
    conn.execute(
        "INSERT INTO calendar_items (subject, start_time, end_time, duration, busy_status, rrule, timezone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![subject, start, end, minutes, status.code(), rrule, timezone],
    )
    .expect("insert recurring item");
}

/// RFC 3339 of now + `minutes`, in UTC+02:00.
pub fn from_now(minutes: i64) -> String {
    let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
    (Utc::now() + chrono::Duration::minutes(minutes))
        .with_timezone(&offset)
        .to_rfc3339()
}
