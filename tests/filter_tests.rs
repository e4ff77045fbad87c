mod common;
use calreport::core::filter::{filter_events, is_reportable};
use calreport::models::{BusyStatus, CalendarEvent};
use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{event, utc};
use proptest::prelude::*;

const WINDOW_START: &str = "2026-03-02T08:00:00Z";
const WINDOW_END: &str = "2026-03-04T08:00:00Z";

fn window() -> (DateTime<Utc>, DateTime<Utc>) {
    (utc(WINDOW_START), utc(WINDOW_END))
}

#[test]
fn free_and_out_of_office_are_dropped() {
    let (start, end) = window();
    let events = vec![
        event("standup", "2026-03-02T09:00:00Z", "2026-03-02T09:15:00Z", 15, BusyStatus::Busy),
        event("focus", "2026-03-02T10:00:00Z", "2026-03-02T12:00:00Z", 120, BusyStatus::Free),
        event("vacation", "2026-03-02T13:00:00Z", "2026-03-02T17:00:00Z", 240, BusyStatus::OutOfOffice),
        event("maybe", "2026-03-02T14:00:00Z", "2026-03-02T14:30:00Z", 30, BusyStatus::Tentative),
        event("remote", "2026-03-02T15:00:00Z", "2026-03-02T16:00:00Z", 60, BusyStatus::WorkingElsewhere),
    ];

    let kept: Vec<String> = filter_events(events, start, end)
        .into_iter()
        .map(|e| e.subject)
        .collect();

    assert_eq!(kept, vec!["standup", "maybe", "remote"]);
}

#[test]
fn events_before_window_are_skipped_and_scan_continues() {
    let (start, end) = window();
    let events = vec![
        event("early", "2026-03-02T07:59:00Z", "2026-03-02T08:30:00Z", 31, BusyStatus::Busy),
        event("on time", "2026-03-02T08:00:00Z", "2026-03-02T08:30:00Z", 30, BusyStatus::Busy),
    ];

    let kept = filter_events(events, start, end);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].subject, "on time");
}

#[test]
fn event_starting_at_window_end_is_excluded() {
    let (start, end) = window();
    let last = event("late", WINDOW_END, "2026-03-04T09:00:00Z", 60, BusyStatus::Busy);

    assert!(!is_reportable(&last, start, end));
    assert!(filter_events(vec![last], start, end).is_empty());
}

#[test]
fn comparison_uses_utc_instant_not_local_clock() {
    let (start, end) = window();
    // 09:30 local at +02:00 is 07:30 UTC: before the window.
    let shifted = event("offset", "2026-03-02T09:30:00+02:00", "2026-03-02T10:00:00+02:00", 30, BusyStatus::Busy);
    // 07:00 local at -05:00 is 12:00 UTC on the last day: inside.
    let west = event("west", "2026-03-03T07:00:00-05:00", "2026-03-03T08:00:00-05:00", 60, BusyStatus::Busy);

    let kept = filter_events(vec![shifted, west], start, end);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].subject, "west");
}

#[test]
fn scan_stops_at_first_event_past_window() {
    let (start, end) = window();
    // Unsorted tail on purpose: anything after the first out-of-window entry is ignored.
    let events = vec![
        event("in", "2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z", 60, BusyStatus::Busy),
        event("after", "2026-03-05T09:00:00Z", "2026-03-05T10:00:00Z", 60, BusyStatus::Busy),
        event("stray", "2026-03-03T09:00:00Z", "2026-03-03T10:00:00Z", 60, BusyStatus::Busy),
    ];

    let kept = filter_events(events, start, end);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].subject, "in");
}

#[test]
fn empty_input_gives_empty_output() {
    let (start, end) = window();
    assert!(filter_events(Vec::new(), start, end).is_empty());
}

// ---------------------------------------------------------------------------
// Early exit gives the same result as a full scan, for any sorted input.
// ---------------------------------------------------------------------------

fn arb_status() -> impl Strategy<Value = BusyStatus> {
    prop_oneof![
        Just(BusyStatus::Free),
        Just(BusyStatus::Tentative),
        Just(BusyStatus::Busy),
        Just(BusyStatus::OutOfOffice),
        Just(BusyStatus::WorkingElsewhere),
    ]
}

/// Start offsets in minutes around the window (which spans 2880 minutes).
fn arb_events() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec((-1500i64..4500, 0i64..240, arb_status()), 0..40).prop_map(|specs| {
        let base = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let mut events: Vec<CalendarEvent> = specs
            .into_iter()
            .enumerate()
            .map(|(i, (offset, minutes, status))| {
                let start = (base + Duration::minutes(offset)).fixed_offset();
                CalendarEvent::new(
                    format!("e{i}"),
                    start,
                    start + Duration::minutes(minutes),
                    minutes,
                    status,
                )
            })
            .collect();
        events.sort_by_key(|e| e.start_utc());
        events
    })
}

proptest! {
    #[test]
    fn early_exit_matches_full_scan(events in arb_events()) {
        let (start, end) = window();

        let full_scan: Vec<CalendarEvent> = events
            .iter()
            .filter(|e| is_reportable(e, start, end))
            .cloned()
            .collect();

        prop_assert_eq!(filter_events(events, start, end), full_scan);
    }

    #[test]
    fn kept_events_satisfy_window_and_status(events in arb_events()) {
        let (start, end) = window();

        for e in filter_events(events, start, end) {
            prop_assert!(start <= e.start_utc() && e.start_utc() < end);
            prop_assert!(e.busy_status != BusyStatus::Free);
            prop_assert!(e.busy_status != BusyStatus::OutOfOffice);
        }
    }
}
