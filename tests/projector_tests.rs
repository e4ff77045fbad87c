mod common;
use calreport::core::projector::{minutes_to_hours, project};
use calreport::models::BusyStatus;
use common::event;

#[test]
fn ninety_minutes_is_one_and_a_half_hours() {
    assert_eq!(minutes_to_hours(90), 1.5);
}

#[test]
fn hours_round_to_two_decimals() {
    assert_eq!(minutes_to_hours(125), 2.08);
    assert_eq!(minutes_to_hours(60), 1.0);
    assert_eq!(minutes_to_hours(20), 0.33);
    assert_eq!(minutes_to_hours(0), 0.0);
}

#[test]
fn row_uses_event_own_offset() {
    let ev = event(
        "Design review",
        "2026-03-02T23:30:00-05:00",
        "2026-03-03T00:35:00-05:00",
        65,
        BusyStatus::Busy,
    );

    let row = project(&ev);

    assert_eq!(row.subject, "Design review");
    // 04:30 UTC on the 3rd, but the row keeps the local day and clock.
    assert_eq!(row.day, "2026-03-02");
    assert_eq!(row.start, "23:30");
    assert_eq!(row.end, "00:35");
    assert_eq!(row.duration_minutes, 65);
    assert_eq!(row.duration_hours, 1.08);
}

#[test]
fn table_cells_show_two_decimal_hours() {
    let ev = event("1:1", "2026-03-02T09:00:00Z", "2026-03-02T10:30:00Z", 90, BusyStatus::Tentative);

    assert_eq!(
        project(&ev).to_cells(),
        vec!["1:1", "2026-03-02", "09:00", "10:30", "90", "1.50"]
    );
}
