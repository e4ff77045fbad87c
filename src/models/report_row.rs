use serde::Serialize;

/// Column names of the exported table, in file order.
pub const REPORT_HEADERS: [&str; 6] = [
    "Subject",
    "Day",
    "Start",
    "End",
    "Duration (min)",
    "Duration (hours)",
];

/// Flat, immutable projection of one meeting.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
    #[serde(rename = "Duration (min)")]
    pub duration_minutes: i64,
    #[serde(rename = "Duration (hours)")]
    pub duration_hours: f64,
}

impl ReportRow {
    /// Cells as displayed in the `--rows` table.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.day.clone(),
            self.start.clone(),
            self.end.clone(),
            self.duration_minutes.to_string(),
            format!("{:.2}", self.duration_hours),
        ]
    }
}
