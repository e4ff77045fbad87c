use serde::Serialize;

/// Free/busy classification of a calendar entry.
///
/// Codes follow the usual groupware numbering:
/// 0 Free, 1 Tentative, 2 Busy, 3 Out of office, 4 Working elsewhere.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BusyStatus {
    Free,
    Tentative,
    Busy,
    OutOfOffice,
    WorkingElsewhere,
}

impl BusyStatus {
    /// Convert store code → enum
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(BusyStatus::Free),
            1 => Some(BusyStatus::Tentative),
            2 => Some(BusyStatus::Busy),
            3 => Some(BusyStatus::OutOfOffice),
            4 => Some(BusyStatus::WorkingElsewhere),
            _ => None,
        }
    }

    /// Convert enum → store code
    pub fn code(&self) -> i64 {
        match self {
            BusyStatus::Free => 0,
            BusyStatus::Tentative => 1,
            BusyStatus::Busy => 2,
            BusyStatus::OutOfOffice => 3,
            BusyStatus::WorkingElsewhere => 4,
        }
    }

    /// Free time and absences never count as meeting load.
    pub fn is_meeting_load(&self) -> bool {
        !matches!(self, BusyStatus::Free | BusyStatus::OutOfOffice)
    }
}
