//! Time utilities: reference timezone parsing and window formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Parse an IANA zone name such as `Africa/Harare` or `UTC`.
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}

/// `YYYY-MM-DD HH:MM` of an instant seen from `tz`.
pub fn format_in(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string()
}
