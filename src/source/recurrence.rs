use crate::errors::{AppError, AppResult};
use crate::models::CalendarEvent;
use crate::ui::messages::warning;
use chrono::{DateTime, Utc};
use rrule::{RRuleSet, Tz};

/// Upper bound of instances produced for one recurring master.
pub const MAX_INSTANCES: u16 = 1000;

/// Expand a recurring master into the instances starting in `[from, to]`.
///
/// `timezone` is the IANA zone the rule is evaluated in (DST-aware); when
/// absent the rule runs in UTC and instances keep the master's offset.
/// Each instance copies subject, status and duration from the master.
pub fn expand_recurrence(
    master: &CalendarEvent,
    rule: &str,
    timezone: Option<&str>,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> AppResult<Vec<CalendarEvent>> {
    let zone = timezone.map(str::trim).filter(|z| !z.is_empty());

    let dtstart = match zone {
        Some(name) => {
            let tz: chrono_tz::Tz = name.parse().map_err(|_| {
                AppError::DataIntegrity(format!(
                    "unknown timezone '{name}' on recurring event '{}'",
                    master.subject
                ))
            })?;
            format!(
                "DTSTART;TZID={}:{}",
                name,
                master.start.with_timezone(&tz).format("%Y%m%dT%H%M%S")
            )
        }
        None => format!("DTSTART:{}Z", master.start_utc().format("%Y%m%dT%H%M%S")),
    };

    let rule = rule.trim();
    let rule = rule.strip_prefix("RRULE:").unwrap_or(rule);

    let set: RRuleSet = format!("{dtstart}\nRRULE:{rule}").parse().map_err(|e| {
        AppError::DataIntegrity(format!(
            "invalid recurrence rule '{rule}' on '{}': {e}",
            master.subject
        ))
    })?;

    let result = set
        .after(from.with_timezone(&Tz::UTC))
        .before(to.with_timezone(&Tz::UTC))
        .all(MAX_INSTANCES);

    if result.limited {
        warning(format!(
            "Recurring event '{}' truncated to {MAX_INSTANCES} instances.",
            master.subject
        ));
    }

    let span = master.end - master.start;
    let own_offset = master.start.timezone();

    let instances = result
        .dates
        .into_iter()
        .map(|dt| {
            let start = match zone {
                Some(_) => dt.fixed_offset(),
                None => dt.with_timezone(&own_offset),
            };
            CalendarEvent::new(
                master.subject.clone(),
                start,
                start + span,
                master.duration,
                master.busy_status,
            )
        })
        .collect();

    Ok(instances)
}
