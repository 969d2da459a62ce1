//! Week arithmetic for twelve-week cycles.
//!
//! All functions are pure: the current instant is always passed in.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::domain::foundation::{Timestamp, ValidationError};

use super::{Cycle, Week};

/// Number of weeks in every cycle.
pub const WEEKS_PER_CYCLE: u8 = 12;

/// Number of days in every week.
pub const DAYS_PER_WEEK: i64 = 7;

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_WEEK: i64 = DAYS_PER_WEEK * MS_PER_DAY;

/// Lays out the twelve contiguous weeks of a cycle starting at `start`.
///
/// Fails when the last week would end past the representable calendar.
pub fn generate_weeks(start: Timestamp) -> Result<Vec<Week>, ValidationError> {
    (0..WEEKS_PER_CYCLE)
        .map(|i| {
            let week_start = start.plus_days(i64::from(i) * DAYS_PER_WEEK);
            let week_end = week_start.and_then(|day| day.plus_days(DAYS_PER_WEEK - 1));
            match (week_start, week_end) {
                (Some(start_date), Some(end_date)) => Ok(Week {
                    number: i + 1,
                    start_date,
                    end_date,
                }),
                _ => Err(ValidationError::invalid_format(
                    "start_date",
                    "cycle would end past the supported calendar range",
                )),
            }
        })
        .collect()
}

/// Returns the 1-based week of a cycle starting at `start` that contains `at`.
///
/// Instants before the start map to week 1 and instants after week 12 map
/// to week 12.
pub fn week_number_at(start: Timestamp, at: Timestamp) -> u8 {
    let elapsed_ms = at.duration_since(&start).num_milliseconds();
    let week = elapsed_ms.div_euclid(MS_PER_WEEK) + 1;
    week.clamp(1, i64::from(WEEKS_PER_CYCLE)) as u8
}

/// Returns the week of `cycle` that `now` falls in, clamped to `1..=12`.
pub fn current_week_number(cycle: &Cycle, now: Timestamp) -> u8 {
    week_number_at(cycle.start_date(), now)
}

/// Remaining time until a week closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub expired: bool,
}

impl Countdown {
    /// A countdown whose deadline has passed.
    pub const EXPIRED: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        expired: true,
    };

    fn from_millis(remaining_ms: i64) -> Self {
        Self {
            days: remaining_ms / MS_PER_DAY,
            hours: (remaining_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            expired: false,
        }
    }
}

/// Computes the time left before `week` of `cycle` ends.
///
/// The week ends at 23:59:59.999 on its last day, read in the time zone of
/// `now`. Returns `None` when the cycle has no descriptor for `week`.
pub fn time_until_week_end<Tz: TimeZone>(
    cycle: &Cycle,
    week: u8,
    now: &DateTime<Tz>,
) -> Option<Countdown> {
    let descriptor = cycle.week(week)?;
    let tz = now.timezone();
    let last_day = descriptor
        .end_date
        .as_datetime()
        .with_timezone(&tz)
        .date_naive();
    let end_of_day = last_day.and_time(end_of_day_time());
    let deadline: DateTime<Utc> = match tz.from_local_datetime(&end_of_day).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => end_of_day.and_utc(),
    };

    let remaining_ms = deadline
        .signed_duration_since(now.with_timezone(&Utc))
        .num_milliseconds();
    if remaining_ms < 0 {
        return Some(Countdown::EXPIRED);
    }
    Some(Countdown::from_millis(remaining_ms))
}

fn end_of_day_time() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}
