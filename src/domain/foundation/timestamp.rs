//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp at midnight UTC of the given calendar day.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Parses user input for a cycle start.
    ///
    /// Accepts a bare `YYYY-MM-DD` day, read as midnight UTC, or a full
    /// RFC 3339 timestamp.
    pub fn parse_input(field: &str, input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(Self::from_date(date));
        }
        DateTime::parse_from_rfc3339(input)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|_| {
                ValidationError::invalid_format(field, "expected YYYY-MM-DD or an RFC 3339 timestamp")
            })
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the UTC calendar day of this instant.
    pub fn calendar_day(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days. Returns `None` when the result falls
    /// outside the representable calendar.
    pub fn plus_days(&self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
