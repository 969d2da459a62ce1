//! Cycle aggregate - a fixed twelve-week planning period.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_non_empty, CycleId, Timestamp, ValidationError};

use super::calendar::{self, WEEKS_PER_CYCLE};

/// One seven-day span of a cycle.
///
/// `end_date` is the start of the week's last day, at the same time of day
/// as `start_date`. Countdown logic extends it to the end of that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub number: u8,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// The Cycle aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    id: CycleId,
    title: String,
    start_date: Timestamp,
    #[serde(default)]
    weeks: Vec<Week>,
    created_at: Timestamp,
}

impl Cycle {
    /// Creates a new cycle starting at `start_date` with its twelve weeks laid out.
    pub fn new(
        title: &str,
        start_date: Timestamp,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = require_non_empty("title", title)?;
        let weeks = calendar::generate_weeks(start_date)?;
        Ok(Self {
            id: CycleId::new(),
            title,
            start_date,
            weeks,
            created_at,
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CycleId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Returns the descriptor for a 1-based week number.
    pub fn week(&self, number: u8) -> Option<&Week> {
        if number == 0 {
            return None;
        }
        self.weeks.get(usize::from(number) - 1)
    }

    /// Returns the start of the cycle's final day (start + 83 days).
    ///
    /// Read from week twelve, which `new` and `ensure_weeks` always lay out.
    pub fn end_date(&self) -> Timestamp {
        self.week(WEEKS_PER_CYCLE)
            .map_or(self.start_date, |week| week.end_date)
    }

    /// Returns the 1-based week containing `at`, clamped to the cycle.
    pub fn week_containing(&self, at: Timestamp) -> u8 {
        calendar::week_number_at(self.start_date, at)
    }

    /// Rebuilds the week descriptors when a saved cycle lacks a full set.
    ///
    /// Returns true when the weeks were regenerated.
    pub fn ensure_weeks(&mut self) -> Result<bool, ValidationError> {
        if self.weeks.len() == usize::from(WEEKS_PER_CYCLE) {
            return Ok(false);
        }
        self.weeks = calendar::generate_weeks(self.start_date)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn jan_first() -> Timestamp {
        Timestamp::from_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn new_cycle_has_twelve_weeks() {
        let cycle = Cycle::new("Q1 push", jan_first(), jan_first()).unwrap();
        assert_eq!(cycle.weeks().len(), 12);
        assert_eq!(cycle.title(), "Q1 push");
    }

    #[test]
    fn new_cycle_rejects_empty_title() {
        let result = Cycle::new("  ", jan_first(), jan_first());
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn week_lookup_is_one_based() {
        let cycle = Cycle::new("Q1", jan_first(), jan_first()).unwrap();
        assert!(cycle.week(0).is_none());
        assert_eq!(cycle.week(1).unwrap().start_date, jan_first());
        assert_eq!(cycle.week(12).unwrap().number, 12);
        assert!(cycle.week(13).is_none());
    }

    #[test]
    fn end_date_is_last_day_of_week_twelve() {
        let cycle = Cycle::new("Q1", jan_first(), jan_first()).unwrap();
        assert_eq!(cycle.end_date(), cycle.week(12).unwrap().end_date);
        assert_eq!(
            cycle.end_date().calendar_day(),
            NaiveDate::from_ymd_opt(2024, 3, 24).unwrap()
        );
    }

    #[test]
    fn new_cycle_rejects_start_at_calendar_end() {
        let start = Timestamp::parse_input("start_date", "+262142-12-30").unwrap();
        let result = Cycle::new("Too late", start, jan_first());
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn cycle_serializes_with_camel_case_keys() {
        let cycle = Cycle::new("Q1", jan_first(), jan_first()).unwrap();
        let json = serde_json::to_value(&cycle).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json["weeks"][0].get("endDate").is_some());
    }
}
