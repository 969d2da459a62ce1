//! Per-day completion counts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of sub goals completed on each calendar day.
///
/// Entries are overwritten with a fresh count, never incremented, and a
/// day is never removed once recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionHistory(BTreeMap<NaiveDate, u32>);

impl CompletionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the count recorded for `day`.
    pub fn record(&mut self, day: NaiveDate, count: u32) {
        self.0.insert(day, count);
    }

    /// Count recorded for `day`, 0 when nothing was recorded.
    pub fn count_on(&self, day: NaiveDate) -> u32 {
        self.0.get(&day).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn record_overwrites_previous_count() {
        let mut history = CompletionHistory::new();
        history.record(day(3), 2);
        history.record(day(3), 1);
        assert_eq!(history.count_on(day(3)), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn zero_count_keeps_the_day() {
        let mut history = CompletionHistory::new();
        history.record(day(3), 0);
        assert!(!history.is_empty());
        assert_eq!(history.count_on(day(3)), 0);
    }

    #[test]
    fn missing_day_counts_zero() {
        assert_eq!(CompletionHistory::new().count_on(day(9)), 0);
    }

    #[test]
    fn history_serializes_with_date_keys() {
        let mut history = CompletionHistory::new();
        history.record(day(3), 2);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"2024-01-03":2}"#);

        let back: CompletionHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
