//! ProgressSummary value object - completion counts with their percentage.

use serde::Serialize;

use crate::domain::foundation::Percentage;

/// Completed versus total items with the rounded completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgressSummary {
    pub percentage: Percentage,
    pub completed: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// Tallies an iterator of completion flags.
    pub fn tally<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let (completed, total) = flags
            .into_iter()
            .fold((0, 0), |(done, all), flag| (done + usize::from(flag), all + 1));
        Self {
            percentage: Percentage::of(completed, total),
            completed,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_is_zero_percent() {
        let summary = ProgressSummary::tally(std::iter::empty());
        assert!(summary.is_empty());
        assert_eq!(summary.percentage, Percentage::ZERO);
    }

    #[test]
    fn one_of_three_rounds_to_33() {
        let summary = ProgressSummary::tally([true, false, false]);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percentage.value(), 33);
    }

    #[test]
    fn two_of_three_rounds_to_67() {
        assert_eq!(ProgressSummary::tally([true, true, false]).percentage.value(), 67);
    }

    #[test]
    fn half_rounds_up() {
        let flags = [true, false, false, false, false, false, false, false];
        // 12.5% of 8
        assert_eq!(ProgressSummary::tally(flags).percentage.value(), 13);
    }
}
