//! Completion trend, headline statistics, and the XP bar.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::domain::cycle::calendar::DAYS_PER_WEEK;
use crate::domain::foundation::Percentage;
use crate::domain::state::ApplicationState;

/// Sub goals completed on one day of a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub weekday: Weekday,
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub main_goals: usize,
    pub sub_goals: usize,
    pub completed_sub_goals: usize,
    pub completion_rate: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpProgress {
    pub level: u32,
    pub xp: i64,
    pub threshold: i64,
    pub fill: Percentage,
}

/// Daily completion counts for the seven days of `week` in the current cycle.
///
/// Empty when there is no current cycle or the week does not exist.
pub fn week_completion_data(state: &ApplicationState, week: u8) -> Vec<DayCount> {
    let Some(start) = state
        .current_cycle()
        .and_then(|cycle| cycle.week(week))
        .map(|week| week.start_date)
    else {
        return Vec::new();
    };

    start
        .calendar_day()
        .iter_days()
        .take(DAYS_PER_WEEK as usize)
        .map(|date| DayCount {
            weekday: date.weekday(),
            date,
            count: state.completion_history.count_on(date),
        })
        .collect()
}

/// Goal counts across every cycle.
pub fn statistics(state: &ApplicationState) -> Statistics {
    let sub_goals = state.sub_goals().count();
    let completed_sub_goals = state.sub_goals().filter(|sub| sub.completed).count();
    Statistics {
        main_goals: state.main_goals().count(),
        sub_goals,
        completed_sub_goals,
        completion_rate: Percentage::of(completed_sub_goals, sub_goals),
    }
}

pub fn xp_progress(state: &ApplicationState) -> XpProgress {
    let user = &state.user;
    XpProgress {
        level: user.level,
        xp: user.xp,
        threshold: user.threshold(),
        fill: user.level_fill(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn seeded() -> ApplicationState {
        let mut state = ApplicationState::default();
        let start = Timestamp::from_date(day(1, 1));
        state.add_cycle("Q1", start, start).unwrap();
        let main = state.add_main_goal("Write", "", 1, start).unwrap();
        let a = state.add_sub_goal(&main, "Outline", "", start).unwrap();
        let b = state.add_sub_goal(&main, "Draft", "", start).unwrap();
        state.add_sub_goal(&main, "Edit", "", start).unwrap();
        state.toggle_sub_goal(&a, day(1, 9)).unwrap();
        state.toggle_sub_goal(&b, day(1, 9)).unwrap();
        state
    }

    #[test]
    fn week_trend_has_seven_days_from_week_start() {
        let state = seeded();
        let trend = week_completion_data(&state, 2);

        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, day(1, 8));
        assert_eq!(trend[0].weekday, Weekday::Mon);
        assert_eq!(trend[1].count, 2);
        assert_eq!(trend[6].date, day(1, 14));
        assert_eq!(trend[6].count, 0);
    }

    #[test]
    fn unknown_week_has_no_trend() {
        assert!(week_completion_data(&seeded(), 13).is_empty());
        assert!(week_completion_data(&ApplicationState::default(), 1).is_empty());
    }

    #[test]
    fn statistics_count_goals_and_rate() {
        let stats = statistics(&seeded());
        assert_eq!(stats.main_goals, 1);
        assert_eq!(stats.sub_goals, 3);
        assert_eq!(stats.completed_sub_goals, 2);
        assert_eq!(stats.completion_rate.value(), 67);
    }

    #[test]
    fn statistics_on_empty_state_are_zero() {
        let stats = statistics(&ApplicationState::default());
        assert_eq!(stats.completion_rate, Percentage::ZERO);
    }

    #[test]
    fn xp_bar_reflects_current_level() {
        let progress = xp_progress(&seeded());
        assert_eq!(progress.level, 1);
        assert_eq!(progress.xp, 40);
        assert_eq!(progress.threshold, 100);
        assert_eq!(progress.fill.value(), 40);
    }

    #[test]
    fn negative_xp_shows_empty_bar() {
        let mut state = ApplicationState::default();
        state.user.award(-20, "reopened");
        assert_eq!(xp_progress(&state).fill, Percentage::ZERO);
        assert_eq!(xp_progress(&state).xp, -20);
    }
}
