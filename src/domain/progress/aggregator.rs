//! Completion percentages for a goal, a week, and the whole cycle.
//!
//! Work items are sub goals plus legacy tasks. A task keeps the week it was
//! filed under; a sub goal belongs to the cycle week containing its
//! creation time.

use crate::domain::cycle::WEEKS_PER_CYCLE;
use crate::domain::foundation::{GoalId, Percentage};
use crate::domain::goal::{Goal, MainGoal};
use crate::domain::state::ApplicationState;

use super::ProgressSummary;

#[derive(Debug, Clone, Copy)]
struct WorkItem {
    completed: bool,
    week: u8,
}

/// Completion of one goal's children. 0% when it has none.
pub fn goal_progress(state: &ApplicationState, goal_id: &GoalId) -> Percentage {
    let sub_goals = state.sub_goals_of(goal_id).map(|sub| sub.completed);
    let tasks = state.tasks_for_goal(goal_id).map(|task| task.completed);
    ProgressSummary::tally(sub_goals.chain(tasks)).percentage
}

/// Completion of the current cycle's work items filed under `week`.
pub fn weekly_progress(state: &ApplicationState, week: u8) -> ProgressSummary {
    ProgressSummary::tally(
        cycle_work_items(state)
            .into_iter()
            .filter(|item| item.week == week)
            .map(|item| item.completed),
    )
}

/// Completion across all twelve weeks of the current cycle.
pub fn overall_progress(state: &ApplicationState) -> ProgressSummary {
    ProgressSummary::tally(
        cycle_work_items(state)
            .into_iter()
            .filter(|item| (1..=WEEKS_PER_CYCLE).contains(&item.week))
            .map(|item| item.completed),
    )
}

/// Main goal a goal ultimately hangs under, if it still exists.
fn owning_main<'a>(state: &'a ApplicationState, goal_id: &GoalId) -> Option<&'a MainGoal> {
    match state.goal(goal_id)? {
        Goal::Main(main) => Some(main),
        Goal::Sub(sub) => state.main_goal(&sub.parent_goal_id),
    }
}

fn cycle_work_items(state: &ApplicationState) -> Vec<WorkItem> {
    let Some(cycle) = state.current_cycle() else {
        return Vec::new();
    };
    let belongs = |goal_id: &GoalId| {
        owning_main(state, goal_id).is_some_and(|main| &main.cycle_id == cycle.id())
    };

    let sub_goals = state
        .sub_goals()
        .filter(|sub| belongs(&sub.parent_goal_id))
        .map(|sub| WorkItem {
            completed: sub.completed,
            week: cycle.week_containing(sub.created_at),
        });
    let tasks = state
        .tasks
        .iter()
        .filter(|task| belongs(&task.goal_id))
        .map(|task| WorkItem {
            completed: task.completed,
            week: task.week,
        });

    sub_goals.chain(tasks).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn ts(m: u32, d: u32) -> Timestamp {
        Timestamp::from_date(NaiveDate::from_ymd_opt(2024, m, d).unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    /// Cycle starting 2024-01-01 with one main goal.
    fn setup() -> (ApplicationState, GoalId) {
        let mut state = ApplicationState::default();
        state.add_cycle("Q1", ts(1, 1), ts(1, 1)).unwrap();
        let main = state.add_main_goal("Fitness", "", 1, ts(1, 1)).unwrap();
        (state, main)
    }

    // ───────────────────────────────────────────────────────────────
    // goal_progress
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn goal_without_children_is_zero() {
        let (state, main) = setup();
        assert_eq!(goal_progress(&state, &main), Percentage::ZERO);
    }

    #[test]
    fn one_of_three_sub_goals_is_33() {
        let (mut state, main) = setup();
        let first = state.add_sub_goal(&main, "a", "", ts(1, 1)).unwrap();
        state.add_sub_goal(&main, "b", "", ts(1, 1)).unwrap();
        state.add_sub_goal(&main, "c", "", ts(1, 1)).unwrap();
        state.toggle_sub_goal(&first, today()).unwrap();

        assert_eq!(goal_progress(&state, &main).value(), 33);
    }

    #[test]
    fn two_of_four_sub_goals_is_50() {
        let (mut state, main) = setup();
        let subs: Vec<GoalId> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|title| state.add_sub_goal(&main, title, "", ts(1, 1)).unwrap())
            .collect();
        state.toggle_sub_goal(&subs[0], today()).unwrap();
        state.toggle_sub_goal(&subs[2], today()).unwrap();

        assert_eq!(goal_progress(&state, &main).value(), 50);
    }

    #[test]
    fn legacy_tasks_count_toward_goal() {
        let (mut state, main) = setup();
        let sub = state.add_sub_goal(&main, "a", "", ts(1, 1)).unwrap();
        let task = state.add_task(&main, "t", 1, ts(1, 1)).unwrap();
        state.toggle_sub_goal(&sub, today()).unwrap();
        state.toggle_task(&task).unwrap();

        assert_eq!(goal_progress(&state, &main), Percentage::HUNDRED);
    }

    // ───────────────────────────────────────────────────────────────
    // weekly / overall
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn sub_goals_fall_into_week_of_creation() {
        let (mut state, main) = setup();
        let week_one = state.add_sub_goal(&main, "a", "", ts(1, 3)).unwrap();
        state.add_sub_goal(&main, "b", "", ts(1, 10)).unwrap();
        state.toggle_sub_goal(&week_one, today()).unwrap();

        let first = weekly_progress(&state, 1);
        assert_eq!((first.completed, first.total), (1, 1));
        assert_eq!(first.percentage, Percentage::HUNDRED);

        let second = weekly_progress(&state, 2);
        assert_eq!((second.completed, second.total), (0, 1));
    }

    #[test]
    fn sub_goals_created_after_cycle_end_land_in_week_twelve() {
        let (mut state, main) = setup();
        state.add_sub_goal(&main, "late", "", ts(6, 1)).unwrap();
        assert_eq!(weekly_progress(&state, 12).total, 1);
    }

    #[test]
    fn tasks_use_their_stored_week() {
        let (mut state, main) = setup();
        state.add_task(&main, "t", 5, ts(1, 1)).unwrap();
        assert_eq!(weekly_progress(&state, 5).total, 1);
        assert_eq!(weekly_progress(&state, 1).total, 0);
    }

    #[test]
    fn other_cycles_are_excluded() {
        let (mut state, main) = setup();
        state.add_sub_goal(&main, "a", "", ts(1, 1)).unwrap();
        state.add_cycle("Q2", ts(4, 1), ts(4, 1)).unwrap();

        assert!(overall_progress(&state).is_empty());
    }

    #[test]
    fn orphaned_sub_goals_are_excluded_from_cycle_totals() {
        let (mut state, main) = setup();
        state.add_sub_goal(&main, "a", "", ts(1, 1)).unwrap();
        state.remove_goal(&main).unwrap();

        assert_eq!(overall_progress(&state).total, 0);
    }

    #[test]
    fn overall_spans_every_week() {
        let (mut state, main) = setup();
        let a = state.add_sub_goal(&main, "a", "", ts(1, 1)).unwrap();
        state.add_sub_goal(&main, "b", "", ts(2, 1)).unwrap();
        state.add_task(&main, "t", 12, ts(1, 1)).unwrap();
        state.toggle_sub_goal(&a, today()).unwrap();

        let overall = overall_progress(&state);
        assert_eq!((overall.completed, overall.total), (1, 3));
        assert_eq!(overall.percentage.value(), 33);
    }

    #[test]
    fn no_cycle_means_empty_progress() {
        let state = ApplicationState::default();
        assert_eq!(weekly_progress(&state, 1), ProgressSummary::default());
        assert_eq!(overall_progress(&state), ProgressSummary::default());
    }

    proptest! {
        #[test]
        fn completing_an_item_never_lowers_progress(
            flags in proptest::collection::vec(any::<bool>(), 1..40),
            pick in any::<prop::sample::Index>(),
        ) {
            let before = ProgressSummary::tally(flags.iter().copied());
            let mut after_flags = flags.clone();
            let index = pick.index(after_flags.len());
            after_flags[index] = true;
            let after = ProgressSummary::tally(after_flags);

            prop_assert!(after.percentage >= before.percentage);
            prop_assert!(after.percentage.value() <= 100);
        }

        #[test]
        fn all_complete_is_hundred(len in 1usize..40) {
            let summary = ProgressSummary::tally(std::iter::repeat(true).take(len));
            prop_assert_eq!(summary.percentage, Percentage::HUNDRED);
        }
    }
}
