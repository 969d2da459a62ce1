//! ApplicationState - the whole tracker model as one serializable value.
//!
//! Holds every cycle, goal, and legacy task plus the selection pointers,
//! the user's XP standing, and the completion history. Mutations here are
//! purely in-memory; persisting the result is the caller's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::cycle::{current_week_number, Cycle};
use crate::domain::foundation::{CycleId, GoalId, TaskId, Timestamp, ValidationError};
use crate::domain::gamification::{rewards_for_toggle, UserProgress, XpAward};
use crate::domain::goal::{Goal, MainGoal, SubGoal, Task};

use super::{CompletionHistory, View};

/// Maximum number of weekly priorities shown at once.
pub const WEEKLY_PRIORITY_SLOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationState {
    pub cycles: Vec<Cycle>,
    pub goals: Vec<Goal>,
    pub tasks: Vec<Task>,
    pub current_cycle_id: Option<CycleId>,
    pub current_view: View,
    pub current_week: u8,
    pub user: UserProgress,
    pub completion_history: CompletionHistory,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            cycles: Vec::new(),
            goals: Vec::new(),
            tasks: Vec::new(),
            current_cycle_id: None,
            current_view: View::default(),
            current_week: 1,
            user: UserProgress::default(),
            completion_history: CompletionHistory::new(),
        }
    }
}

/// Outcome of toggling a sub goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubGoalToggle {
    pub id: GoalId,
    pub completed: bool,
    /// True when this toggle completed the last open sibling.
    pub parent_completed: bool,
    /// XP awards applied, in order.
    pub awards: Vec<XpAward>,
}

impl SubGoalToggle {
    /// Net XP change of the toggle.
    pub fn xp_delta(&self) -> i64 {
        self.awards.iter().map(|award| award.amount).sum()
    }

    /// Total levels gained across all awards of the toggle.
    pub fn levels_gained(&self) -> u32 {
        self.awards.iter().map(|award| award.levels_gained).sum()
    }
}

impl ApplicationState {
    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    pub fn cycle(&self, id: &CycleId) -> Option<&Cycle> {
        self.cycles.iter().find(|cycle| cycle.id() == id)
    }

    /// The selected cycle, if the selection resolves.
    pub fn current_cycle(&self) -> Option<&Cycle> {
        self.current_cycle_id
            .as_ref()
            .and_then(|id| self.cycle(id))
    }

    pub fn goal(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id() == id)
    }

    pub fn main_goal(&self, id: &GoalId) -> Option<&MainGoal> {
        self.goal(id).and_then(Goal::as_main)
    }

    pub fn main_goals(&self) -> impl Iterator<Item = &MainGoal> {
        self.goals.iter().filter_map(Goal::as_main)
    }

    pub fn sub_goals(&self) -> impl Iterator<Item = &SubGoal> {
        self.goals.iter().filter_map(Goal::as_sub)
    }

    /// Main goals belonging to `cycle_id`, in creation order.
    pub fn main_goals_in<'a>(&'a self, cycle_id: &'a CycleId) -> impl Iterator<Item = &'a MainGoal> {
        self.main_goals().filter(move |goal| &goal.cycle_id == cycle_id)
    }

    /// Sub goals whose parent is `main_id`.
    pub fn sub_goals_of<'a>(&'a self, main_id: &'a GoalId) -> impl Iterator<Item = &'a SubGoal> {
        self.sub_goals()
            .filter(move |goal| &goal.parent_goal_id == main_id)
    }

    /// Legacy tasks linked to `goal_id`.
    pub fn tasks_for_goal<'a>(&'a self, goal_id: &'a GoalId) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |task| &task.goal_id == goal_id)
    }

    /// The current cycle's main goals ranked 1..=3, lowest rank first.
    ///
    /// Ties keep creation order; at most three goals are returned.
    pub fn top_priorities(&self) -> Vec<&MainGoal> {
        let Some(cycle_id) = self.current_cycle_id.as_ref() else {
            return Vec::new();
        };
        let mut ranked: Vec<&MainGoal> = self
            .main_goals_in(cycle_id)
            .filter(|goal| goal.has_weekly_rank())
            .collect();
        ranked.sort_by_key(|goal| goal.weekly_priority);
        ranked.truncate(WEEKLY_PRIORITY_SLOTS);
        ranked
    }

    /// Sub goals of the top priorities, each paired with its parent.
    pub fn sub_goals_for_top_priorities(&self) -> Vec<(&MainGoal, &SubGoal)> {
        self.top_priorities()
            .into_iter()
            .flat_map(|main| self.sub_goals_of(&main.id).map(move |sub| (main, sub)))
            .collect()
    }

    // ───────────────────────────────────────────────────────────────
    // Derived fields
    // ───────────────────────────────────────────────────────────────

    /// Points the week pointer at the week of the current cycle containing `now`.
    ///
    /// Leaves the pointer alone when no cycle is selected.
    pub fn refresh_current_week(&mut self, now: Timestamp) {
        if let Some(week) = self.current_cycle().map(|cycle| current_week_number(cycle, now)) {
            self.current_week = week;
        }
    }

    /// Recounts the sub goals completed on `day` into the history.
    pub fn refresh_history(&mut self, day: NaiveDate) {
        let count = self.sub_goals().filter(|goal| goal.completed_on(day)).count();
        self.completion_history
            .record(day, u32::try_from(count).unwrap_or(u32::MAX));
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Adds a cycle starting at `start`, selects it, and refreshes the week pointer.
    pub fn add_cycle(
        &mut self,
        title: &str,
        start: Timestamp,
        now: Timestamp,
    ) -> Result<CycleId, ValidationError> {
        let cycle = Cycle::new(title, start, now)?;
        let id = cycle.id().clone();
        self.cycles.push(cycle);
        self.current_cycle_id = Some(id.clone());
        self.refresh_current_week(now);
        Ok(id)
    }

    /// Switches the selected cycle without checking that it exists.
    pub fn select_cycle(&mut self, id: CycleId, now: Timestamp) {
        self.current_cycle_id = Some(id);
        self.refresh_current_week(now);
    }

    pub fn add_main_goal(
        &mut self,
        title: &str,
        description: &str,
        priority: i32,
        now: Timestamp,
    ) -> Result<GoalId, ValidationError> {
        let cycle_id = self
            .current_cycle()
            .map(|cycle| cycle.id().clone())
            .ok_or(ValidationError::NoActiveCycle)?;
        let goal = MainGoal::new(cycle_id, title, description, priority, now)?;
        let id = goal.id.clone();
        self.goals.push(goal.into());
        Ok(id)
    }

    pub fn add_sub_goal(
        &mut self,
        parent_id: &GoalId,
        title: &str,
        description: &str,
        now: Timestamp,
    ) -> Result<GoalId, ValidationError> {
        if self.main_goal(parent_id).is_none() {
            return Err(ValidationError::missing_reference("main goal", parent_id.as_str()));
        }
        let goal = SubGoal::new(parent_id.clone(), title, description, now)?;
        let id = goal.id.clone();
        self.goals.push(goal.into());
        Ok(id)
    }

    /// Flips a sub goal, applies the XP rules, and recounts today's history.
    pub fn toggle_sub_goal(
        &mut self,
        id: &GoalId,
        today: NaiveDate,
    ) -> Result<SubGoalToggle, ValidationError> {
        let sub = self
            .goals
            .iter_mut()
            .find(|goal| goal.id() == id)
            .and_then(Goal::as_sub_mut)
            .ok_or_else(|| ValidationError::missing_reference("sub goal", id.as_str()))?;

        let completed = sub.toggle(today);
        let sub_title = sub.title.clone();
        let parent_id = sub.parent_goal_id.clone();

        let parent_completed =
            completed && self.sub_goals_of(&parent_id).all(|sibling| sibling.completed);
        let parent_title = parent_completed.then(|| {
            self.goal(&parent_id)
                .map(|parent| parent.title().to_string())
                .unwrap_or_default()
        });

        let awards = rewards_for_toggle(&sub_title, completed, parent_title.as_deref())
            .into_iter()
            .map(|reward| self.user.award(reward.amount(), reward.to_string()))
            .collect();

        self.refresh_history(today);

        Ok(SubGoalToggle {
            id: id.clone(),
            completed,
            parent_completed,
            awards,
        })
    }

    /// Adds a legacy task linked to any existing goal.
    pub fn add_task(
        &mut self,
        goal_id: &GoalId,
        title: &str,
        week: u8,
        now: Timestamp,
    ) -> Result<TaskId, ValidationError> {
        if self.goal(goal_id).is_none() {
            return Err(ValidationError::missing_reference("goal", goal_id.as_str()));
        }
        let task = Task::new(goal_id.clone(), title, week, now)?;
        let id = task.id.clone();
        self.tasks.push(task);
        Ok(id)
    }

    pub fn toggle_task(&mut self, id: &TaskId) -> Result<bool, ValidationError> {
        self.tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .map(Task::toggle)
            .ok_or_else(|| ValidationError::missing_reference("task", id.as_str()))
    }

    pub fn remove_task(&mut self, id: &TaskId) -> Result<Task, ValidationError> {
        let index = self
            .tasks
            .iter()
            .position(|task| &task.id == id)
            .ok_or_else(|| ValidationError::missing_reference("task", id.as_str()))?;
        Ok(self.tasks.remove(index))
    }

    /// Removes a goal. Sub goals and tasks pointing at it are left dangling.
    pub fn remove_goal(&mut self, id: &GoalId) -> Result<Goal, ValidationError> {
        let index = self
            .goals
            .iter()
            .position(|goal| goal.id() == id)
            .ok_or_else(|| ValidationError::missing_reference("goal", id.as_str()))?;
        Ok(self.goals.remove(index))
    }

    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_date(day(y, m, d))
    }

    fn state_with_cycle() -> ApplicationState {
        let mut state = ApplicationState::default();
        state.add_cycle("Q1", ts(2024, 1, 1), ts(2024, 1, 1)).unwrap();
        state
    }

    fn main_with_subs(state: &mut ApplicationState, count: usize) -> (GoalId, Vec<GoalId>) {
        let main = state.add_main_goal("Get fit", "", 1, ts(2024, 1, 1)).unwrap();
        let subs = (0..count)
            .map(|i| {
                state
                    .add_sub_goal(&main, &format!("Step {}", i), "", ts(2024, 1, 1))
                    .unwrap()
            })
            .collect();
        (main, subs)
    }

    // ───────────────────────────────────────────────────────────────
    // Cycles
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn add_cycle_selects_it_and_sets_week() {
        let mut state = ApplicationState::default();
        let id = state
            .add_cycle("Q1", ts(2024, 1, 1), ts(2024, 1, 9))
            .unwrap();

        assert_eq!(state.current_cycle_id.as_ref(), Some(&id));
        assert_eq!(state.current_week, 2);
        assert_eq!(state.cycles.len(), 1);
    }

    #[test]
    fn add_cycle_with_empty_title_changes_nothing() {
        let mut state = ApplicationState::default();
        let result = state.add_cycle("", ts(2024, 1, 1), ts(2024, 1, 1));

        assert!(result.is_err());
        assert_eq!(state, ApplicationState::default());
    }

    #[test]
    fn select_cycle_accepts_unknown_id() {
        let mut state = state_with_cycle();
        state.current_week = 5;
        state.select_cycle(CycleId::from("nope"), ts(2024, 2, 1));

        assert_eq!(state.current_cycle_id, Some(CycleId::from("nope")));
        assert!(state.current_cycle().is_none());
        assert_eq!(state.current_week, 5);
    }

    // ───────────────────────────────────────────────────────────────
    // Goals
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn add_main_goal_requires_active_cycle() {
        let mut state = ApplicationState::default();
        let result = state.add_main_goal("Read", "", 1, ts(2024, 1, 1));
        assert_eq!(result, Err(ValidationError::NoActiveCycle));
        assert!(state.goals.is_empty());
    }

    #[test]
    fn add_sub_goal_requires_main_parent() {
        let mut state = state_with_cycle();
        let (_, subs) = main_with_subs(&mut state, 1);

        let missing = state.add_sub_goal(&GoalId::from("ghost"), "x", "", ts(2024, 1, 1));
        assert!(matches!(missing, Err(ValidationError::MissingReference { .. })));

        let under_sub = state.add_sub_goal(&subs[0], "x", "", ts(2024, 1, 1));
        assert!(matches!(under_sub, Err(ValidationError::MissingReference { .. })));
    }

    #[test]
    fn duplicate_priorities_coexist_in_creation_order() {
        let mut state = state_with_cycle();
        let first = state.add_main_goal("A", "", 2, ts(2024, 1, 1)).unwrap();
        let second = state.add_main_goal("B", "", 2, ts(2024, 1, 1)).unwrap();
        let top = state.add_main_goal("C", "", 1, ts(2024, 1, 1)).unwrap();
        state.add_main_goal("D", "", 2, ts(2024, 1, 1)).unwrap();
        state.add_main_goal("E", "", 9, ts(2024, 1, 1)).unwrap();

        let ids: Vec<&GoalId> = state.top_priorities().iter().map(|g| &g.id).collect();
        assert_eq!(ids, vec![&top, &first, &second]);
    }

    #[test]
    fn top_priorities_only_cover_current_cycle() {
        let mut state = state_with_cycle();
        state.add_main_goal("Old", "", 1, ts(2024, 1, 1)).unwrap();
        state.add_cycle("Q2", ts(2024, 4, 1), ts(2024, 4, 1)).unwrap();

        assert!(state.top_priorities().is_empty());
    }

    #[test]
    fn remove_goal_leaves_sub_goals_dangling() {
        let mut state = state_with_cycle();
        let (main, subs) = main_with_subs(&mut state, 2);

        state.remove_goal(&main).unwrap();

        assert!(state.main_goal(&main).is_none());
        assert_eq!(state.sub_goals_of(&main).count(), 2);
        assert!(state.goal(&subs[0]).is_some());
    }

    #[test]
    fn remove_unknown_goal_is_error() {
        let mut state = state_with_cycle();
        assert!(state.remove_goal(&GoalId::from("ghost")).is_err());
    }

    // ───────────────────────────────────────────────────────────────
    // Toggling and rewards
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn toggle_awards_twenty_and_records_history() {
        let mut state = state_with_cycle();
        let (_, subs) = main_with_subs(&mut state, 3);
        let today = day(2024, 1, 3);

        let toggle = state.toggle_sub_goal(&subs[0], today).unwrap();

        assert!(toggle.completed);
        assert!(!toggle.parent_completed);
        assert_eq!(toggle.xp_delta(), 20);
        assert_eq!(state.user.xp, 20);
        assert_eq!(state.completion_history.count_on(today), 1);
    }

    #[test]
    fn completing_last_of_three_siblings_awards_one_twenty() {
        let mut state = state_with_cycle();
        let (_, subs) = main_with_subs(&mut state, 3);
        let today = day(2024, 1, 3);

        state.toggle_sub_goal(&subs[0], today).unwrap();
        state.toggle_sub_goal(&subs[1], today).unwrap();
        let xp_before = state.user.total_xp;
        let toggle = state.toggle_sub_goal(&subs[2], today).unwrap();

        assert!(toggle.parent_completed);
        assert_eq!(toggle.xp_delta(), 120);
        assert_eq!(state.user.total_xp - xp_before, 120);
        // 160 total: level 1 threshold is 100, leaving 60 at level 2
        assert_eq!(state.user.level, 2);
        assert_eq!(state.user.xp, 60);
        assert_eq!(toggle.levels_gained(), 1);
    }

    #[test]
    fn bonus_is_awarded_again_only_after_reopen_and_recomplete() {
        let mut state = state_with_cycle();
        let (_, subs) = main_with_subs(&mut state, 2);
        let today = day(2024, 1, 3);

        state.toggle_sub_goal(&subs[0], today).unwrap();
        assert!(state.toggle_sub_goal(&subs[1], today).unwrap().parent_completed);

        let reopen = state.toggle_sub_goal(&subs[1], today).unwrap();
        assert!(!reopen.parent_completed);
        assert_eq!(reopen.xp_delta(), -20);

        let again = state.toggle_sub_goal(&subs[1], today).unwrap();
        assert!(again.parent_completed);
        assert_eq!(again.xp_delta(), 120);
    }

    #[test]
    fn reopening_clears_date_and_recounts_history() {
        let mut state = state_with_cycle();
        let (_, subs) = main_with_subs(&mut state, 2);
        let today = day(2024, 1, 3);

        state.toggle_sub_goal(&subs[0], today).unwrap();
        state.toggle_sub_goal(&subs[0], today).unwrap();

        let sub = state.goal(&subs[0]).and_then(Goal::as_sub).unwrap();
        assert_eq!(sub.completed_date, None);
        assert_eq!(state.completion_history.count_on(today), 0);
        assert_eq!(state.user.xp, 0);
    }

    #[test]
    fn toggle_on_main_goal_is_rejected() {
        let mut state = state_with_cycle();
        let (main, _) = main_with_subs(&mut state, 1);
        let result = state.toggle_sub_goal(&main, day(2024, 1, 3));
        assert!(matches!(result, Err(ValidationError::MissingReference { .. })));
    }

    #[test]
    fn orphaned_sub_goal_still_earns_bonus() {
        let mut state = state_with_cycle();
        let (main, subs) = main_with_subs(&mut state, 1);
        state.remove_goal(&main).unwrap();

        let toggle = state.toggle_sub_goal(&subs[0], day(2024, 1, 3)).unwrap();
        assert!(toggle.parent_completed);
        assert_eq!(toggle.xp_delta(), 120);
    }

    // ───────────────────────────────────────────────────────────────
    // Legacy tasks
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn task_lifecycle() {
        let mut state = state_with_cycle();
        let (main, _) = main_with_subs(&mut state, 0);

        let task = state.add_task(&main, "Call coach", 2, ts(2024, 1, 1)).unwrap();
        assert!(state.toggle_task(&task).unwrap());
        assert_eq!(state.tasks_for_goal(&main).count(), 1);

        let removed = state.remove_task(&task).unwrap();
        assert_eq!(removed.title, "Call coach");
        assert!(state.tasks.is_empty());
        assert!(state.remove_task(&task).is_err());
        assert_eq!(state.user, UserProgress::default());
    }

    #[test]
    fn add_task_requires_existing_goal() {
        let mut state = state_with_cycle();
        let result = state.add_task(&GoalId::from("ghost"), "x", 1, ts(2024, 1, 1));
        assert!(matches!(result, Err(ValidationError::MissingReference { .. })));
    }
}
