//! Intents - typed user actions routed into the tracker.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CycleId, GoalId, TaskId};
use crate::domain::goal::Goal;
use crate::domain::state::{SubGoalToggle, View};

use super::{Tracker, TrackerError};

/// A user action, as produced by a form or a click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    CreateCycle {
        title: String,
        start_date: String,
    },
    SelectCycle {
        cycle_id: CycleId,
    },
    CreateMainGoal {
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        priority: i32,
    },
    CreateSubGoal {
        parent_id: GoalId,
        title: String,
        #[serde(default)]
        description: String,
    },
    ToggleSubGoal {
        goal_id: GoalId,
    },
    CreateTask {
        goal_id: GoalId,
        title: String,
        week: u8,
    },
    ToggleTask {
        task_id: TaskId,
    },
    DeleteTask {
        task_id: TaskId,
    },
    DeleteGoal {
        goal_id: GoalId,
    },
    SwitchView {
        view: View,
    },
}

/// What a successfully dispatched intent produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    CycleCreated(CycleId),
    CycleSelected,
    GoalCreated(GoalId),
    SubGoalToggled(SubGoalToggle),
    TaskCreated(TaskId),
    TaskToggled { completed: bool },
    TaskDeleted,
    GoalDeleted(Goal),
    ViewSwitched,
}

impl Tracker {
    /// Routes an intent to its mutation.
    pub async fn dispatch(&mut self, intent: Intent) -> Result<IntentOutcome, TrackerError> {
        match intent {
            Intent::CreateCycle { title, start_date } => self
                .create_cycle(&title, &start_date)
                .await
                .map(IntentOutcome::CycleCreated),
            Intent::SelectCycle { cycle_id } => self
                .select_cycle(cycle_id)
                .await
                .map(|()| IntentOutcome::CycleSelected),
            Intent::CreateMainGoal {
                title,
                description,
                priority,
            } => self
                .create_main_goal(&title, &description, priority)
                .await
                .map(IntentOutcome::GoalCreated),
            Intent::CreateSubGoal {
                parent_id,
                title,
                description,
            } => self
                .create_sub_goal(&parent_id, &title, &description)
                .await
                .map(IntentOutcome::GoalCreated),
            Intent::ToggleSubGoal { goal_id } => self
                .toggle_sub_goal(&goal_id)
                .await
                .map(IntentOutcome::SubGoalToggled),
            Intent::CreateTask {
                goal_id,
                title,
                week,
            } => self
                .create_task(&goal_id, &title, week)
                .await
                .map(IntentOutcome::TaskCreated),
            Intent::ToggleTask { task_id } => self
                .toggle_task(&task_id)
                .await
                .map(|completed| IntentOutcome::TaskToggled { completed }),
            Intent::DeleteTask { task_id } => self
                .delete_task(&task_id)
                .await
                .map(|()| IntentOutcome::TaskDeleted),
            Intent::DeleteGoal { goal_id } => self
                .delete_goal(&goal_id)
                .await
                .map(IntentOutcome::GoalDeleted),
            Intent::SwitchView { view } => self
                .switch_view(view)
                .await
                .map(|()| IntentOutcome::ViewSwitched),
        }
    }
}
