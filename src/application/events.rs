//! Tracker events - notifications raised by mutations.
//!
//! The tracker buffers these; callers drain them with `Tracker::take_events`
//! to show feedback such as XP toasts or level-up banners.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CycleId, GoalId, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerEvent {
    /// A cycle was created and selected.
    CycleCreated { cycle_id: CycleId, title: String },

    /// A main or sub goal was created.
    GoalCreated { goal_id: GoalId, title: String },

    /// A sub goal changed completion state.
    SubGoalToggled { goal_id: GoalId, completed: bool },

    /// XP changed; `amount` is negative for deductions.
    XpAwarded { amount: i64, reason: String },

    /// One award crossed one or more level thresholds.
    LeveledUp { new_level: u32, levels_gained: u32 },

    TaskDeleted { task_id: TaskId },

    GoalDeleted { goal_id: GoalId },
}

impl TrackerEvent {
    /// Dotted event name, e.g. `goal.created`.
    pub fn event_type(&self) -> &'static str {
        match self {
            TrackerEvent::CycleCreated { .. } => "cycle.created",
            TrackerEvent::GoalCreated { .. } => "goal.created",
            TrackerEvent::SubGoalToggled { .. } => "sub_goal.toggled",
            TrackerEvent::XpAwarded { .. } => "xp.awarded",
            TrackerEvent::LeveledUp { .. } => "user.leveled_up",
            TrackerEvent::TaskDeleted { .. } => "task.deleted",
            TrackerEvent::GoalDeleted { .. } => "goal.deleted",
        }
    }
}
