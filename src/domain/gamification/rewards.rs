//! Fixed XP rewards tied to sub goal completion.

use std::fmt;

/// XP for completing a sub goal; the same amount is taken back on un-completing.
pub const SUB_GOAL_XP: i64 = 20;

/// Bonus XP when a completion leaves every sibling sub goal completed.
pub const MAIN_GOAL_BONUS_XP: i64 = 100;

/// Why XP changed hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reward {
    SubGoalCompleted { title: String },
    SubGoalReopened { title: String },
    MainGoalCompleted { title: String },
}

impl Reward {
    pub fn amount(&self) -> i64 {
        match self {
            Reward::SubGoalCompleted { .. } => SUB_GOAL_XP,
            Reward::SubGoalReopened { .. } => -SUB_GOAL_XP,
            Reward::MainGoalCompleted { .. } => MAIN_GOAL_BONUS_XP,
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reward::SubGoalCompleted { title } => write!(f, "Sub goal completed: {}", title),
            Reward::SubGoalReopened { title } => write!(f, "Sub goal reopened: {}", title),
            Reward::MainGoalCompleted { title } => write!(f, "Main goal completed: {}", title),
        }
    }
}

/// Rewards earned by toggling one sub goal.
///
/// `parent_title` is `Some` only when the toggle completed the sub goal and
/// every sibling under the same parent is now complete.
pub fn rewards_for_toggle(
    sub_goal_title: &str,
    now_completed: bool,
    parent_title: Option<&str>,
) -> Vec<Reward> {
    if !now_completed {
        return vec![Reward::SubGoalReopened {
            title: sub_goal_title.to_string(),
        }];
    }

    let mut rewards = vec![Reward::SubGoalCompleted {
        title: sub_goal_title.to_string(),
    }];
    if let Some(parent) = parent_title {
        rewards.push(Reward::MainGoalCompleted {
            title: parent.to_string(),
        });
    }
    rewards
}
