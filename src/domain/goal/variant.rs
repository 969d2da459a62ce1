//! The goal discriminated union.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::GoalId;

use super::{MainGoal, SubGoal};

/// A goal is either a main goal of a cycle or a sub goal under a main goal.
///
/// Serialized with a `type` tag of `main` or `sub`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Goal {
    Main(MainGoal),
    Sub(SubGoal),
}

impl Goal {
    pub fn id(&self) -> &GoalId {
        match self {
            Goal::Main(goal) => &goal.id,
            Goal::Sub(goal) => &goal.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Goal::Main(goal) => &goal.title,
            Goal::Sub(goal) => &goal.title,
        }
    }

    pub fn as_main(&self) -> Option<&MainGoal> {
        match self {
            Goal::Main(goal) => Some(goal),
            Goal::Sub(_) => None,
        }
    }

    pub fn as_sub(&self) -> Option<&SubGoal> {
        match self {
            Goal::Sub(goal) => Some(goal),
            Goal::Main(_) => None,
        }
    }

    pub fn as_sub_mut(&mut self) -> Option<&mut SubGoal> {
        match self {
            Goal::Sub(goal) => Some(goal),
            Goal::Main(_) => None,
        }
    }
}

impl From<MainGoal> for Goal {
    fn from(goal: MainGoal) -> Self {
        Goal::Main(goal)
    }
}

impl From<SubGoal> for Goal {
    fn from(goal: SubGoal) -> Self {
        Goal::Sub(goal)
    }
}
