//! Legacy flat tasks, linked to a goal by id and pinned to a week number.

use serde::{Deserialize, Serialize};

use crate::domain::cycle::WEEKS_PER_CYCLE;
use crate::domain::foundation::{
    null_as_default, require_non_empty, GoalId, TaskId, Timestamp, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub goal_id: GoalId,
    pub title: String,
    pub week: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    pub created_at: Timestamp,
}

impl Task {
    pub fn new(
        goal_id: GoalId,
        title: &str,
        week: u8,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = require_non_empty("title", title)?;
        if !(1..=WEEKS_PER_CYCLE).contains(&week) {
            return Err(ValidationError::out_of_range(
                "week",
                1,
                i64::from(WEEKS_PER_CYCLE),
                i64::from(week),
            ));
        }
        Ok(Self {
            id: TaskId::new(),
            goal_id,
            title,
            week,
            completed: false,
            created_at,
        })
    }

    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
