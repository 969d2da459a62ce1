//! Main goals - the weekly priorities of a cycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    null_as_default, require_non_empty, CycleId, GoalId, Timestamp, ValidationError,
};

/// Highest weekly priority rank shown among the week's top goals.
pub const HIGHEST_PRIORITY: i32 = 1;

/// Lowest weekly priority rank shown among the week's top goals.
pub const LOWEST_PRIORITY: i32 = 3;

/// A top-level objective belonging to a cycle.
///
/// `weekly_priority` is stored as given. Ranks outside `1..=3` are kept but
/// never selected as a weekly priority, and duplicate ranks may coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainGoal {
    pub id: GoalId,
    pub cycle_id: CycleId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weekly_priority: i32,
    pub created_at: Timestamp,
}

impl MainGoal {
    pub fn new(
        cycle_id: CycleId,
        title: &str,
        description: &str,
        weekly_priority: i32,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: GoalId::new(),
            cycle_id,
            title: require_non_empty("title", title)?,
            description: description.trim().to_string(),
            weekly_priority,
            created_at,
        })
    }

    /// Returns true when the rank makes this goal eligible as a weekly priority.
    pub fn has_weekly_rank(&self) -> bool {
        (HIGHEST_PRIORITY..=LOWEST_PRIORITY).contains(&self.weekly_priority)
    }
}
