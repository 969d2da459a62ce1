//! Sub goals - completable action items under a main goal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    null_as_default, require_non_empty, GoalId, Timestamp, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGoal {
    pub id: GoalId,
    pub parent_goal_id: GoalId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

impl SubGoal {
    pub fn new(
        parent_goal_id: GoalId,
        title: &str,
        description: &str,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: GoalId::new(),
            parent_goal_id,
            title: require_non_empty("title", title)?,
            description: description.trim().to_string(),
            completed: false,
            completed_date: None,
            created_at,
        })
    }

    /// Flips completion, stamping or clearing the completion day.
    ///
    /// Returns the new completion state.
    pub fn toggle(&mut self, today: NaiveDate) -> bool {
        self.completed = !self.completed;
        self.completed_date = self.completed.then_some(today);
        self.completed
    }

    /// Returns true when this sub goal was completed on `day`.
    pub fn completed_on(&self, day: NaiveDate) -> bool {
        self.completed && self.completed_date == Some(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    fn sub_goal() -> SubGoal {
        SubGoal::new(GoalId::from("main"), "Buy shoes", "", Timestamp::now()).unwrap()
    }

    #[test]
    fn toggle_sets_and_clears_completion_date() {
        let mut goal = sub_goal();

        assert!(goal.toggle(today()));
        assert_eq!(goal.completed_date, Some(today()));
        assert!(goal.completed_on(today()));

        assert!(!goal.toggle(today()));
        assert_eq!(goal.completed_date, None);
        assert!(!goal.completed_on(today()));
    }

    #[test]
    fn new_sub_goal_rejects_empty_title() {
        let result = SubGoal::new(GoalId::from("main"), " ", "", Timestamp::now());
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn completion_date_serializes_as_calendar_day() {
        let mut goal = sub_goal();
        goal.toggle(today());
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["completedDate"], "2024-02-10");
    }

    #[test]
    fn null_completion_date_deserializes_as_none() {
        let json = r#"{
            "id": "2",
            "parentGoalId": "1",
            "title": "Stretch",
            "completed": false,
            "completedDate": null,
            "createdAt": "2024-01-02T09:00:00.000Z"
        }"#;
        let goal: SubGoal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.completed_date, None);
        assert_eq!(goal.description, "");
    }
}
