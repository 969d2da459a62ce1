//! Read-only view models for the presentation layer.
//!
//! Everything here is computed from the state on demand; nothing is cached
//! and nothing is written back.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::domain::cycle::{time_until_week_end, Countdown};
use crate::domain::foundation::{CycleId, GoalId, Percentage, Timestamp};
use crate::domain::progress::{
    goal_progress, overall_progress, statistics, week_completion_data, weekly_progress, xp_progress,
    DayCount, ProgressSummary, Statistics, XpProgress,
};
use crate::domain::state::ApplicationState;

use super::Tracker;

/// Formats a timestamp's calendar day as `DD Mon YYYY`.
pub fn format_date(at: Timestamp) -> String {
    at.calendar_day().format("%d %b %Y").to_string()
}

fn format_range(start: Timestamp, end: Timestamp) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityCard {
    pub goal_id: GoalId,
    pub title: String,
    pub priority: i32,
    pub progress: Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGoalRow {
    pub goal_id: GoalId,
    pub title: String,
    pub parent_title: String,
    pub completed: bool,
}

/// The weekly dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyView {
    pub cycle_title: String,
    pub week: u8,
    pub date_range: String,
    pub countdown: Option<Countdown>,
    pub priorities: Vec<PriorityCard>,
    pub sub_goals: Vec<SubGoalRow>,
    pub trend: Vec<DayCount>,
    pub progress: ProgressSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSummary {
    pub cycle_id: CycleId,
    pub title: String,
    pub date_range: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainGoalSummary {
    pub goal_id: GoalId,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub sub_goal_count: usize,
    pub completed_sub_goals: usize,
    pub progress: Percentage,
}

/// Headline numbers for the stats screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub statistics: Statistics,
    pub xp: XpProgress,
    pub overall: ProgressSummary,
}

/// Builds the weekly dashboard for the current week of the current cycle.
///
/// `now` decides the countdown's time zone. `None` without a current cycle.
pub fn weekly_view<Tz: TimeZone>(state: &ApplicationState, now: &DateTime<Tz>) -> Option<WeeklyView> {
    let cycle = state.current_cycle()?;
    let week = state.current_week;
    let date_range = cycle
        .week(week)
        .map(|descriptor| format_range(descriptor.start_date, descriptor.end_date))
        .unwrap_or_default();

    let priorities = state
        .top_priorities()
        .into_iter()
        .map(|goal| PriorityCard {
            goal_id: goal.id.clone(),
            title: goal.title.clone(),
            priority: goal.weekly_priority,
            progress: goal_progress(state, &goal.id),
        })
        .collect();

    let sub_goals = state
        .sub_goals_for_top_priorities()
        .into_iter()
        .map(|(parent, sub)| SubGoalRow {
            goal_id: sub.id.clone(),
            title: sub.title.clone(),
            parent_title: parent.title.clone(),
            completed: sub.completed,
        })
        .collect();

    Some(WeeklyView {
        cycle_title: cycle.title().to_string(),
        week,
        date_range,
        countdown: time_until_week_end(cycle, week, now),
        priorities,
        sub_goals,
        trend: week_completion_data(state, week),
        progress: weekly_progress(state, week),
    })
}

/// Every cycle, flagging the selected one.
pub fn cycle_summaries(state: &ApplicationState) -> Vec<CycleSummary> {
    state
        .cycles
        .iter()
        .map(|cycle| CycleSummary {
            cycle_id: cycle.id().clone(),
            title: cycle.title().to_string(),
            date_range: format_range(cycle.start_date(), cycle.end_date()),
            active: state.current_cycle_id.as_ref() == Some(cycle.id()),
        })
        .collect()
}

/// Main goals of the current cycle with their sub goal counts.
pub fn main_goal_summaries(state: &ApplicationState) -> Vec<MainGoalSummary> {
    let Some(cycle_id) = state.current_cycle_id.as_ref() else {
        return Vec::new();
    };
    state
        .main_goals_in(cycle_id)
        .map(|goal| {
            let (completed, total) = state
                .sub_goals_of(&goal.id)
                .fold((0, 0), |(done, all), sub| (done + usize::from(sub.completed), all + 1));
            MainGoalSummary {
                goal_id: goal.id.clone(),
                title: goal.title.clone(),
                description: goal.description.clone(),
                priority: goal.weekly_priority,
                sub_goal_count: total,
                completed_sub_goals: completed,
                progress: goal_progress(state, &goal.id),
            }
        })
        .collect()
}

pub fn stats_view(state: &ApplicationState) -> StatsView {
    StatsView {
        statistics: statistics(state),
        xp: xp_progress(state),
        overall: overall_progress(state),
    }
}

impl Tracker {
    /// Weekly dashboard with the countdown in the local time zone.
    pub fn weekly_view(&self) -> Option<WeeklyView> {
        weekly_view(self.state(), &self.clock().local_now())
    }

    pub fn cycle_summaries(&self) -> Vec<CycleSummary> {
        cycle_summaries(self.state())
    }

    pub fn main_goal_summaries(&self) -> Vec<MainGoalSummary> {
        main_goal_summaries(self.state())
    }

    pub fn stats_view(&self) -> StatsView {
        stats_view(self.state())
    }
}
