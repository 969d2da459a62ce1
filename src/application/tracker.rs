//! Tracker - owns the application state and coordinates storage.
//!
//! Every mutation validates, applies the change in memory, refreshes the
//! derived fields, and then saves the whole document. A failed save keeps
//! the change in memory; the next successful save persists it.

use std::sync::Arc;

use crate::domain::foundation::{CycleId, GoalId, TaskId, Timestamp};
use crate::domain::goal::Goal;
use crate::domain::state::{document, ApplicationState, SubGoalToggle, View};
use crate::ports::{Clock, StateStorage, StateStorageError};

use super::{TrackerError, TrackerEvent};

/// How the tracker's initial state was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupStatus {
    /// Nothing was saved yet.
    Fresh,
    /// The saved document was loaded.
    Restored,
    /// The saved document could not be used; started from defaults.
    Recovered { reason: String },
}

pub struct Tracker {
    state: ApplicationState,
    storage: Arc<dyn StateStorage>,
    clock: Arc<dyn Clock>,
    events: Vec<TrackerEvent>,
    startup: StartupStatus,
}

impl Tracker {
    /// Loads the saved document, falling back to a default state.
    ///
    /// Never fails: unreadable or corrupt documents are logged and replaced
    /// by a fresh state on the next save.
    pub async fn open(storage: Arc<dyn StateStorage>, clock: Arc<dyn Clock>) -> Self {
        let (mut state, startup) = match storage.load().await {
            Ok(None) => (ApplicationState::default(), StartupStatus::Fresh),
            Ok(Some(raw)) => match document::decode(&raw) {
                Ok(state) => {
                    tracing::debug!(
                        cycles = state.cycles.len(),
                        goals = state.goals.len(),
                        "Restored saved state"
                    );
                    (state, StartupStatus::Restored)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Saved state is corrupt, starting fresh");
                    recovered(e.to_string())
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved state, starting fresh");
                recovered(e.to_string())
            }
        };
        state.refresh_current_week(clock.now());

        Self {
            state,
            storage,
            clock,
            events: Vec::new(),
            startup,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn startup_status(&self) -> &StartupStatus {
        &self.startup
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Drains the events raised since the last call.
    pub fn take_events(&mut self) -> Vec<TrackerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Re-derives the current week from the clock without saving.
    pub fn refresh(&mut self) {
        self.state.refresh_current_week(self.clock.now());
    }

    // ───────────────────────────────────────────────────────────────
    // Cycles
    // ───────────────────────────────────────────────────────────────

    /// Creates a cycle starting on `start` and makes it current.
    ///
    /// `start` is `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
    pub async fn create_cycle(&mut self, title: &str, start: &str) -> Result<CycleId, TrackerError> {
        let start = Timestamp::parse_input("start date", start)?;
        let now = self.clock.now();
        let cycle_id = self.state.add_cycle(title, start, now)?;

        tracing::info!(cycle_id = %cycle_id, start = %start.calendar_day(), "Cycle created");
        self.record(TrackerEvent::CycleCreated {
            cycle_id: cycle_id.clone(),
            title: title.trim().to_string(),
        });
        self.commit().await?;
        Ok(cycle_id)
    }

    /// Switches the current cycle. Unknown ids are accepted as-is.
    pub async fn select_cycle(&mut self, cycle_id: CycleId) -> Result<(), TrackerError> {
        if self.state.cycle(&cycle_id).is_none() {
            tracing::warn!(cycle_id = %cycle_id, "Selected cycle does not exist");
        }
        tracing::info!(cycle_id = %cycle_id, "Cycle selected");
        self.state.select_cycle(cycle_id, self.clock.now());
        self.commit().await
    }

    // ───────────────────────────────────────────────────────────────
    // Goals
    // ───────────────────────────────────────────────────────────────

    pub async fn create_main_goal(
        &mut self,
        title: &str,
        description: &str,
        priority: i32,
    ) -> Result<GoalId, TrackerError> {
        let goal_id = self
            .state
            .add_main_goal(title, description, priority, self.clock.now())?;

        tracing::info!(goal_id = %goal_id, priority, "Main goal created");
        self.goal_created(&goal_id);
        self.commit().await?;
        Ok(goal_id)
    }

    pub async fn create_sub_goal(
        &mut self,
        parent_id: &GoalId,
        title: &str,
        description: &str,
    ) -> Result<GoalId, TrackerError> {
        let goal_id = self
            .state
            .add_sub_goal(parent_id, title, description, self.clock.now())?;

        tracing::info!(goal_id = %goal_id, parent_id = %parent_id, "Sub goal created");
        self.goal_created(&goal_id);
        self.commit().await?;
        Ok(goal_id)
    }

    /// Flips a sub goal's completion and applies the XP rules.
    pub async fn toggle_sub_goal(&mut self, goal_id: &GoalId) -> Result<SubGoalToggle, TrackerError> {
        let today = self.clock.now().calendar_day();
        let toggle = self.state.toggle_sub_goal(goal_id, today)?;

        tracing::info!(
            goal_id = %goal_id,
            completed = toggle.completed,
            xp_delta = toggle.xp_delta(),
            "Sub goal toggled"
        );
        self.record(TrackerEvent::SubGoalToggled {
            goal_id: goal_id.clone(),
            completed: toggle.completed,
        });
        for award in &toggle.awards {
            self.record(TrackerEvent::XpAwarded {
                amount: award.amount,
                reason: award.reason.clone(),
            });
            if award.leveled_up() {
                tracing::info!(level = award.level, gained = award.levels_gained, "Level up");
                self.record(TrackerEvent::LeveledUp {
                    new_level: award.level,
                    levels_gained: award.levels_gained,
                });
            }
        }
        self.commit().await?;
        Ok(toggle)
    }

    /// Removes a goal. Its children are kept.
    pub async fn delete_goal(&mut self, goal_id: &GoalId) -> Result<Goal, TrackerError> {
        let removed = self.state.remove_goal(goal_id)?;

        tracing::info!(goal_id = %goal_id, "Goal deleted");
        self.record(TrackerEvent::GoalDeleted {
            goal_id: goal_id.clone(),
        });
        self.commit().await?;
        Ok(removed)
    }

    // ───────────────────────────────────────────────────────────────
    // Legacy tasks
    // ───────────────────────────────────────────────────────────────

    pub async fn create_task(
        &mut self,
        goal_id: &GoalId,
        title: &str,
        week: u8,
    ) -> Result<TaskId, TrackerError> {
        let task_id = self
            .state
            .add_task(goal_id, title, week, self.clock.now())?;

        tracing::info!(task_id = %task_id, goal_id = %goal_id, week, "Task created");
        self.commit().await?;
        Ok(task_id)
    }

    pub async fn toggle_task(&mut self, task_id: &TaskId) -> Result<bool, TrackerError> {
        let completed = self.state.toggle_task(task_id)?;

        tracing::info!(task_id = %task_id, completed, "Task toggled");
        self.commit().await?;
        Ok(completed)
    }

    pub async fn delete_task(&mut self, task_id: &TaskId) -> Result<(), TrackerError> {
        self.state.remove_task(task_id)?;

        tracing::info!(task_id = %task_id, "Task deleted");
        self.record(TrackerEvent::TaskDeleted {
            task_id: task_id.clone(),
        });
        self.commit().await
    }

    // ───────────────────────────────────────────────────────────────
    // Presentation
    // ───────────────────────────────────────────────────────────────

    pub async fn switch_view(&mut self, view: View) -> Result<(), TrackerError> {
        tracing::debug!(view = %view, "View switched");
        self.state.set_view(view);
        self.commit().await
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn record(&mut self, event: TrackerEvent) {
        self.events.push(event);
    }

    fn goal_created(&mut self, goal_id: &GoalId) {
        let title = self
            .state
            .goal(goal_id)
            .map(|goal| goal.title().to_string())
            .unwrap_or_default();
        self.record(TrackerEvent::GoalCreated {
            goal_id: goal_id.clone(),
            title,
        });
    }

    /// Refreshes derived fields and saves the whole document.
    async fn commit(&mut self) -> Result<(), TrackerError> {
        self.state.refresh_current_week(self.clock.now());

        let raw = document::encode(&self.state)
            .map_err(|e| StateStorageError::SerializationFailed(e.to_string()))?;
        if let Err(e) = self.storage.save(&raw).await {
            tracing::error!(error = %e, "Failed to save state");
            return Err(e.into());
        }
        Ok(())
    }
}

fn recovered(reason: String) -> (ApplicationState, StartupStatus) {
    (ApplicationState::default(), StartupStatus::Recovered { reason })
}
