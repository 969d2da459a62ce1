//! Application layer - the tracker, its intents, events, and view models.
//!
//! This layer owns the state, coordinates the storage and clock ports, and
//! exposes typed entry points for the presentation layer.

mod error;
mod events;
mod intents;
mod tracker;
pub mod views;

pub use error::TrackerError;
pub use events::TrackerEvent;
pub use intents::{Intent, IntentOutcome};
pub use tracker::{StartupStatus, Tracker};
pub use views::{
    format_date, CycleSummary, MainGoalSummary, PriorityCard, StatsView, SubGoalRow, WeeklyView,
};
