//! Progress aggregation - pure read-side computations over the application state.

mod aggregator;
mod summary;
mod trend;

pub use aggregator::{goal_progress, overall_progress, weekly_progress};
pub use summary::ProgressSummary;
pub use trend::{statistics, week_completion_data, xp_progress, DayCount, Statistics, XpProgress};
