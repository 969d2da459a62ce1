//! Goal module - main goals, sub goals, and legacy flat tasks.

mod main_goal;
mod sub_goal;
mod task;
mod variant;

pub use main_goal::{MainGoal, HIGHEST_PRIORITY, LOWEST_PRIORITY};
pub use sub_goal::SubGoal;
pub use task::Task;
pub use variant::Goal;
