//! Domain state store - the complete application state and its document format.

mod app_state;
pub mod document;
mod history;
mod view;

pub use app_state::{ApplicationState, SubGoalToggle, WEEKLY_PRIORITY_SLOTS};
pub use document::{DocumentError, STORAGE_KEY};
pub use history::CompletionHistory;
pub use view::View;
