//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the tracker domain.

mod errors;
mod ids;
mod lenient;
mod percentage;
mod timestamp;

pub use errors::{require_non_empty, ValidationError};
pub use ids::{CycleId, GoalId, TaskId};
pub use lenient::null_as_default;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
