//! TrackerError - failures surfaced by tracker mutations.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::StateStorageError;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Preconditions failed; nothing changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The change is applied in memory but could not be saved.
    #[error("change applied but not saved: {0}")]
    Persistence(#[from] StateStorageError),
}

impl TrackerError {
    /// Whether the in-memory mutation happened despite the error.
    pub fn is_applied(&self) -> bool {
        matches!(self, TrackerError::Persistence(_))
    }
}
