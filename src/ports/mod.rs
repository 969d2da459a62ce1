//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StateStorage` - Load and save the saved document
//! - `Clock` - Current time for week and countdown calculations

mod clock;
mod state_storage;

pub use clock::Clock;
pub use state_storage::{StateStorage, StateStorageError};
