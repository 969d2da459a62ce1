//! Storage Adapters
//!
//! Implementations of the StateStorage port for persisting the tracker document.
//!
//! ## Available Adapters
//!
//! - **FileStateStorage** - Stores the document as `data.json` in a data directory
//! - **InMemoryStateStorage** - Key-value map keyed like browser local storage
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileStateStorage, InMemoryStateStorage};
//!
//! // Production: file-based storage
//! let storage = FileStateStorage::new("/home/me/.local/share/twelve-week-year");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryStateStorage::new();
//! ```

mod file_state_storage;
mod in_memory_state_storage;

pub use file_state_storage::{FileStateStorage, DEFAULT_FILE_NAME};
pub use in_memory_state_storage::InMemoryStateStorage;
