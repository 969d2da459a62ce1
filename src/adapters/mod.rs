//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Document storage (file, in-memory)
//! - `clock` - Wall clock and fixed clock

pub mod clock;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use storage::{FileStateStorage, InMemoryStateStorage};
