//! Clock Port - Source of the current time.
//!
//! Week numbers, completion days, and countdowns all depend on "now", so
//! the tracker reads it through this port instead of the system clock.

use chrono::{DateTime, Local};

use crate::domain::foundation::Timestamp;

pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Timestamp;

    /// The current instant in the user's local time zone.
    fn local_now(&self) -> DateTime<Local> {
        self.now().as_datetime().with_timezone(&Local)
    }
}
