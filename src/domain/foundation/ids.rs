//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings. New ones are random UUIDs, but any
//! non-empty string read back from a saved document is accepted, so older
//! documents keyed by millisecond timestamps still load.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a 12-week cycle.
    CycleId
);

string_id!(
    /// Unique identifier for a main or sub goal.
    GoalId
);

string_id!(
    /// Unique identifier for a legacy flat task.
    TaskId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_id_generates_unique_values() {
        let id1 = CycleId::new();
        let id2 = CycleId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn goal_id_generates_uuid_strings() {
        let id = GoalId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn task_id_accepts_legacy_timestamp_ids() {
        let id = TaskId::from("1704067200000");
        assert_eq!(id.as_str(), "1704067200000");
    }

    #[test]
    fn goal_id_serializes_as_plain_string() {
        let id = GoalId::from("1704067200000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1704067200000\"");
    }

    #[test]
    fn cycle_id_deserializes_from_plain_string() {
        let id: CycleId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.to_string(), "abc");
    }
}
