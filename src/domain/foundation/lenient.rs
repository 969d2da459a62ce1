//! Serde helpers for fields that older documents may hold as `null`.

use serde::{Deserialize, Deserializer};

/// Reads `null` the same as a missing field.
///
/// Pair with `#[serde(default)]` so an absent key also falls back.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
