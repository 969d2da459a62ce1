//! JSON document format for the persisted state.
//!
//! A saved document is merged key by key over the default state, so
//! documents written by older versions (missing keys, goals without a
//! `type` tag) still load.

use serde::de::Error as _;
use serde_json::{Map, Value};
use thiserror::Error;

use super::ApplicationState;

/// Key the document is stored under in key-value backends.
pub const STORAGE_KEY: &str = "12weekYear";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("document root must be a JSON object")]
    NotAnObject,

    #[error("document does not match the state layout: {0}")]
    Incompatible(#[source] serde_json::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serializes the full state as pretty-printed JSON.
pub fn encode(state: &ApplicationState) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(state).map_err(DocumentError::Encode)
}

/// Parses a saved document and merges it over the default state.
///
/// Top-level keys present in the document replace the defaults wholesale;
/// `null` values and unknown keys are ignored. Goals without a `type` tag
/// are read as main goals, and cycles saved without weeks get them rebuilt.
pub fn decode(raw: &str) -> Result<ApplicationState, DocumentError> {
    let saved: Value = serde_json::from_str(raw).map_err(DocumentError::Malformed)?;
    let Value::Object(saved) = saved else {
        return Err(DocumentError::NotAnObject);
    };

    let mut merged = default_document()?;
    for (key, value) in saved {
        if value.is_null() || !merged.contains_key(&key) {
            continue;
        }
        merged.insert(key, value);
    }

    if let Some(Value::Array(goals)) = merged.get_mut("goals") {
        tag_legacy_goals(goals);
    }

    let mut state: ApplicationState =
        serde_json::from_value(Value::Object(merged)).map_err(DocumentError::Incompatible)?;
    for cycle in &mut state.cycles {
        cycle
            .ensure_weeks()
            .map_err(|e| DocumentError::Incompatible(serde_json::Error::custom(e)))?;
    }
    Ok(state)
}

fn default_document() -> Result<Map<String, Value>, DocumentError> {
    match serde_json::to_value(ApplicationState::default()).map_err(DocumentError::Encode)? {
        Value::Object(map) => Ok(map),
        _ => Err(DocumentError::NotAnObject),
    }
}

fn tag_legacy_goals(goals: &mut [Value]) {
    for goal in goals.iter_mut().filter_map(Value::as_object_mut) {
        goal.entry("type")
            .or_insert_with(|| Value::String("main".to_string()));
    }
}
