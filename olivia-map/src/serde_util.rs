//! Deserialization helpers for host JSON.
//!
//! Host documents are loosely typed: any level may be missing, `null` or of
//! another shape than expected while a calculation is in flight. These
//! helpers read such values without failing the surrounding document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// `null` reads as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A sequence read entry by entry.
///
/// Anything other than an array is empty. An entry that cannot be read
/// becomes `T::default()`, so positions stay aligned.
pub(crate) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().map(value_or_default).collect(),
        _ => Vec::new(),
    })
}

/// Reads `value` as `T`, falling back to `T::default()`.
pub(crate) fn value_or_default<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return T::default();
    }
    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(error = %e, "Unreadable entry, using default");
            T::default()
        }
    }
}

/// A scalar read as text. Numbers and booleans are stringified; anything
/// else is `None`.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_text))
}

/// Like [`lenient_text`], with `None` read as an empty string.
pub(crate) fn text_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// A sequence of scalars read as text, one slot per entry.
pub(crate) fn lenient_text_seq<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whether `value` counts as set in the host's scripting sense: `null`,
/// `false`, zero and the empty string do not.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
