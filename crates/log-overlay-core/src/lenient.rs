//! Forgiving field decoders for host messages
//!
//! The host is not trusted to send well-typed payloads. A bad field must fall
//! back to its default instead of failing the whole message.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Truthy scalar as text. Empty strings, `0`, `false`, `null`, objects and
/// arrays count as missing.
pub(crate) fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

/// Non-negative integer; fractions are truncated, anything else is missing.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as usize))
}

/// Strictly positive number, rounded up. Used for the buffer limit, where
/// `2.5` behaves like `3` (the buffer only shrinks while it is larger).
pub(crate) fn positive<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| n.ceil() as usize))
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    })
}
