//! Level label and color lookup
//!
//! Keys are normalized to uppercase, so `warn`, `Warn` and `WARN` address the
//! same descriptor. Unknown levels get a synthesized descriptor.

use crate::lenient;
use serde_json::Value;
use std::collections::BTreeMap;

/// Display metadata for a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDescriptor {
    /// Canonical uppercase level name
    pub key: String,
    pub label: String,
    /// Style token as configured (e.g. `#ff5555` or `red`)
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LevelStyle {
    label: Option<String>,
    color: Option<String>,
}

/// Operator-configurable level table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelRegistry {
    levels: BTreeMap<String, LevelStyle>,
}

impl LevelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a descriptor. Last write wins.
    pub fn insert(&mut self, key: &str, label: Option<String>, color: Option<String>) {
        self.levels.insert(
            key.to_uppercase(),
            LevelStyle {
                label: label.filter(|l| !l.is_empty()),
                color: color.filter(|c| !c.is_empty()),
            },
        );
    }

    /// Build a registry from a `levels` mapping sent by the host.
    ///
    /// Returns `None` when the value is not a mapping, so the caller keeps
    /// its current table.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let mut registry = Self::new();
        for (key, style) in map {
            let (label, color) = match style {
                Value::Object(fields) => (
                    fields.get("label").cloned().and_then(lenient::scalar_to_string),
                    fields.get("color").cloned().and_then(lenient::scalar_to_string),
                ),
                _ => (None, None),
            };
            registry.insert(key, label, color);
        }
        Some(registry)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Resolve a level name into its descriptor
    pub fn lookup(&self, level: &str) -> LevelDescriptor {
        let key = if level.is_empty() {
            crate::entry::DEFAULT_LEVEL.to_string()
        } else {
            level.to_uppercase()
        };
        let style = self.levels.get(&key);
        LevelDescriptor {
            label: style
                .and_then(|s| s.label.clone())
                .unwrap_or_else(|| key.to_lowercase()),
            color: style.and_then(|s| s.color.clone()),
            key,
        }
    }
}
