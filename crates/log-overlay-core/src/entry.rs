//! Log entries as pushed by the host
//!
//! Every field is optional on the wire. Accessors apply the display fallbacks
//! so callers never deal with missing values.

use crate::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

pub const DEFAULT_TIME: &str = "--:--:--";
pub const DEFAULT_LEVEL: &str = "INFO";

/// Opaque entry identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Returns `None` for an empty identifier
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode an id the host may send as string or number
    pub fn from_value(value: Value) -> Option<Self> {
        lenient::scalar_to_string(value).map(Self)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<EntryId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(EntryId::from_value(Value::deserialize(deserializer)?))
}

/// Where a log line originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Server,
    Client,
}

impl Source {
    /// Case-insensitive; anything that is not `client` is a server log
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("client") => Self::Client,
            _ => Self::Server,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Client => "client",
        }
    }
}

/// Player metadata attached to client-originated entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub rp_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub citizen_id: Option<String>,
}

fn lenient_client_info<'de, D>(deserializer: D) -> Result<Option<ClientInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// One row of the client detail block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    RpName,
    Id,
    License,
    CitizenId,
}

impl ClientField {
    pub const ALL: [ClientField; 5] = [
        ClientField::Name,
        ClientField::RpName,
        ClientField::Id,
        ClientField::License,
        ClientField::CitizenId,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Player",
            Self::RpName => "RP Name",
            Self::Id => "ID",
            Self::License => "License",
            Self::CitizenId => "Citizen ID",
        }
    }

    /// Display value, with `Unknown` for missing names
    pub fn value(self, info: &ClientInfo) -> String {
        let raw = match self {
            Self::Name => &info.name,
            Self::RpName => &info.rp_name,
            Self::Id => &info.id,
            Self::License => &info.license,
            Self::CitizenId => &info.citizen_id,
        };
        match (raw, self) {
            (Some(value), _) => value.clone(),
            (None, Self::Name | Self::RpName) => "Unknown".to_string(),
            (None, _) => String::new(),
        }
    }
}

/// A single log line. Immutable once received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<EntryId>,
    #[serde(default, deserialize_with = "lenient::string")]
    time: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    level: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    source: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    message: Option<String>,
    #[serde(default, deserialize_with = "lenient_client_info")]
    client_info: Option<ClientInfo>,
}

impl LogEntry {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(id),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source.as_str().to_string());
        self
    }

    pub fn with_client_info(mut self, info: ClientInfo) -> Self {
        self.client_info = Some(info);
        self
    }

    /// Decode an entry from an arbitrary JSON value. Non-objects and
    /// undecodable objects become an entry made of fallbacks.
    pub fn from_value(value: Value) -> Self {
        match value {
            value @ Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn time(&self) -> &str {
        self.time.as_deref().unwrap_or(DEFAULT_TIME)
    }

    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LEVEL)
    }

    pub fn source(&self) -> Source {
        Source::parse(self.source.as_deref())
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    /// Client metadata, only exposed for client-originated entries
    pub fn client_info(&self) -> Option<&ClientInfo> {
        match self.source() {
            Source::Client => self.client_info.as_ref(),
            Source::Server => None,
        }
    }

    /// Rows can be expanded when they carry client metadata and can be addressed
    pub fn is_expandable(&self) -> bool {
        self.id.is_some() && self.client_info().is_some()
    }
}

pub(crate) fn lenient_entry<'de, D>(deserializer: D) -> Result<LogEntry, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LogEntry::from_value(Value::deserialize(deserializer)?))
}

pub(crate) fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<LogEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(LogEntry::from_value).collect(),
        _ => Vec::new(),
    })
}
