//! Wire messages exchanged with the host
//!
//! Both directions are JSON objects tagged by an `action` field:
//!
//! ```json
//! {"action":"addLog","log":{"id":"1","level":"warn","message":"disk almost full"}}
//! {"action":"pageNext","page":3}
//! ```

use crate::entry::{self, EntryId, LogEntry};
use crate::lenient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed host message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Unsolicited message from the host
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostPush {
    /// Presentation only; state keeps evolving while hidden
    SetVisible {
        #[serde(default, deserialize_with = "lenient::flag")]
        visible: bool,
    },
    /// New live entry
    AddLog {
        #[serde(default, deserialize_with = "entry::lenient_entry")]
        log: LogEntry,
    },
    /// One page of history
    #[serde(rename_all = "camelCase")]
    SetPage {
        #[serde(default, deserialize_with = "lenient::count")]
        page: Option<usize>,
        #[serde(default, deserialize_with = "lenient::count")]
        total_pages: Option<usize>,
        #[serde(default, deserialize_with = "lenient::count")]
        total: Option<usize>,
        #[serde(default, deserialize_with = "entry::lenient_entries")]
        logs: Vec<LogEntry>,
    },
    /// Results of a host-executed search, never paginated
    SetSearchResults {
        #[serde(default, deserialize_with = "lenient::string")]
        query: Option<String>,
        #[serde(default, deserialize_with = "entry::lenient_entries")]
        logs: Vec<LogEntry>,
    },
    /// Partial configuration update
    #[serde(rename_all = "camelCase")]
    SetConfig {
        #[serde(default, deserialize_with = "lenient::positive")]
        max_logs: Option<usize>,
        #[serde(default)]
        levels: Option<Value>,
    },
    /// An entry was deleted on the host
    LogDeleted {
        #[serde(default, deserialize_with = "entry::lenient_id")]
        id: Option<EntryId>,
    },
    /// Back to live streaming, seeded with the newest entries
    SetLive {
        #[serde(default, deserialize_with = "entry::lenient_entries")]
        logs: Vec<LogEntry>,
    },
}

impl HostPush {
    /// Decode one line of the host stream
    pub fn decode(line: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(line)?)
    }

    /// Wire name of the message
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetVisible { .. } => "setVisible",
            Self::AddLog { .. } => "addLog",
            Self::SetPage { .. } => "setPage",
            Self::SetSearchResults { .. } => "setSearchResults",
            Self::SetConfig { .. } => "setConfig",
            Self::LogDeleted { .. } => "logDeleted",
            Self::SetLive { .. } => "setLive",
        }
    }
}

/// Fire-and-forget request to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostRequest {
    Search { query: String },
    ClearSearch,
    Close,
    /// `page` is the requested target page
    PagePrev { page: usize },
    PageNext { page: usize },
    DeleteLog { id: EntryId },
    CopyNotify { message: String },
    ResumeLive,
}

impl HostRequest {
    /// One JSON line, without the trailing newline
    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
