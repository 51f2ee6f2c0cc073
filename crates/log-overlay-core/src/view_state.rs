//! Display mode and the view-state record

use crate::entry::LogEntry;
use crate::interaction::InteractionState;
use crate::levels::LevelRegistry;
use crate::pagination::PaginationMeta;
use crate::ring_buffer::{RingBuffer, DEFAULT_MAX_LOGS};

pub const NO_RESULTS_FOOTER: &str = "No results found";
pub const EMPTY_PLACEHOLDER_MESSAGE: &str = "No logs available.";

/// Which kind of list is on screen. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Newest entries, appended as the host pushes them
    #[default]
    Live,
    /// One page of history
    Paged { meta: PaginationMeta },
    /// Host-executed query results
    Search {
        query: String,
        meta: PaginationMeta,
    },
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Paged { .. } => "paged",
            Self::Search { .. } => "search",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    pub fn pagination(&self) -> Option<&PaginationMeta> {
        match self {
            Self::Live => None,
            Self::Paged { meta } | Self::Search { meta, .. } => Some(meta),
        }
    }

    /// Target page of a "previous" request, or `None` when the control is
    /// disabled
    pub fn prev_target(&self) -> Option<usize> {
        match self {
            Self::Paged { meta } => meta.prev_page(),
            Self::Live | Self::Search { .. } => None,
        }
    }

    /// Target page of a "next" request, or `None` when the control is
    /// disabled
    pub fn next_target(&self) -> Option<usize> {
        match self {
            Self::Paged { meta } => meta.next_page(),
            Self::Live | Self::Search { .. } => None,
        }
    }
}

/// The single view-state record mutated by [`crate::reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleState {
    pub visible: bool,
    pub mode: ViewMode,
    pub entries: RingBuffer,
    pub levels: LevelRegistry,
    /// Footer override set by the last authoritative push
    pub footer: Option<String>,
    pub interaction: InteractionState,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOGS, LevelRegistry::new())
    }
}

impl ConsoleState {
    pub fn new(max_logs: usize, levels: LevelRegistry) -> Self {
        Self {
            visible: true,
            mode: ViewMode::Live,
            entries: RingBuffer::new(max_logs),
            levels,
            footer: None,
            interaction: InteractionState::default(),
        }
    }

    /// Footer text as displayed
    pub fn footer_text(&self) -> String {
        match &self.footer {
            Some(footer) if !footer.is_empty() => footer.clone(),
            _ if self.entries.is_empty() => NO_RESULTS_FOOTER.to_string(),
            _ => format!("Live ({})", self.entries.len()),
        }
    }

    /// An empty list is rendered as a single placeholder row
    pub fn shows_placeholder(&self) -> bool {
        self.entries.is_empty()
    }

    /// The row rendered in place of an empty list
    pub fn placeholder_entry() -> LogEntry {
        LogEntry::default().with_message(EMPTY_PLACEHOLDER_MESSAGE)
    }

    /// Entry under the cursor
    pub fn selected_entry(&self) -> Option<&LogEntry> {
        self.entries.get(self.interaction.selected())
    }
}
