//! Bounded store of the displayed entries, newest first

use crate::entry::{EntryId, LogEntry};
use std::collections::VecDeque;

pub const DEFAULT_MAX_LOGS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBuffer {
    entries: VecDeque<LogEntry>,
    max_logs: usize,
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOGS)
    }
}

impl RingBuffer {
    /// A zero limit is not a limit; it falls back to [`DEFAULT_MAX_LOGS`]
    pub fn new(max_logs: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_logs: if max_logs == 0 {
                DEFAULT_MAX_LOGS
            } else {
                max_logs
            },
        }
    }

    pub fn max_logs(&self) -> usize {
        self.max_logs
    }

    /// Change the limit. Zero is ignored and the prior limit is kept.
    ///
    /// The buffer is not trimmed here; the next insert evicts down to the new
    /// limit.
    pub fn set_max_logs(&mut self, max_logs: usize) -> bool {
        if max_logs == 0 {
            return false;
        }
        self.max_logs = max_logs;
        true
    }

    /// Prepend an entry and evict from the tail until the limit holds.
    ///
    /// Returns the evicted entries, oldest last.
    pub fn insert_front(&mut self, entry: LogEntry) -> Vec<LogEntry> {
        self.entries.push_front(entry);
        let mut evicted = Vec::new();
        while self.entries.len() > self.max_logs {
            if let Some(oldest) = self.entries.pop_back() {
                evicted.push(oldest);
            }
        }
        evicted
    }

    /// Remove every entry carrying `id`. Missing ids are a no-op.
    pub fn remove_by_id(&mut self, id: Option<&EntryId>) -> usize {
        let Some(id) = id else {
            return 0;
        };
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id.as_ref() != Some(id));
        before - self.entries.len()
    }

    /// Swap in a host-provided list as-is
    pub fn replace_all(&mut self, entries: Vec<LogEntry>) {
        self.entries = entries.into();
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|e| e.id.as_ref() == Some(id))
    }
}
