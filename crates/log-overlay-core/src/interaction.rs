//! UI-local interaction state
//!
//! Nothing here is synchronized with the host. The context menu is a single
//! optional id, so at most one menu can be open.

use crate::entry::{ClientField, EntryId, LogEntry};
use crate::levels::LevelRegistry;
use std::collections::HashSet;

pub const COPY_NOTIFY_MESSAGE: &str = "Copied to clipboard.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    open_menu: Option<EntryId>,
    expanded: HashSet<EntryId>,
    selected: usize,
}

impl InteractionState {
    /// Open the menu for `id`, closing any other; toggles when already open.
    ///
    /// Rows without an id have no menu. Returns whether the menu is now open.
    pub fn toggle_menu(&mut self, id: Option<&EntryId>) -> bool {
        let Some(id) = id else {
            self.open_menu = None;
            return false;
        };
        if self.open_menu.as_ref() == Some(id) {
            self.open_menu = None;
            false
        } else {
            self.open_menu = Some(id.clone());
            true
        }
    }

    pub fn close_menus(&mut self) {
        self.open_menu = None;
    }

    pub fn open_menu(&self) -> Option<&EntryId> {
        self.open_menu.as_ref()
    }

    /// Flip the detail block of an expandable row. Other rows are ignored.
    pub fn toggle_expanded(&mut self, entry: &LogEntry) -> bool {
        if !entry.is_expandable() {
            return false;
        }
        let Some(id) = entry.id.as_ref() else {
            return false;
        };
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
        true
    }

    pub fn is_expanded(&self, entry: &LogEntry) -> bool {
        entry
            .id
            .as_ref()
            .is_some_and(|id| self.expanded.contains(id))
    }

    /// Drop any state attached to a removed row
    pub fn forget(&mut self, id: &EntryId) {
        self.expanded.remove(id);
        if self.open_menu.as_ref() == Some(id) {
            self.open_menu = None;
        }
    }

    /// Full list replacement: nothing survives
    pub fn reset(&mut self) {
        self.open_menu = None;
        self.expanded.clear();
        self.selected = 0;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the cursor inside a list of `len` rows
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// What a copy gesture targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The whole row as `time | level | source | message`
    Row,
    /// A single value of the client detail block
    Field(ClientField),
}

/// Plain-text payload for a copy gesture, or `None` when there is nothing
/// to copy (unaddressable row, empty field value, non-client row).
pub fn copy_text(entry: &LogEntry, target: CopyTarget, levels: &LevelRegistry) -> Option<String> {
    match target {
        CopyTarget::Row => {
            entry.id.as_ref()?;
            let level = levels.lookup(entry.level());
            let text = format!(
                "{} | {} | {} | {}",
                entry.time(),
                level.label,
                entry.source().as_str(),
                entry.message()
            );
            Some(text.trim().to_string())
        }
        CopyTarget::Field(field) => {
            let value = field.value(entry.client_info()?);
            (!value.is_empty()).then_some(value)
        }
    }
}
