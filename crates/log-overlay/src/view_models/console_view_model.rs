//! Console View Model
//!
//! Everything the console view shows, resolved from state: level labels and
//! colors, fallbacks for missing fields, the detail block of expanded rows
//! and the enabled state of the paging controls.

use crate::state::AppState;
use log_overlay_core::{ClientField, ConsoleState, LogEntry, Source, ViewMode};

/// One value of the client detail block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// Key that copies this value
    pub key: char,
    pub label: &'static str,
    pub value: String,
}

/// A rendered row of the log list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRowModel {
    pub time: String,
    pub level_label: String,
    pub level_color: Option<String>,
    pub source: Source,
    pub message: String,
    pub selected: bool,
    pub menu_open: bool,
    /// Present when the row is expanded
    pub details: Option<Vec<DetailRow>>,
    /// Whether the row can be expanded at all
    pub expandable: bool,
}

impl LogRowModel {
    /// Leading gutter: open menu, then expansion state
    pub fn marker(&self) -> &'static str {
        match (self.menu_open, &self.details, self.expandable) {
            (true, _, _) => "≡ ",
            (false, Some(_), _) => "▾ ",
            (false, None, true) => "▸ ",
            (false, None, false) => "  ",
        }
    }
}

/// Footer line: status text and paging controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterModel {
    pub text: String,
    pub show_paging: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub show_resume_live: bool,
}

pub struct ConsoleViewModel<'a> {
    state: &'a AppState,
}

impl<'a> ConsoleViewModel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn console(&self) -> &ConsoleState {
        &self.state.console
    }

    /// Rows to render. An empty list yields the single placeholder row.
    pub fn rows(&self) -> Vec<LogRowModel> {
        let console = self.console();
        if console.shows_placeholder() {
            return vec![self.row(&ConsoleState::placeholder_entry(), false)];
        }
        let selected = console.interaction.selected();
        console
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.row(entry, index == selected))
            .collect()
    }

    fn row(&self, entry: &LogEntry, selected: bool) -> LogRowModel {
        let console = self.console();
        let level = console.levels.lookup(entry.level());
        let menu_open = entry.id.is_some() && console.interaction.open_menu() == entry.id.as_ref();
        let details = console
            .interaction
            .is_expanded(entry)
            .then(|| entry.client_info())
            .flatten()
            .map(|info| {
                ClientField::ALL
                    .iter()
                    .zip('1'..='5')
                    .map(|(field, key)| DetailRow {
                        key,
                        label: field.label(),
                        value: field.value(info),
                    })
                    .collect()
            });

        LogRowModel {
            time: entry.time().to_string(),
            level_label: level.label,
            level_color: level.color,
            source: entry.source(),
            message: entry.message().to_string(),
            selected,
            menu_open,
            details,
            expandable: entry.is_expandable(),
        }
    }

    /// Cursor position for the list widget
    pub fn selected_index(&self) -> Option<usize> {
        let console = self.console();
        (!console.shows_placeholder()).then(|| console.interaction.selected())
    }

    pub fn title(&self) -> String {
        let mode = match &self.console().mode {
            ViewMode::Live => "Live".to_string(),
            ViewMode::Paged { .. } => "History".to_string(),
            ViewMode::Search { query, .. } => format!("Search \"{}\"", query),
        };
        if self.state.host_connected {
            format!(" Log Console · {} ", mode)
        } else {
            format!(" Log Console · {} · host disconnected ", mode)
        }
    }

    pub fn footer(&self) -> FooterModel {
        let mode = &self.console().mode;
        FooterModel {
            text: self.console().footer_text(),
            show_paging: matches!(mode, ViewMode::Paged { .. }),
            prev_enabled: mode.prev_target().is_some(),
            next_enabled: mode.next_target().is_some(),
            show_resume_live: !mode.is_live(),
        }
    }

    /// Search box text, with a cursor marker while focused
    pub fn search_text(&self) -> String {
        let search = &self.state.search;
        if search.focused {
            format!("{}▏", search.text)
        } else {
            search.text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_overlay_core::{ClientInfo, HostPush, PaginationMeta};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn push(state: &mut AppState, push: HostPush) {
        let console = std::mem::take(&mut state.console);
        state.console = log_overlay_core::reduce(console, &push);
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let state = AppState::default();
        let vm = ConsoleViewModel::new(&state);
        let rows = vm.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].message, "No logs available.");
        assert_eq!(rows[0].time, "--:--:--");
        assert_eq!(vm.selected_index(), None);
        assert_eq!(vm.footer().text, "No results found");
    }

    #[test]
    fn test_row_uses_level_registry() {
        let mut state = AppState::default();
        push(
            &mut state,
            HostPush::SetConfig {
                max_logs: None,
                levels: Some(json!({"WARN": {"label": "Warning", "color": "#ffaa00"}})),
            },
        );
        push(
            &mut state,
            HostPush::AddLog {
                log: LogEntry::new("1", "disk").with_level("warn"),
            },
        );
        push(
            &mut state,
            HostPush::AddLog {
                log: LogEntry::new("2", "odd").with_level("custom"),
            },
        );

        let rows = ConsoleViewModel::new(&state).rows();
        assert_eq!(rows[0].level_label, "custom");
        assert_eq!(rows[0].level_color, None);
        assert_eq!(rows[1].level_label, "Warning");
        assert_eq!(rows[1].level_color.as_deref(), Some("#ffaa00"));
    }

    #[test]
    fn test_expanded_client_row_has_details() {
        let mut state = AppState::default();
        let entry = LogEntry::new("5", "joined")
            .with_source(Source::Client)
            .with_client_info(ClientInfo {
                name: Some("alice".into()),
                ..ClientInfo::default()
            });
        push(&mut state, HostPush::AddLog { log: entry.clone() });
        state.console.interaction.toggle_expanded(&entry);

        let rows = ConsoleViewModel::new(&state).rows();
        let details = rows[0].details.as_ref().unwrap();
        assert_eq!(details.len(), 5);
        assert_eq!(
            details[0],
            DetailRow {
                key: '1',
                label: "Player",
                value: "alice".into()
            }
        );
        assert_eq!(details[1].value, "Unknown");
        assert_eq!(details[4].value, "");
    }

    #[test]
    fn test_open_menu_marks_its_row() {
        let mut state = AppState::default();
        push(&mut state, HostPush::AddLog { log: LogEntry::new("1", "first") });
        push(&mut state, HostPush::AddLog { log: LogEntry::new("2", "second") });
        let id = state.console.entries.get(1).and_then(|e| e.id.clone());
        state.console.interaction.toggle_menu(id.as_ref());

        let rows = ConsoleViewModel::new(&state).rows();
        assert_eq!(
            rows.iter().map(|row| row.menu_open).collect::<Vec<_>>(),
            vec![false, true]
        );
        assert_eq!(rows[0].marker(), "  ");
        assert_eq!(rows[1].marker(), "≡ ");
    }

    #[test]
    fn test_footer_controls_follow_mode() {
        let mut state = AppState::default();
        let footer = ConsoleViewModel::new(&state).footer();
        assert!(!footer.show_paging);
        assert!(!footer.show_resume_live);

        push(
            &mut state,
            HostPush::SetPage {
                page: Some(0),
                total_pages: Some(2),
                total: Some(50),
                logs: vec![LogEntry::new("1", "old")],
            },
        );
        let footer = ConsoleViewModel::new(&state).footer();
        assert_eq!(footer.text, "Page 1 / 2 (50)");
        assert!(footer.show_paging);
        assert!(!footer.prev_enabled);
        assert!(footer.next_enabled);
        assert!(footer.show_resume_live);
    }

    #[test]
    fn test_title_reports_search_and_disconnect() {
        let mut state = AppState::default();
        state.console.mode = ViewMode::Search {
            query: "zzz".into(),
            meta: PaginationMeta::single(0),
        };
        state.host_connected = false;
        assert_eq!(
            ConsoleViewModel::new(&state).title(),
            " Log Console · Search \"zzz\" · host disconnected "
        );
    }
}
