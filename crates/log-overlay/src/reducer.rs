use crate::actions::{Action, ConsoleAction, GlobalAction, SearchAction};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
///
/// Host pushes are delegated to the core engine. Everything else touches
/// UI-local state only.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::HostDisconnected) => {
            state.host_connected = false;
        }
        Action::Global(_) => {}
        Action::Host(push) => {
            state.console = log_overlay_core::reduce(state.console, push);
        }
        Action::Console(console_action) => {
            reduce_console(&mut state, console_action);
        }
        Action::Search(search_action) => {
            reduce_search(&mut state, search_action);
        }
    }
    state
}

fn reduce_console(state: &mut AppState, action: &ConsoleAction) {
    let console = &mut state.console;
    let len = console.entries.len();
    let before = console.interaction.selected();
    match action {
        ConsoleAction::SelectNext => console.interaction.select_next(len),
        ConsoleAction::SelectPrevious => console.interaction.select_previous(),
        ConsoleAction::SelectFirst => console.interaction.select_first(),
        ConsoleAction::SelectLast => console.interaction.select_last(len),
        ConsoleAction::ToggleMenu => {
            let id = console.selected_entry().and_then(|entry| entry.id.clone());
            console.interaction.toggle_menu(id.as_ref());
        }
        ConsoleAction::CloseMenus => console.interaction.close_menus(),
        ConsoleAction::ToggleExpand => {
            if let Some(entry) = console.selected_entry().cloned() {
                console.interaction.toggle_expanded(&entry);
            }
        }
        // Intents handled by middleware
        _ => {
            log::debug!("Reducer: ignoring console intent {:?}", action);
        }
    }
    // The menu belongs to the row it was opened on
    if console.interaction.selected() != before {
        console.interaction.close_menus();
    }
}

fn reduce_search(state: &mut AppState, action: &SearchAction) {
    match action {
        SearchAction::Focus => {
            state.search.focused = true;
            state.console.interaction.close_menus();
        }
        SearchAction::Blur => state.search.focused = false,
        SearchAction::TextChanged(text) => state.search.text = text.clone(),
        // Raw edits are turned into TextChanged by the search middleware
        SearchAction::Char(_) | SearchAction::Backspace | SearchAction::ClearLine => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_overlay_core::{ClientInfo, HostPush, LogEntry, Source};
    use pretty_assertions::assert_eq;

    fn with_logs(ids: &[&str]) -> AppState {
        ids.iter().fold(AppState::default(), |state, id| {
            reduce(
                state,
                &Action::Host(HostPush::AddLog {
                    log: LogEntry::new(*id, format!("message {id}")),
                }),
            )
        })
    }

    fn client_entry(id: &str) -> LogEntry {
        LogEntry::new(id, "player joined")
            .with_source(Source::Client)
            .with_client_info(ClientInfo {
                name: Some("alice".into()),
                ..ClientInfo::default()
            })
    }

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_host_push_reaches_console() {
        let state = with_logs(&["1", "2"]);
        let ids: Vec<_> = state
            .console
            .entries
            .iter()
            .filter_map(|e| e.id.as_ref().map(|id| id.as_str().to_string()))
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_cursor_moves_within_list() {
        let mut state = with_logs(&["1", "2", "3"]);
        state = reduce(state, &Action::Console(ConsoleAction::SelectNext));
        state = reduce(state, &Action::Console(ConsoleAction::SelectNext));
        state = reduce(state, &Action::Console(ConsoleAction::SelectNext));
        assert_eq!(state.console.interaction.selected(), 2);

        state = reduce(state, &Action::Console(ConsoleAction::SelectFirst));
        assert_eq!(state.console.interaction.selected(), 0);
        state = reduce(state, &Action::Console(ConsoleAction::SelectLast));
        assert_eq!(state.console.interaction.selected(), 2);
    }

    #[test]
    fn test_menu_toggles_on_selected_row() {
        let mut state = with_logs(&["1", "2"]);
        state = reduce(state, &Action::Console(ConsoleAction::ToggleMenu));
        assert_eq!(
            state.console.interaction.open_menu().map(|id| id.as_str()),
            Some("2")
        );

        // Opening another row's menu leaves only that one open
        state = reduce(state, &Action::Console(ConsoleAction::SelectNext));
        state = reduce(state, &Action::Console(ConsoleAction::ToggleMenu));
        assert_eq!(
            state.console.interaction.open_menu().map(|id| id.as_str()),
            Some("1")
        );

        state = reduce(state, &Action::Console(ConsoleAction::CloseMenus));
        assert_eq!(state.console.interaction.open_menu(), None);
    }

    #[test]
    fn test_moving_cursor_closes_menu() {
        let mut state = with_logs(&["1", "2"]);
        state = reduce(state, &Action::Console(ConsoleAction::ToggleMenu));
        state = reduce(state, &Action::Console(ConsoleAction::SelectNext));
        assert_eq!(state.console.interaction.selected(), 1);
        assert_eq!(state.console.interaction.open_menu(), None);

        // Moving against the edge keeps the cursor, so the menu stays open
        state = reduce(state, &Action::Console(ConsoleAction::ToggleMenu));
        state = reduce(state, &Action::Console(ConsoleAction::SelectLast));
        state = reduce(state, &Action::Console(ConsoleAction::SelectNext));
        assert_eq!(
            state.console.interaction.open_menu().map(|id| id.as_str()),
            Some("1")
        );

        state = reduce(state, &Action::Console(ConsoleAction::SelectFirst));
        assert_eq!(state.console.interaction.open_menu(), None);
    }

    #[test]
    fn test_expand_only_client_rows() {
        let mut state = with_logs(&["1"]);
        state = reduce(state, &Action::Console(ConsoleAction::ToggleExpand));
        let selected = state.console.selected_entry().cloned().unwrap();
        assert!(!state.console.interaction.is_expanded(&selected));

        state = reduce(
            state,
            &Action::Host(HostPush::AddLog {
                log: client_entry("2"),
            }),
        );
        state = reduce(state, &Action::Console(ConsoleAction::SelectFirst));
        state = reduce(state, &Action::Console(ConsoleAction::ToggleExpand));
        let selected = state.console.selected_entry().cloned().unwrap();
        assert!(state.console.interaction.is_expanded(&selected));
    }

    #[test]
    fn test_search_box_state() {
        let mut state = with_logs(&["1"]);
        state = reduce(state, &Action::Console(ConsoleAction::ToggleMenu));
        state = reduce(state, &Action::Search(SearchAction::Focus));
        assert!(state.search.focused);
        assert_eq!(state.console.interaction.open_menu(), None);

        state = reduce(state, &Action::Search(SearchAction::TextChanged("err".into())));
        state = reduce(state, &Action::Search(SearchAction::Blur));
        assert!(!state.search.focused);
        assert_eq!(state.search.text, "err");
    }

    #[test]
    fn test_host_disconnect_is_recorded() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::HostDisconnected),
        );
        assert!(!state.host_connected);
        assert!(state.running);
    }
}
