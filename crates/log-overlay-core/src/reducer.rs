//! View-state reducer for host pushes
//!
//! Pure function from (state, push) to the next state. The match is on
//! `(mode, push)` so that a push meant for another mode cannot reach the
//! visible list. The reducer never assumes a transition the host has not
//! pushed: clearing a search changes nothing here until the host answers with
//! `setPage`.

use crate::levels::LevelRegistry;
use crate::pagination::PaginationMeta;
use crate::protocol::HostPush;
use crate::view_state::{ConsoleState, ViewMode};

pub fn reduce(mut state: ConsoleState, push: &HostPush) -> ConsoleState {
    match (&state.mode, push) {
        (_, HostPush::SetVisible { visible }) => {
            state.visible = *visible;
        }

        (ViewMode::Live, HostPush::AddLog { log }) => {
            let evicted = state.entries.insert_front(log.clone());
            for id in evicted.iter().filter_map(|e| e.id.as_ref()) {
                state.interaction.forget(id);
            }
            // Keep the cursor on the same row as the list grows above it
            if state.interaction.selected() > 0 {
                state.interaction.select_next(state.entries.len());
            }
        }
        (mode, HostPush::AddLog { .. }) => {
            log::trace!("Dropping addLog while in {} mode", mode.name());
        }

        (
            _,
            HostPush::SetPage {
                page,
                total_pages,
                total,
                logs,
            },
        ) => {
            let meta = PaginationMeta::new(
                page.unwrap_or(0),
                total_pages.unwrap_or(1),
                total.unwrap_or(0),
            );
            state.footer = Some(meta.label());
            state.mode = ViewMode::Paged { meta };
            replace_entries(&mut state, logs.clone());
        }

        (_, HostPush::SetSearchResults { query, logs }) => {
            let query = query.clone().unwrap_or_default();
            let meta = PaginationMeta::single(logs.len());
            state.footer = Some(search_footer(&query, logs.len()));
            state.mode = ViewMode::Search { query, meta };
            replace_entries(&mut state, logs.clone());
        }

        (_, HostPush::SetLive { logs }) => {
            state.footer = None;
            state.mode = ViewMode::Live;
            replace_entries(&mut state, logs.clone());
        }

        (_, HostPush::SetConfig { max_logs, levels }) => {
            if let Some(max_logs) = max_logs {
                if state.entries.set_max_logs(*max_logs) {
                    log::debug!("Buffer limit set to {}", max_logs);
                }
            }
            match levels.as_ref().map(LevelRegistry::from_value) {
                Some(Some(registry)) => {
                    log::debug!("Level table replaced ({} levels)", registry.len());
                    state.levels = registry;
                }
                Some(None) => log::warn!("Ignoring levels config that is not a mapping"),
                None => {}
            }
        }

        (_, HostPush::LogDeleted { id }) => {
            let removed = state.entries.remove_by_id(id.as_ref());
            if let Some(id) = id {
                state.interaction.forget(id);
            }
            if removed > 0 {
                state.interaction.clamp_selection(state.entries.len());
            }
        }
    }
    state
}

fn replace_entries(state: &mut ConsoleState, logs: Vec<crate::entry::LogEntry>) {
    state.entries.replace_all(logs);
    state.interaction.reset();
}

fn search_footer(query: &str, count: usize) -> String {
    if query.is_empty() {
        format!("Results ({})", count)
    } else {
        format!("Results for \"{}\" ({})", query, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ClientInfo, EntryId, LogEntry, Source};
    use crate::view_state::NO_RESULTS_FOOTER;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn add_log(id: &str) -> HostPush {
        HostPush::AddLog {
            log: LogEntry::new(id, format!("message {id}")),
        }
    }

    fn set_page(page: usize, total_pages: usize, total: usize, count: usize) -> HostPush {
        HostPush::SetPage {
            page: Some(page),
            total_pages: Some(total_pages),
            total: Some(total),
            logs: (0..count)
                .map(|i| LogEntry::new(format!("p{i}"), "paged"))
                .collect(),
        }
    }

    fn search_results(query: &str, count: usize) -> HostPush {
        HostPush::SetSearchResults {
            query: Some(query.to_string()),
            logs: (0..count)
                .map(|i| LogEntry::new(format!("s{i}"), "hit"))
                .collect(),
        }
    }

    fn replay(pushes: &[HostPush]) -> ConsoleState {
        pushes
            .iter()
            .fold(ConsoleState::default(), |state, push| reduce(state, push))
    }

    fn ids(state: &ConsoleState) -> Vec<String> {
        state
            .entries
            .iter()
            .filter_map(|e| e.id.as_ref().map(ToString::to_string))
            .collect()
    }

    #[test]
    fn test_config_then_live_pushes_keep_newest() {
        let config = HostPush::decode(r#"{"action":"setConfig","maxLogs":3}"#).unwrap();
        let state = replay(&[config, add_log("1"), add_log("2"), add_log("3"), add_log("4")]);

        assert_eq!(state.mode, ViewMode::Live);
        assert_eq!(ids(&state), vec!["4", "3", "2"]);
    }

    #[test]
    fn test_set_page_switches_to_paged_and_replaces_list() {
        let state = replay(&[add_log("live-1"), add_log("live-2"), set_page(0, 2, 50, 25)]);

        assert_eq!(
            state.mode,
            ViewMode::Paged {
                meta: PaginationMeta::new(0, 2, 50)
            }
        );
        assert_eq!(state.entries.len(), 25);
        assert!(ids(&state).iter().all(|id| id.starts_with('p')));
        assert_eq!(state.footer_text(), "Page 1 / 2 (50)");
    }

    #[test]
    fn test_empty_search_results_footer_keeps_query() {
        let state = replay(&[search_results("zzz", 0)]);

        assert!(state.shows_placeholder());
        assert_eq!(state.footer_text(), "Results for \"zzz\" (0)");
        assert_eq!(
            state.mode,
            ViewMode::Search {
                query: "zzz".into(),
                meta: PaginationMeta::single(0)
            }
        );
    }

    #[test]
    fn test_search_results_without_query() {
        let push = HostPush::SetSearchResults {
            query: None,
            logs: vec![LogEntry::new("1", "a"), LogEntry::new("2", "b")],
        };
        let state = replay(&[push]);
        assert_eq!(state.footer_text(), "Results (2)");
    }

    #[test]
    fn test_deleting_last_entry_shows_placeholder_and_keeps_footer() {
        let page = HostPush::SetPage {
            page: Some(0),
            total_pages: Some(1),
            total: Some(1),
            logs: vec![LogEntry::new("7", "only one")],
        };
        let before = replay(&[page]);
        let footer_before = before.footer_text();

        let after = reduce(
            before,
            &HostPush::LogDeleted {
                id: EntryId::new("7"),
            },
        );

        assert!(after.entries.is_empty());
        assert!(after.shows_placeholder());
        assert_eq!(after.footer_text(), footer_before);
    }

    #[test]
    fn test_deleting_last_live_entry_without_footer() {
        let state = replay(&[
            add_log("7"),
            HostPush::LogDeleted {
                id: EntryId::new("7"),
            },
        ]);
        assert!(state.shows_placeholder());
        assert_eq!(state.footer_text(), NO_RESULTS_FOOTER);
    }

    #[test]
    fn test_add_log_ignored_outside_live_mode() {
        let paged = replay(&[set_page(1, 3, 60, 20)]);
        assert_eq!(reduce(paged.clone(), &add_log("x")), paged);

        let searching = replay(&[search_results("err", 4)]);
        assert_eq!(reduce(searching.clone(), &add_log("x")), searching);
    }

    #[test]
    fn test_exactly_one_mode_after_any_sequence() {
        let state = replay(&[set_page(0, 2, 40, 20), search_results("boom", 3)]);
        assert!(matches!(state.mode, ViewMode::Search { .. }));

        let state = reduce(state, &set_page(1, 2, 40, 20));
        assert!(matches!(state.mode, ViewMode::Paged { .. }));

        let state = reduce(state, &HostPush::SetLive { logs: Vec::new() });
        assert_eq!(state.mode, ViewMode::Live);
        assert_eq!(state.footer, None);
    }

    #[test]
    fn test_last_push_wins_for_out_of_order_pages() {
        let state = replay(&[set_page(2, 5, 100, 20), set_page(1, 5, 100, 20)]);
        assert_eq!(state.footer_text(), "Page 2 / 5 (100)");
    }

    #[test]
    fn test_delete_applies_in_every_mode() {
        let state = replay(&[search_results("hit", 3)]);
        let state = reduce(
            state,
            &HostPush::LogDeleted {
                id: EntryId::new("s1"),
            },
        );
        assert_eq!(ids(&state), vec!["s0", "s2"]);
        assert!(matches!(state.mode, ViewMode::Search { .. }));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let state = replay(&[add_log("1"), add_log("2")]);
        let missing = HostPush::LogDeleted {
            id: EntryId::new("404"),
        };
        assert_eq!(reduce(state.clone(), &missing), state);
        let absent = HostPush::LogDeleted { id: None };
        assert_eq!(reduce(state.clone(), &absent), state);
    }

    #[test]
    fn test_set_visible_only_touches_presentation() {
        let state = replay(&[add_log("1")]);
        let hidden = reduce(state.clone(), &HostPush::SetVisible { visible: false });
        assert!(!hidden.visible);
        assert_eq!(hidden.entries, state.entries);

        let hidden = reduce(hidden, &add_log("2"));
        assert_eq!(hidden.entries.len(), 2);
    }

    #[test]
    fn test_set_config_partial_merge() {
        let state = replay(&[HostPush::SetConfig {
            max_logs: Some(10),
            levels: Some(json!({"warn": {"label": "Warning", "color": "yellow"}})),
        }]);
        assert_eq!(state.entries.max_logs(), 10);
        assert_eq!(state.levels.lookup("WARN").label, "Warning");

        let state = reduce(
            state,
            &HostPush::SetConfig {
                max_logs: None,
                levels: Some(json!("not a map")),
            },
        );
        assert_eq!(state.entries.max_logs(), 10);
        assert_eq!(state.levels.lookup("WARN").label, "Warning");
    }

    #[test]
    fn test_replacement_resets_interaction_state() {
        let client = LogEntry::new("c1", "joined")
            .with_source(Source::Client)
            .with_client_info(ClientInfo::default());
        let mut state = replay(&[HostPush::AddLog { log: client.clone() }]);
        state.interaction.toggle_expanded(&client);
        state.interaction.toggle_menu(client.id.as_ref());

        let state = reduce(state, &set_page(0, 1, 2, 2));
        assert!(!state.interaction.is_expanded(&client));
        assert_eq!(state.interaction.open_menu(), None);
    }

    #[test]
    fn test_eviction_forgets_expanded_rows() {
        let client = LogEntry::new("c1", "joined")
            .with_source(Source::Client)
            .with_client_info(ClientInfo::default());
        let mut state = replay(&[
            HostPush::SetConfig {
                max_logs: Some(2),
                levels: None,
            },
            HostPush::AddLog { log: client.clone() },
        ]);
        state.interaction.toggle_expanded(&client);

        let state = replay_on(state, &[add_log("2"), add_log("3")]);
        assert!(!state.entries.contains(client.id.as_ref().unwrap()));
        assert!(!state.interaction.is_expanded(&client));
    }

    fn replay_on(state: ConsoleState, pushes: &[HostPush]) -> ConsoleState {
        pushes.iter().fold(state, |state, push| reduce(state, push))
    }
}
