//! ClipboardMiddleware - copy gestures on rows and client details
//!
//! Row copies come from the context menu. Field copies come from the detail
//! block and are followed by a copy notification to the host.

use crate::actions::{Action, ConsoleAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use log_overlay_core::{copy_text, CopyTarget, FallbackClipboard};

pub struct ClipboardMiddleware {
    clipboard: FallbackClipboard,
}

impl ClipboardMiddleware {
    pub fn new(clipboard: FallbackClipboard) -> Self {
        Self { clipboard }
    }

    fn copy_menu_row(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let console = &state.console;
        let entry = console.interaction.open_menu().and_then(|id| {
            console
                .entries
                .iter()
                .find(|entry| entry.id.as_ref() == Some(id))
        });
        if let Some(text) = entry.and_then(|e| copy_text(e, CopyTarget::Row, &console.levels)) {
            self.clipboard.copy(&text);
        }
        dispatcher.dispatch(Action::Console(ConsoleAction::CloseMenus));
    }

    fn copy_field(&mut self, target: CopyTarget, state: &AppState, dispatcher: &Dispatcher) {
        let console = &state.console;
        let Some(text) = console
            .selected_entry()
            .and_then(|entry| copy_text(entry, target, &console.levels))
        else {
            log::debug!("Nothing to copy for {:?}", target);
            return;
        };
        self.clipboard.copy(&text);
        dispatcher.dispatch(Action::Console(ConsoleAction::NotifyCopied));
    }
}

impl Middleware for ClipboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Console(ConsoleAction::MenuCopy) => {
                self.copy_menu_row(state, dispatcher);
                false
            }
            Action::Console(ConsoleAction::CopyField(field)) => {
                self.copy_field(CopyTarget::Field(*field), state, dispatcher);
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::testing::{dispatched, dispatcher};
    use log_overlay_core::{
        ClientField, ClientInfo, ClipboardError, ClipboardWriter, HostPush, LogEntry, Source,
    };
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryClipboard {
        copied: Arc<Mutex<Vec<String>>>,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn name(&self) -> &'static str {
            "memory"
        }

        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn setup(entry: LogEntry) -> (ClipboardMiddleware, MemoryClipboard, AppState) {
        let memory = MemoryClipboard::default();
        let mw = ClipboardMiddleware::new(FallbackClipboard::new(vec![Box::new(memory.clone())]));
        let mut state = AppState::default();
        state.console = log_overlay_core::reduce(state.console, &HostPush::AddLog { log: entry });
        (mw, memory, state)
    }

    #[test]
    fn test_menu_copy_writes_row_and_closes_menu() {
        let entry = LogEntry::new("9", "disk full")
            .with_time("12:00:01")
            .with_level("error");
        let (mut mw, memory, mut state) = setup(entry);
        let id = state.console.selected_entry().and_then(|e| e.id.clone());
        state.console.interaction.toggle_menu(id.as_ref());

        let (dispatcher, rx) = dispatcher();
        assert!(!mw.handle(&Action::Console(ConsoleAction::MenuCopy), &state, &dispatcher));

        assert_eq!(
            *memory.copied.lock().unwrap(),
            vec!["12:00:01 | error | server | disk full"]
        );
        assert_eq!(dispatched(&rx), vec!["Console(CloseMenus)"]);
    }

    #[test]
    fn test_field_copy_notifies_host() {
        let entry = LogEntry::new("3", "joined")
            .with_source(Source::Client)
            .with_client_info(ClientInfo {
                license: Some("license:abc".into()),
                ..ClientInfo::default()
            });
        let (mut mw, memory, state) = setup(entry);

        let (dispatcher, rx) = dispatcher();
        mw.handle(
            &Action::Console(ConsoleAction::CopyField(ClientField::License)),
            &state,
            &dispatcher,
        );

        assert_eq!(*memory.copied.lock().unwrap(), vec!["license:abc"]);
        assert_eq!(dispatched(&rx), vec!["Console(NotifyCopied)"]);
    }

    #[test]
    fn test_empty_field_is_not_copied() {
        let entry = LogEntry::new("3", "joined")
            .with_source(Source::Client)
            .with_client_info(ClientInfo::default());
        let (mut mw, memory, state) = setup(entry);

        let (dispatcher, rx) = dispatcher();
        mw.handle(
            &Action::Console(ConsoleAction::CopyField(ClientField::CitizenId)),
            &state,
            &dispatcher,
        );

        assert!(memory.copied.lock().unwrap().is_empty());
        assert!(dispatched(&rx).is_empty());
    }
}
