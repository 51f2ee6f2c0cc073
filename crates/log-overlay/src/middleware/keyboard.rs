//! KeyboardMiddleware - translates keyboard events into console actions
//!
//! ## Layer 1: Priority keys
//! Ctrl+C and Esc work regardless of context.
//!
//! ## Layer 2: Capabilities
//! While the search box has focus (TEXT_INPUT) characters are routed to it.
//!
//! ## Layer 3: Keymap + Gating
//! Remaining keys are looked up in the keymap; each command is only
//! dispatched when the console currently has the capability it needs.

use crate::actions::{Action, ConsoleAction, GlobalAction, SearchAction};
use crate::capabilities::{PanelCapabilities, PanelCapabilityProvider};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use log_overlay_core::ClientField;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let capabilities = state.capabilities();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::Search(SearchAction::Blur));
            } else if state.console.visible {
                // Escape closes menus and asks the host to hide the console
                dispatcher.dispatch(Action::Console(ConsoleAction::CloseMenus));
                dispatcher.dispatch(Action::Console(ConsoleAction::Close));
            }
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            if let Some(action) = text_input_action(&key) {
                dispatcher.dispatch(Action::Search(action));
            }
            // Everything else is swallowed while typing
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        if let Some(action) = keymap_action(&key, capabilities, state) {
            log::debug!("Layer 3: {:?} -> {:?}", key.code, action);
            dispatcher.dispatch(action);
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

fn text_input_action(key: &KeyEvent) -> Option<SearchAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(SearchAction::ClearLine),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(SearchAction::Char(c))
        }
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Some(SearchAction::ClearLine)
        }
        KeyCode::Backspace => Some(SearchAction::Backspace),
        KeyCode::Enter | KeyCode::Tab => Some(SearchAction::Blur),
        _ => None,
    }
}

fn keymap_action(key: &KeyEvent, caps: PanelCapabilities, state: &AppState) -> Option<Action> {
    let console = |action| Some(Action::Console(action));

    if key.code == KeyCode::Char('q') {
        return Some(Action::Global(GlobalAction::Quit));
    }
    // Nothing else to interact with while the host keeps the console hidden
    if !state.console.visible {
        return None;
    }

    if caps.has_context_menu() {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('y') => return console(ConsoleAction::MenuCopy),
            KeyCode::Char('d') | KeyCode::Delete => return console(ConsoleAction::MenuDelete),
            _ => {}
        }
    }

    if caps.supports_field_copy() {
        if let KeyCode::Char(c @ '1'..='5') = key.code {
            let index = c as usize - '1' as usize;
            return console(ConsoleAction::CopyField(ClientField::ALL[index]));
        }
    }

    if caps.supports_item_navigation() {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => return console(ConsoleAction::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => return console(ConsoleAction::SelectPrevious),
            KeyCode::Char('g') | KeyCode::Home => return console(ConsoleAction::SelectFirst),
            KeyCode::Char('G') | KeyCode::End => return console(ConsoleAction::SelectLast),
            _ => {}
        }
    }

    if caps.supports_pagination() {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('[') => {
                return console(ConsoleAction::PagePrev)
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(']') => {
                return console(ConsoleAction::PageNext)
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('m') => console(ConsoleAction::ToggleMenu),
        KeyCode::Char(' ') | KeyCode::Char('o') if caps.contains(PanelCapabilities::EXPANDABLE) => {
            console(ConsoleAction::ToggleExpand)
        }
        KeyCode::Char('/') => Some(Action::Search(SearchAction::Focus)),
        KeyCode::Char('L') if !state.console.mode.is_live() => console(ConsoleAction::ResumeLive),
        _ => None,
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            return self.handle_key(*key, state, dispatcher);
        }

        // All other actions pass through
        true
    }
}
