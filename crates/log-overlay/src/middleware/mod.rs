use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod clipboard;
pub mod host;
pub mod keyboard;
pub mod logging;
pub mod search;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it can perform blocking
/// operations (host writes, clipboard access) without affecting rendering.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::mpsc::{self, Receiver};

    /// Dispatcher whose dispatched actions can be inspected
    pub fn dispatcher() -> (Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Dispatcher::new(tx), rx)
    }

    /// Everything dispatched so far, formatted for comparison
    pub fn dispatched(rx: &Receiver<Action>) -> Vec<String> {
        rx.try_iter().map(|a| format!("{:?}", a)).collect()
    }
}
