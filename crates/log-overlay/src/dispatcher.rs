//! Re-entry point for middleware
//!
//! Host pushes and operator input share the worker's action channel, so a
//! middleware follow-up is queued behind whatever already arrived.

use crate::actions::Action;
use std::sync::mpsc::Sender;

#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the worker. A closed channel means shutdown, so
    /// the failure is logged and the action dropped.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: worker gone, dropping {:?}", e.0);
        }
    }
}
