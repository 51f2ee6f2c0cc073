//! Actions module
//!
//! Actions are tagged by domain:
//! - `Global`: application-wide (raw keys, quit, tick)
//! - `Host`: pushes decoded from the host channel, reduced by the core engine
//! - `Console`: operator intents and local interaction on the log list
//! - `Search`: editing the search box

pub mod console;
pub mod global;
pub mod search;

pub use console::ConsoleAction;
pub use global::GlobalAction;
pub use search::SearchAction;

use log_overlay_core::HostPush;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Authoritative update pushed by the host
    Host(HostPush),
    /// Log list actions
    Console(ConsoleAction),
    /// Search box actions
    Search(SearchAction),
}

impl Action {
    /// Periodic ticks are too noisy for the action log
    pub fn is_tick(&self) -> bool {
        matches!(self, Action::Global(GlobalAction::Tick))
    }
}
