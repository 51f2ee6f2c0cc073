//! HostMiddleware - turns console intents into host requests
//!
//! Requests are fire-and-forget; the view only changes when the host
//! answers with a push. Paging is validated against the current mode so
//! out-of-range requests never leave the process.

use crate::actions::{Action, ConsoleAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use log_overlay_core::{ActionDispatcher, HostChannel, COPY_NOTIFY_MESSAGE};

pub struct HostMiddleware {
    requests: ActionDispatcher,
}

impl HostMiddleware {
    pub fn new(host: Box<dyn HostChannel>) -> Self {
        Self {
            requests: ActionDispatcher::new(host),
        }
    }
}

impl Middleware for HostMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Console(console_action) = action else {
            return true;
        };

        match console_action {
            ConsoleAction::SubmitSearch(query) => {
                self.requests.search(query);
            }
            ConsoleAction::ClearSearch => {
                self.requests.clear_search();
            }
            ConsoleAction::PagePrev => {
                self.requests.page_prev(&state.console.mode);
            }
            ConsoleAction::PageNext => {
                self.requests.page_next(&state.console.mode);
            }
            ConsoleAction::ResumeLive => {
                self.requests.resume_live();
            }
            ConsoleAction::Close => {
                self.requests.close();
            }
            ConsoleAction::NotifyCopied => {
                self.requests.copy_notify(COPY_NOTIFY_MESSAGE);
            }
            ConsoleAction::MenuDelete => {
                // Removal happens when the host confirms with logDeleted
                self.requests
                    .delete_log(state.console.interaction.open_menu());
                dispatcher.dispatch(Action::Console(ConsoleAction::CloseMenus));
            }
            _ => return true,
        }
        false
    }
}
