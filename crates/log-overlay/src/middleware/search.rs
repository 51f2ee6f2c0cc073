//! SearchMiddleware - owns the search box text and its debounce
//!
//! Edits update the text immediately (mirrored to the reducer through
//! `TextChanged`), while the host only hears about the query once typing
//! has paused. Emptying the box clears the search right away.

use crate::actions::{Action, ConsoleAction, GlobalAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use log_overlay_core::{SearchInput, SearchIntent};
use std::time::{Duration, Instant};

pub struct SearchMiddleware {
    text: String,
    input: SearchInput,
}

impl SearchMiddleware {
    pub fn new(debounce: Duration) -> Self {
        Self {
            text: String::new(),
            input: SearchInput::new(debounce),
        }
    }

    fn edit(&mut self, action: &SearchAction, now: Instant, dispatcher: &Dispatcher) {
        let before = self.text.len();
        match action {
            SearchAction::Char(c) => self.text.push(*c),
            SearchAction::Backspace => {
                self.text.pop();
            }
            SearchAction::ClearLine => self.text.clear(),
            _ => return,
        }
        // Deleting from an empty box changes nothing and must not re-clear
        if self.text.len() == before && !matches!(action, SearchAction::Char(_)) {
            return;
        }

        dispatcher.dispatch(Action::Search(SearchAction::TextChanged(self.text.clone())));
        if let Some(intent) = self.input.edit(&self.text, now) {
            dispatch_intent(intent, dispatcher);
        }
    }

    fn tick(&mut self, now: Instant, dispatcher: &Dispatcher) {
        if let Some(intent) = self.input.poll(now) {
            dispatch_intent(intent, dispatcher);
        }
    }

    fn handle_at(&mut self, action: &Action, now: Instant, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Search(
                edit @ (SearchAction::Char(_) | SearchAction::Backspace | SearchAction::ClearLine),
            ) => {
                self.edit(edit, now, dispatcher);
                false
            }
            Action::Global(GlobalAction::Tick) => {
                self.tick(now, dispatcher);
                true
            }
            _ => true,
        }
    }
}

fn dispatch_intent(intent: SearchIntent, dispatcher: &Dispatcher) {
    let action = match intent {
        SearchIntent::Search(query) => ConsoleAction::SubmitSearch(query),
        SearchIntent::Clear => ConsoleAction::ClearSearch,
    };
    dispatcher.dispatch(Action::Console(action));
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        self.handle_at(action, Instant::now(), dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::testing::{dispatched, dispatcher};
    use pretty_assertions::assert_eq;

    const MS: Duration = Duration::from_millis(1);

    fn type_str(mw: &mut SearchMiddleware, text: &str, at: Instant, dispatcher: &Dispatcher) {
        for c in text.chars() {
            mw.handle_at(&Action::Search(SearchAction::Char(c)), at, dispatcher);
        }
    }

    fn tick(mw: &mut SearchMiddleware, at: Instant, dispatcher: &Dispatcher) {
        mw.handle_at(&Action::Global(GlobalAction::Tick), at, dispatcher);
    }

    #[test]
    fn test_typing_burst_sends_one_search() {
        let (dispatcher, rx) = dispatcher();
        let mut mw = SearchMiddleware::new(200 * MS);
        let start = Instant::now();

        type_str(&mut mw, "err", start, &dispatcher);
        tick(&mut mw, start + 100 * MS, &dispatcher);
        type_str(&mut mw, "or", start + 150 * MS, &dispatcher);
        tick(&mut mw, start + 300 * MS, &dispatcher);
        tick(&mut mw, start + 350 * MS, &dispatcher);
        tick(&mut mw, start + 600 * MS, &dispatcher);

        let submitted: Vec<_> = dispatched(&rx)
            .into_iter()
            .filter(|a| a.starts_with("Console"))
            .collect();
        assert_eq!(submitted, vec![r#"Console(SubmitSearch("error"))"#]);
    }

    #[test]
    fn test_edits_mirror_text() {
        let (dispatcher, rx) = dispatcher();
        let mut mw = SearchMiddleware::new(200 * MS);
        let start = Instant::now();

        type_str(&mut mw, "ab", start, &dispatcher);
        mw.handle_at(&Action::Search(SearchAction::Backspace), start, &dispatcher);

        assert_eq!(
            dispatched(&rx),
            vec![
                r#"Search(TextChanged("a"))"#,
                r#"Search(TextChanged("ab"))"#,
                r#"Search(TextChanged("a"))"#,
            ]
        );
    }

    #[test]
    fn test_clearing_box_clears_search_immediately() {
        let (dispatcher, rx) = dispatcher();
        let mut mw = SearchMiddleware::new(200 * MS);
        let start = Instant::now();

        type_str(&mut mw, "warn", start, &dispatcher);
        mw.handle_at(&Action::Search(SearchAction::ClearLine), start + 50 * MS, &dispatcher);
        tick(&mut mw, start + 500 * MS, &dispatcher);

        let requests: Vec<_> = dispatched(&rx)
            .into_iter()
            .filter(|a| a.starts_with("Console"))
            .collect();
        assert_eq!(requests, vec!["Console(ClearSearch)"]);
    }

    #[test]
    fn test_deleting_from_empty_box_sends_nothing() {
        let (dispatcher, rx) = dispatcher();
        let mut mw = SearchMiddleware::new(200 * MS);
        let start = Instant::now();

        for _ in 0..3 {
            mw.handle_at(&Action::Search(SearchAction::Backspace), start, &dispatcher);
        }
        mw.handle_at(&Action::Search(SearchAction::ClearLine), start, &dispatcher);
        tick(&mut mw, start + 500 * MS, &dispatcher);

        assert_eq!(dispatched(&rx), Vec::<String>::new());
    }

    #[test]
    fn test_raw_edits_are_consumed_and_ticks_forwarded() {
        let (dispatcher, _rx) = dispatcher();
        let mut mw = SearchMiddleware::new(200 * MS);
        let now = Instant::now();
        assert!(!mw.handle_at(&Action::Search(SearchAction::Char('x')), now, &dispatcher));
        assert!(mw.handle_at(&Action::Global(GlobalAction::Tick), now, &dispatcher));
        assert!(mw.handle_at(&Action::Search(SearchAction::Focus), now, &dispatcher));
    }
}
