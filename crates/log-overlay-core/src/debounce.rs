//! Debounced dispatch
//!
//! [`Debouncer`] is deadline based: the owner calls [`Debouncer::poll`] on its
//! own tick and gets the pending value once the quiet period has elapsed.
//! Time is passed in so behaviour is deterministic under test.

use std::time::{Duration, Instant};

/// Quiet period before a search request is sent
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value. Scheduling replaces it, firing or
/// cancelling clears it.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the quiet period from `now`
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Drop the pending value, returning it if there was one
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire once the deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.cancel(),
            _ => None,
        }
    }
}

/// What the search box asks the host for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    Search(String),
    Clear,
}

/// Search box input with debounced dispatch.
///
/// Non-empty text is held back until the input has been quiet for the
/// configured delay. Empty text means "no search" and is dispatched right
/// away, cancelling whatever was pending.
#[derive(Debug)]
pub struct SearchInput {
    debouncer: Debouncer<String>,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl SearchInput {
    pub fn new(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
        }
    }

    /// Record an edit. Returns an intent to dispatch immediately, if any.
    pub fn edit(&mut self, raw: &str, now: Instant) -> Option<SearchIntent> {
        let query = raw.trim();
        if query.is_empty() {
            if let Some(dropped) = self.debouncer.cancel() {
                log::debug!("Cancelled pending search for {:?}", dropped);
            }
            return Some(SearchIntent::Clear);
        }
        self.debouncer.schedule(query.to_string(), now);
        None
    }

    /// Intent whose quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<SearchIntent> {
        self.debouncer.poll(now).map(SearchIntent::Search)
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
