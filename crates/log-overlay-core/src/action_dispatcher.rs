//! Operator intents translated into host requests
//!
//! Every method issues at most one request and returns whether it did.
//! Nothing is retried or queued: the host is the source of truth, and a lost
//! request just leaves the view stale until the operator repeats the gesture.

use crate::entry::EntryId;
use crate::host::HostChannel;
use crate::protocol::HostRequest;
use crate::view_state::ViewMode;

pub struct ActionDispatcher {
    host: Box<dyn HostChannel>,
}

impl ActionDispatcher {
    pub fn new(host: Box<dyn HostChannel>) -> Self {
        Self { host }
    }

    /// Empty (or blank) text is not a search and becomes a clear request
    pub fn search(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return self.clear_search();
        }
        self.send(HostRequest::Search {
            query: query.to_string(),
        })
    }

    pub fn clear_search(&self) -> bool {
        self.send(HostRequest::ClearSearch)
    }

    pub fn close(&self) -> bool {
        self.send(HostRequest::Close)
    }

    pub fn resume_live(&self) -> bool {
        self.send(HostRequest::ResumeLive)
    }

    /// Guarded by the current mode and page window
    pub fn page_prev(&self, mode: &ViewMode) -> bool {
        match mode.prev_target() {
            Some(page) => self.send(HostRequest::PagePrev { page }),
            None => {
                log::debug!("pagePrev not available in {} mode", mode.name());
                false
            }
        }
    }

    /// Guarded by the current mode and page window
    pub fn page_next(&self, mode: &ViewMode) -> bool {
        match mode.next_target() {
            Some(page) => self.send(HostRequest::PageNext { page }),
            None => {
                log::debug!("pageNext not available in {} mode", mode.name());
                false
            }
        }
    }

    /// Rows without an id cannot be deleted
    pub fn delete_log(&self, id: Option<&EntryId>) -> bool {
        match id {
            Some(id) => self.send(HostRequest::DeleteLog { id: id.clone() }),
            None => false,
        }
    }

    pub fn copy_notify(&self, message: &str) -> bool {
        self.send(HostRequest::CopyNotify {
            message: message.to_string(),
        })
    }

    fn send(&self, request: HostRequest) -> bool {
        match self.host.send(&request) {
            Ok(()) => {
                log::debug!("Sent host request: {:?}", request);
                true
            }
            Err(e) => {
                log::warn!("Failed to send host request {:?}: {}", request, e);
                false
            }
        }
    }
}
