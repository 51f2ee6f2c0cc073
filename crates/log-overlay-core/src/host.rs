//! Outbound half of the host channel
//!
//! Requests are fire-and-forget. Results, if any, come back later as
//! [`crate::HostPush`] messages through whatever feeds the action loop.

use crate::protocol::{HostRequest, ProtocolError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("host channel closed")]
    Disconnected,
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("host i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that can carry a request to the host
pub trait HostChannel: Send {
    fn send(&self, request: &HostRequest) -> Result<(), HostError>;
}

/// Test doubles for the host channel
#[cfg(any(test, feature = "test-support"))]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every request. Clones share the same log.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingHost {
        requests: Arc<Mutex<Vec<HostRequest>>>,
    }

    impl RecordingHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn requests(&self) -> Vec<HostRequest> {
            self.requests
                .lock()
                .map(|r| r.clone())
                .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
        }
    }

    impl HostChannel for RecordingHost {
        fn send(&self, request: &HostRequest) -> Result<(), HostError> {
            match self.requests.lock() {
                Ok(mut requests) => requests.push(request.clone()),
                Err(poisoned) => poisoned.into_inner().push(request.clone()),
            }
            Ok(())
        }
    }

    /// A host that is gone
    #[derive(Debug, Clone, Default)]
    pub struct DisconnectedHost;

    impl HostChannel for DisconnectedHost {
        fn send(&self, _request: &HostRequest) -> Result<(), HostError> {
            Err(HostError::Disconnected)
        }
    }
}
