//! Host transport
//!
//! The host is a child process speaking newline-delimited JSON: pushes on its
//! stdout, requests on its stdin. Without a configured command the console
//! runs detached and requests go nowhere.

mod process;

pub use process::ProcessHost;

use log_overlay_core::{HostChannel, HostError, HostRequest};

/// Host stand-in used when no host command is configured
#[derive(Debug, Default)]
pub struct DetachedHost;

impl HostChannel for DetachedHost {
    fn send(&self, request: &HostRequest) -> Result<(), HostError> {
        log::info!("No host attached, dropping request: {:?}", request);
        Ok(())
    }
}
