//! Clipboard write with fallback
//!
//! Writers are tried in order. When all of them fail the copy simply does
//! not happen; there is no operator-facing error for it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard rejected write: {0}")]
    Rejected(String),
    #[error("clipboard i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single way of putting text on the clipboard
pub trait ClipboardWriter: Send {
    fn name(&self) -> &'static str;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Primary writer plus fallbacks
pub struct FallbackClipboard {
    writers: Vec<Box<dyn ClipboardWriter>>,
}

impl FallbackClipboard {
    pub fn new(writers: Vec<Box<dyn ClipboardWriter>>) -> Self {
        Self { writers }
    }

    /// Returns whether any writer accepted the text
    pub fn copy(&mut self, text: &str) -> bool {
        for writer in &mut self.writers {
            match writer.write_text(text) {
                Ok(()) => {
                    log::debug!("Copied {} bytes via {}", text.len(), writer.name());
                    return true;
                }
                Err(e) => log::debug!("Clipboard writer {} failed: {}", writer.name(), e),
            }
        }
        log::warn!("Copy failed: no clipboard writer accepted the text");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct FakeWriter {
        name: &'static str,
        fail: bool,
        written: Arc<Mutex<Vec<String>>>,
    }

    impl ClipboardWriter for FakeWriter {
        fn name(&self) -> &'static str {
            self.name
        }

        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Rejected("denied".into()));
            }
            self.written
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, text));
            Ok(())
        }
    }

    fn writer(
        name: &'static str,
        fail: bool,
        log: &Arc<Mutex<Vec<String>>>,
    ) -> Box<dyn ClipboardWriter> {
        Box::new(FakeWriter {
            name,
            fail,
            written: Arc::clone(log),
        })
    }

    #[test]
    fn test_primary_used_when_it_works() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut clipboard = FallbackClipboard::new(vec![
            writer("primary", false, &log),
            writer("osc52", false, &log),
        ]);
        assert!(clipboard.copy("hello"));
        assert_eq!(*log.lock().unwrap(), vec!["primary:hello"]);
    }

    #[test]
    fn test_falls_back_when_primary_rejects() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut clipboard = FallbackClipboard::new(vec![
            writer("primary", true, &log),
            writer("osc52", false, &log),
        ]);
        assert!(clipboard.copy("hello"));
        assert_eq!(*log.lock().unwrap(), vec!["osc52:hello"]);
    }

    #[test]
    fn test_total_failure_is_swallowed() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut clipboard = FallbackClipboard::new(vec![
            writer("primary", true, &log),
            writer("osc52", true, &log),
        ]);
        assert!(!clipboard.copy("hello"));
        assert!(log.lock().unwrap().is_empty());
    }
}
