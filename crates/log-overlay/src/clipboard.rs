//! Clipboard writers
//!
//! The system clipboard is tried first. Terminals reached over ssh or inside
//! multiplexers often have no system clipboard, so OSC 52 is the fallback.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log_overlay_core::{ClipboardError, ClipboardWriter, FallbackClipboard};
use std::io::Write;

/// System clipboard using arboard, connected on first use
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("system clipboard".into()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ensure()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}

/// Clipboard write through the terminal (OSC 52)
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write + Send> ClipboardWriter for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// System clipboard with OSC 52 on stdout as fallback
pub fn default_clipboard() -> FallbackClipboard {
    FallbackClipboard::new(vec![
        Box::new(SystemClipboard::new()),
        Box::new(Osc52Clipboard::new(std::io::stdout())),
    ])
}
