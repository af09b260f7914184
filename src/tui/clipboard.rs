//! Clipboard sink for copy actions
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux). The
//! system clipboard is opened fresh for each write to avoid holding
//! resources. Writes are fire-and-forget: callers log failures and move on.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Something that accepts UTF-8 text payloads
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}

/// Records payloads instead of touching the system clipboard
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingClipboard {
    pub writes: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}
