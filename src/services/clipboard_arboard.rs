//! System clipboard access through arboard.

use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Writes generated prompts to the system clipboard.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    /// Open the system clipboard. Fails on hosts without a display server.
    pub fn new() -> Result<Self, AppError> {
        let clipboard = Clipboard::new()
            .map_err(|e| AppError::ClipboardError(format!("Failed to open clipboard: {}", e)))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        tracing::debug!(chars = text.chars().count(), "writing prompt to clipboard");
        self.clipboard
            .set_text(text)
            .map_err(|e| AppError::ClipboardError(format!("Failed to write clipboard: {}", e)))
    }
}
