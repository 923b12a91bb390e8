//! System clipboard access.

use viralvibe_core::error::{Result, ViralVibeError};

/// Plain-text clipboard writer.
pub struct SystemClipboard;

impl SystemClipboard {
    /// Places `text` on the system clipboard.
    pub fn copy_text(text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ViralVibeError::io(format!("Clipboard unavailable: {}", e)))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ViralVibeError::io(format!("Failed to copy to clipboard: {}", e)))?;
        Ok(())
    }
}
