// src/export/clipboard.rs

use crate::errors::{ClipboardError, Result};
use log::debug;

/// Copies the document to the system clipboard.
///
/// # Errors
/// Returns [`ClipboardError::Initialization`] when no clipboard is
/// available (headless sessions) and [`ClipboardError::SetContent`] when
/// the clipboard rejects the new contents.
pub fn copy_to_clipboard(content: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Initialization(e.to_string()))?;
    clipboard
        .set_text(content)
        .map_err(|e| ClipboardError::SetContent(e.to_string()))?;
    debug!("Copied {} bytes to clipboard", content.len());
    Ok(())
}
