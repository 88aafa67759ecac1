//! Clipboard helper for copying cards to the system clipboard
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use crate::catalog::Card;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Clipboard representation of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    /// Name, type line, rules text, image URL
    Text,
    /// Pretty-printed JSON in the API's field naming
    Json,
}

impl CopyFormat {
    pub fn label(&self) -> &'static str {
        match self {
            CopyFormat::Text => "card",
            CopyFormat::Json => "card JSON",
        }
    }
}

/// Render a card in the requested format
pub fn render_card(card: &Card, format: CopyFormat) -> Result<String> {
    match format {
        CopyFormat::Text => Ok(card.to_plain_text()),
        CopyFormat::Json => serde_json::to_string_pretty(card).context("Failed to serialize card"),
    }
}

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Copy a card and return the toast message describing the outcome
pub fn copy_card(card: &Card, format: CopyFormat) -> String {
    match render_card(card, format).and_then(|text| copy_to_clipboard(&text)) {
        Ok(()) => format!("✓ Copied {} to clipboard", format.label()),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            "✗ Failed to copy".to_string()
        }
    }
}
