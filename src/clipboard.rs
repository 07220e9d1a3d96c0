//! Trait abstraction for clipboard access to enable mocking in tests

use anyhow::Result;

/// Destination for copied text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardProvider {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, opened fresh for each copy
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
