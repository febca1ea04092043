//! System clipboard access for copying and pasting equations.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Write(arboard::Error),
    #[error("failed to read clipboard: {0}")]
    Read(arboard::Error),
}

/// A handle to the system clipboard, opened on first use.
///
/// The handle is kept for the life of the window: on some platforms the
/// copied text is only served while the owning handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(ClipboardError::Access)?,
        };
        Ok(self.inner.insert(clipboard))
    }

    /// Copy text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(ClipboardError::Write)
    }

    /// Read text from the system clipboard.
    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.handle()?.get_text().map_err(ClipboardError::Read)
    }
}
