//! System clipboard backed by arboard

use super::{ClipboardBackend, ClipboardError};
use arboard::Clipboard;
use tracing::debug;

/// The platform clipboard.
///
/// One `arboard::Clipboard` handle is kept for the lifetime of the value: on
/// Linux the text we write is only served while a handle is alive. The handle
/// is opened on first use and reopened after any error other than "no text".
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    fn with_handle<T>(
        &mut self,
        op: impl FnOnce(&mut Clipboard) -> Result<T, arboard::Error>,
    ) -> Result<T, ClipboardError> {
        if self.handle.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(clipboard);
        }
        let handle = self
            .handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not open".to_string()))?;

        op(handle).map_err(|e| {
            let err = ClipboardError::from(e);
            if err != ClipboardError::NonText {
                debug!("Dropping clipboard handle after error: {}", err);
                self.handle = None;
            }
            err
        })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let text = self.with_handle(|clipboard| clipboard.get_text())?;
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        Ok(text)
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.with_handle(|clipboard| clipboard.clear())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        // set_text replaces the contents in one step
        self.with_handle(|clipboard| clipboard.set_text(text))
    }
}
