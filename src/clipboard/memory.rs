//! In-memory clipboard
//!
//! Used by tests and anywhere a clipboard without a display server is needed.
//! Clones share the same contents, so a test can keep one handle while the
//! watcher owns another.

use super::{ClipboardBackend, ClipboardError};
use std::sync::{Arc, Mutex, MutexGuard};

/// What the in-memory clipboard currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardContents {
    Text(String),
    /// Something that is not text (an image, a file list, ...)
    NonText,
    Empty,
    /// Every operation fails as if the clipboard could not be opened
    Unavailable,
}

#[derive(Debug)]
struct Inner {
    contents: ClipboardContents,
    reads: usize,
    writes: usize,
}

/// Shared in-memory clipboard
#[derive(Debug, Clone)]
pub struct MemoryClipboard {
    inner: Arc<Mutex<Inner>>,
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::with_contents(ClipboardContents::Empty)
    }
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_contents(ClipboardContents::Text(text.into()))
    }

    pub fn with_contents(contents: ClipboardContents) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                contents,
                reads: 0,
                writes: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the contents as if another application copied something
    pub fn set_contents(&self, contents: ClipboardContents) {
        self.lock().contents = contents;
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.set_contents(ClipboardContents::Text(text.into()));
    }

    pub fn contents(&self) -> ClipboardContents {
        self.lock().contents.clone()
    }

    /// Current text, if the clipboard holds any
    pub fn text(&self) -> Option<String> {
        match &self.lock().contents {
            ClipboardContents::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    /// Number of successful `write_text` calls so far
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Number of `read_text` calls so far, failed ones included
    pub fn read_count(&self) -> usize {
        self.lock().reads
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let mut inner = self.lock();
        inner.reads += 1;
        match &inner.contents {
            ClipboardContents::Text(text) if text.is_empty() => Err(ClipboardError::Empty),
            ClipboardContents::Text(text) => Ok(text.clone()),
            ClipboardContents::NonText => Err(ClipboardError::NonText),
            ClipboardContents::Empty => Err(ClipboardError::Empty),
            ClipboardContents::Unavailable => Err(ClipboardError::Unavailable(
                "clipboard unavailable".to_string(),
            )),
        }
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        let mut inner = self.lock();
        if inner.contents == ClipboardContents::Unavailable {
            return Err(ClipboardError::Unavailable(
                "clipboard unavailable".to_string(),
            ));
        }
        inner.contents = ClipboardContents::Empty;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut inner = self.lock();
        if inner.contents == ClipboardContents::Unavailable {
            return Err(ClipboardError::Unavailable(
                "clipboard unavailable".to_string(),
            ));
        }
        inner.contents = ClipboardContents::Text(text.to_string());
        inner.writes += 1;
        Ok(())
    }
}
