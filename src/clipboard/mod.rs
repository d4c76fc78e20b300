//! Clipboard access
//!
//! The watcher talks to the clipboard through [`ClipboardBackend`] so the
//! system clipboard can be swapped for an in-memory one in tests.

pub mod error;
pub mod memory;
pub mod system;

pub use error::ClipboardError;
pub use memory::{ClipboardContents, MemoryClipboard};
pub use system::SystemClipboard;

/// Text clipboard operations used by the controller
pub trait ClipboardBackend: Send {
    /// Read the current clipboard text.
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    /// Remove whatever the clipboard currently holds.
    fn clear(&mut self) -> Result<(), ClipboardError>;

    /// Replace the clipboard contents with `text`.
    ///
    /// The swap is a single operation: if it fails, the previous contents
    /// must still be on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
