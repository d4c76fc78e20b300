//! Line Joiner library

pub mod app;
pub mod clipboard;
pub mod controller;
pub mod gui;
pub mod transform;
pub mod utils;
pub mod watcher;

// Re-export main types for easier use
pub use clipboard::{ClipboardBackend, ClipboardError, MemoryClipboard, SystemClipboard};
pub use controller::{Controller, Mode, PollOutcome, Processed, Status};
pub use gui::{LineJoinerApp, Message};
pub use transform::join_lines;
pub use utils::{AppSettings, LineJoinerError};
pub use watcher::{WatcherCommand, WatcherEvent, WatcherHandle};
