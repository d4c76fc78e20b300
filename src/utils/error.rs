//! Error handling for Line Joiner

use crate::clipboard::ClipboardError;
use thiserror::Error;

/// Main error type for Line Joiner
#[derive(Debug, Error)]
pub enum LineJoinerError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Watcher is no longer running")]
    WatcherStopped,

    #[error("Watcher command queue is full, dropped {0}")]
    WatcherBusy(String),
}
