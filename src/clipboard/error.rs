//! Clipboard error types

use thiserror::Error;

/// Recoverable clipboard failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),

    #[error("Clipboard does not contain text")]
    NonText,

    #[error("Clipboard is empty")]
    Empty,
}

impl ClipboardError {
    /// Message shown in the blocking error dialog of a manual action
    pub fn user_message(&self) -> &'static str {
        match self {
            ClipboardError::Unavailable(_) => "Failed to access clipboard.",
            ClipboardError::NonText | ClipboardError::Empty => "Clipboard does not contain text.",
        }
    }
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ContentNotAvailable => ClipboardError::NonText,
            other => ClipboardError::Unavailable(other.to_string()),
        }
    }
}
