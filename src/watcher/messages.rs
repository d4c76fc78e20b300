//! Messages exchanged between the UI and the clipboard watcher

use crate::clipboard::ClipboardError;
use crate::controller::{Mode, Processed, Status};

/// Commands sent from the UI to the watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatcherCommand {
    SetMode(Mode),
    ToggleMode,
    /// Run the manual paste-process-copy action once
    ProcessNow,
    // System
    Shutdown,
}

/// Events sent from the watcher to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatcherEvent {
    StatusChanged(Status),
    ModeChanged(Mode),

    // Automatic processing
    AutoProcessed(Processed),

    // Manual action
    ManualCompleted(Processed),
    ManualFailed(ClipboardError),
}
