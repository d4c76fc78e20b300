//! State enums shared by the controller, the watcher and the GUI

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the background watcher processes clipboard changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Automatic,
    Manual,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Automatic => Mode::Manual,
            Mode::Manual => Mode::Automatic,
        }
    }

    /// Get string representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Automatic => "AUTO MODE",
            Mode::Manual => "MANUAL MODE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observational status shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Waiting,
    Processing,
    Done,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Waiting => "Waiting...",
            Status::Processing => "Processing...",
            Status::Done => "Done ✅",
        }
    }

    /// Whether the busy indicator should spin
    pub fn is_busy(&self) -> bool {
        matches!(self, Status::Processing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Processing phase of the controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Processing,
}
