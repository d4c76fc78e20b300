//! The controller context object
//!
//! `Controller` owns Mode, LastProcessed and Status. It is driven by the
//! watcher task (periodic polls) and by manual requests, and reports every
//! status change through a callback so the caller can forward it to the UI.

use super::state::{Mode, Phase, Status};
use crate::clipboard::{ClipboardBackend, ClipboardError};
use crate::transform::join_lines;
use tracing::debug;

/// A completed read-transform-write cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub input: String,
    pub output: String,
}

/// Result of one background poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Manual mode, the clipboard was not touched
    Inactive,
    /// Clipboard text equals LastProcessed
    Unchanged,
    Processed(Processed),
    Failed(ClipboardError),
}

#[derive(Debug, Default)]
pub struct Controller {
    mode: Mode,
    last_processed: String,
    status: Status,
    phase: Phase,
}

impl Controller {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_processed(&self) -> &str {
        &self.last_processed
    }

    /// Switch modes. LastProcessed and Status are left alone.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// One background poll.
    ///
    /// In Automatic mode, new clipboard text (anything different from
    /// LastProcessed) is joined and written back. Read or write failures put
    /// the status back to Waiting.
    pub fn poll(
        &mut self,
        clipboard: &mut dyn ClipboardBackend,
        on_status: &mut dyn FnMut(Status),
    ) -> PollOutcome {
        if self.mode == Mode::Manual {
            return PollOutcome::Inactive;
        }

        let text = match clipboard.read_text() {
            Ok(text) => text,
            Err(err) => {
                debug!("Clipboard read failed: {}", err);
                self.set_status(Status::Waiting, on_status);
                return PollOutcome::Failed(err);
            }
        };

        if text == self.last_processed {
            return PollOutcome::Unchanged;
        }

        match self.process(text, clipboard, on_status) {
            Ok(processed) => PollOutcome::Processed(processed),
            Err(err) => PollOutcome::Failed(err),
        }
    }

    /// The manual paste-process-copy action.
    ///
    /// Runs regardless of mode and of LastProcessed. On failure nothing is
    /// written and LastProcessed is kept.
    pub fn process_now(
        &mut self,
        clipboard: &mut dyn ClipboardBackend,
        on_status: &mut dyn FnMut(Status),
    ) -> Result<Processed, ClipboardError> {
        let text = clipboard.read_text()?;
        self.process(text, clipboard, on_status)
    }

    fn process(
        &mut self,
        text: String,
        clipboard: &mut dyn ClipboardBackend,
        on_status: &mut dyn FnMut(Status),
    ) -> Result<Processed, ClipboardError> {
        self.phase = Phase::Processing;
        self.set_status(Status::Processing, on_status);

        let joined = join_lines(&text);
        let written = clipboard.write_text(&joined);
        self.phase = Phase::Idle;

        if let Err(err) = written {
            debug!("Clipboard write failed: {}", err);
            self.set_status(Status::Waiting, on_status);
            return Err(err);
        }

        debug!(
            "Joined {} chars into {} chars",
            text.chars().count(),
            joined.chars().count()
        );
        self.last_processed = joined.clone();
        self.set_status(Status::Done, on_status);

        Ok(Processed {
            input: text,
            output: joined,
        })
    }

    fn set_status(&mut self, status: Status, on_status: &mut dyn FnMut(Status)) {
        if self.status != status {
            self.status = status;
            on_status(status);
        }
    }
}
