//! Clipboard watcher actor
//!
//! Owns the controller and the clipboard on a tokio task; the UI reaches it
//! only through [`WatcherHandle`].

use super::messages::{WatcherCommand, WatcherEvent};
use crate::clipboard::ClipboardBackend;
use crate::controller::{Controller, Mode, PollOutcome, Status};
use crate::utils::config::AppSettings;
use crate::utils::error::LineJoinerError;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Background task that owns the [`Controller`] and the clipboard.
///
/// Polls on a timer and serves commands from the UI; every state change goes
/// back out as a [`WatcherEvent`].
pub struct WatcherActor {
    receiver: mpsc::Receiver<WatcherCommand>,
    sender: mpsc::Sender<WatcherEvent>,

    controller: Controller,
    clipboard: Box<dyn ClipboardBackend>,
    poll_interval: Duration,
    idle_backoff: Duration,
}

/// UI-side ends of the watcher channels
pub struct WatcherHandle {
    commands: mpsc::Sender<WatcherCommand>,
    events: mpsc::Receiver<WatcherEvent>,
}

impl WatcherHandle {
    /// Queue a command without waiting (safe to call from the UI thread)
    pub fn send(&self, command: WatcherCommand) -> Result<(), LineJoinerError> {
        self.commands.try_send(command).map_err(|e| match e {
            mpsc::error::TrySendError::Full(cmd) => LineJoinerError::WatcherBusy(format!("{:?}", cmd)),
            mpsc::error::TrySendError::Closed(_) => LineJoinerError::WatcherStopped,
        })
    }

    /// Queue a command, waiting for room in the channel
    pub async fn send_async(&self, command: WatcherCommand) -> Result<(), LineJoinerError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| LineJoinerError::WatcherStopped)
    }

    /// Take the next pending event without blocking
    pub fn try_recv(&mut self) -> Option<WatcherEvent> {
        self.events.try_recv().ok()
    }

    /// Wait for the next event; `None` once the watcher has stopped
    pub async fn recv(&mut self) -> Option<WatcherEvent> {
        self.events.recv().await
    }
}

/// Spawn a watcher on the current tokio runtime
pub fn spawn(
    settings: &AppSettings,
    clipboard: Box<dyn ClipboardBackend>,
) -> (WatcherHandle, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel(settings.event_buffer);
    let (event_tx, event_rx) = mpsc::channel(settings.event_buffer);

    let actor = WatcherActor::new(settings, clipboard, cmd_rx, event_tx);
    let task = tokio::spawn(actor.run());

    (
        WatcherHandle {
            commands: cmd_tx,
            events: event_rx,
        },
        task,
    )
}

impl WatcherActor {
    pub fn new(
        settings: &AppSettings,
        clipboard: Box<dyn ClipboardBackend>,
        receiver: mpsc::Receiver<WatcherCommand>,
        sender: mpsc::Sender<WatcherEvent>,
    ) -> Self {
        Self {
            receiver,
            sender,
            controller: Controller::new(settings.start_mode),
            clipboard,
            poll_interval: settings.poll_interval(),
            idle_backoff: settings.idle_backoff(),
        }
    }

    pub async fn run(mut self) {
        info!(
            "ClipboardWatcher started in {} (poll every {:?})",
            self.controller.mode(),
            self.poll_interval
        );

        // First poll fires immediately
        let timer = sleep(Duration::ZERO);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                cmd = self.receiver.recv() => {
                    match cmd {
                        Some(WatcherCommand::Shutdown) | None => {
                            info!("ClipboardWatcher shutting down");
                            break;
                        }
                        Some(cmd) => self.handle_command(cmd).await,
                    }
                }
                _ = &mut timer => {
                    let delay = self.handle_poll().await;
                    timer.as_mut().reset(Instant::now() + delay);
                }
            }
        }
    }

    async fn handle_command(&mut self, cmd: WatcherCommand) {
        match cmd {
            WatcherCommand::SetMode(mode) => self.change_mode(mode).await,
            WatcherCommand::ToggleMode => {
                let mode = self.controller.mode().toggled();
                self.change_mode(mode).await;
            }
            WatcherCommand::ProcessNow => self.handle_process_now().await,
            WatcherCommand::Shutdown => {}
        }
    }

    async fn change_mode(&mut self, mode: Mode) {
        if self.controller.mode() == mode {
            return;
        }
        self.controller.set_mode(mode);
        info!("Switched to {}", mode);
        emit(&self.sender, WatcherEvent::ModeChanged(mode)).await;
    }

    /// Poll once and return how long to wait before the next poll
    async fn handle_poll(&mut self) -> Duration {
        let mut changes = Vec::new();
        let outcome = self
            .controller
            .poll(&mut *self.clipboard, &mut |s| changes.push(s));
        emit_statuses(&self.sender, changes).await;

        match outcome {
            PollOutcome::Unchanged => self.idle_backoff,
            PollOutcome::Inactive => self.poll_interval,
            PollOutcome::Failed(err) => {
                debug!("Poll skipped: {}", err);
                self.poll_interval
            }
            PollOutcome::Processed(processed) => {
                emit(&self.sender, WatcherEvent::AutoProcessed(processed)).await;
                self.poll_interval
            }
        }
    }

    async fn handle_process_now(&mut self) {
        let mut changes = Vec::new();
        let result = self
            .controller
            .process_now(&mut *self.clipboard, &mut |s| changes.push(s));
        emit_statuses(&self.sender, changes).await;

        match result {
            Ok(processed) => {
                emit(&self.sender, WatcherEvent::ManualCompleted(processed)).await;
            }
            Err(err) => {
                warn!("Manual processing failed: {}", err);
                emit(&self.sender, WatcherEvent::ManualFailed(err)).await;
            }
        }
    }
}

// Free functions so only the `Sync` sender, never the actor, is borrowed across an await.
async fn emit_statuses(sender: &mpsc::Sender<WatcherEvent>, changes: Vec<Status>) {
    for status in changes {
        emit(sender, WatcherEvent::StatusChanged(status)).await;
    }
}

async fn emit(sender: &mpsc::Sender<WatcherEvent>, event: WatcherEvent) {
    if let Err(e) = sender.send(event).await {
        debug!("No listener for watcher event: {:?}", e.0);
    }
}
