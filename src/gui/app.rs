//! Main GUI application

use crate::controller::{Mode, Status};
use crate::gui::views::main_view;
use crate::utils::config::AppSettings;
use crate::watcher::{WatcherCommand, WatcherEvent, WatcherHandle};
use iced::{Application, Command, Element, Subscription, Theme};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, warn};

/// Everything the GUI needs at startup
pub struct AppFlags {
    pub settings: AppSettings,
    pub watcher: WatcherHandle,
    /// Runtime the watcher task lives on
    pub runtime: Arc<Runtime>,
}

/// Main application state
pub struct LineJoinerApp {
    watcher: WatcherHandle,
    // Keep a long-lived runtime so the watcher task stays alive
    _runtime: Arc<Runtime>,

    // UI State
    mode: Mode,
    status: Status,
    spinner_index: usize,
    input_text: String,
    output_text: String,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMode,
    PasteAndCopy,

    // System
    Tick, // Drains watcher events and animates the spinner
}

impl LineJoinerApp {
    fn send(&self, command: WatcherCommand) -> bool {
        match self.watcher.send(command) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to reach clipboard watcher: {}", e);
                false
            }
        }
    }

    fn apply_event(&mut self, event: WatcherEvent) {
        debug!("GUI received watcher event: {:?}", event);

        match event {
            WatcherEvent::StatusChanged(status) => {
                if status.is_busy() && !self.status.is_busy() {
                    self.spinner_index = 0;
                }
                self.status = status;
            }
            WatcherEvent::ModeChanged(mode) => {
                self.mode = mode;
            }
            WatcherEvent::AutoProcessed(_) => {}
            WatcherEvent::ManualCompleted(processed) => {
                self.input_text = processed.input;
                self.output_text = processed.output;
            }
            WatcherEvent::ManualFailed(err) => {
                // Blocks the UI thread until dismissed
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Error")
                    .set_description(err.user_message())
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            }
        }
    }
}

impl Application for LineJoinerApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let app = Self {
            watcher: flags.watcher,
            _runtime: flags.runtime,
            mode: flags.settings.start_mode,
            status: Status::Waiting,
            spinner_index: 0,
            input_text: String::new(),
            output_text: String::new(),
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Line Joiner")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ToggleMode => {
                // The button only changes once the watcher has the command
                let mode = self.mode.toggled();
                if self.send(WatcherCommand::SetMode(mode)) {
                    self.mode = mode;
                }
            }

            Message::PasteAndCopy => {
                self.send(WatcherCommand::ProcessNow);
            }

            Message::Tick => {
                while let Some(event) = self.watcher.try_recv() {
                    self.apply_event(event);
                }
                if self.status.is_busy() {
                    self.spinner_index = self.spinner_index.wrapping_add(1);
                }
            }
        }

        Command::none()
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(
            self.mode,
            self.status,
            self.spinner_index,
            &self.input_text,
            &self.output_text,
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(Duration::from_millis(100)).map(|_| Message::Tick)
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

impl Drop for LineJoinerApp {
    fn drop(&mut self) {
        let _ = self.watcher.send(WatcherCommand::Shutdown);
    }
}
