//! Status row: busy spinner plus status label

use crate::controller::Status;
use crate::gui::app::Message;
use iced::widget::{row, text};
use iced::{Alignment, Element};

/// Braille spinner, one frame per UI tick while busy
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(status: Status, spinner_index: usize) -> &'static str {
    if status.is_busy() {
        SPINNER_FRAMES[spinner_index % SPINNER_FRAMES.len()]
    } else {
        ""
    }
}

pub fn status_bar(status: Status, spinner_index: usize) -> Element<'static, Message> {
    row![
        text(spinner_frame(status, spinner_index)).size(18),
        text(status.label()).size(18)
    ]
    .spacing(8)
    .align_items(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_hidden_unless_busy() {
        assert_eq!(spinner_frame(Status::Waiting, 3), "");
        assert_eq!(spinner_frame(Status::Done, 3), "");
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(Status::Processing, 0), "⠋");
        assert_eq!(
            spinner_frame(Status::Processing, SPINNER_FRAMES.len() + 1),
            "⠙"
        );
    }
}
