//! Main view: mode toggle, status, and the manual panels

use crate::controller::{Mode, Status};
use crate::gui::app::Message;
use crate::gui::components::{status_bar, text_panel};
use iced::widget::{button, column, container, text};
use iced::{Element, Length};

/// Create the main view
pub fn main_view(
    mode: Mode,
    status: Status,
    spinner_index: usize,
    input_text: &str,
    output_text: &str,
) -> Element<'static, Message> {
    let mode_button = button(text(mode.as_str()).size(16))
        .width(Length::Fill)
        .padding(12)
        .style(match mode {
            Mode::Automatic => iced::theme::Button::Primary,
            Mode::Manual => iced::theme::Button::Secondary,
        })
        .on_press(Message::ToggleMode);

    let mut content = column![mode_button, status_bar(status, spinner_index)]
        .spacing(12)
        .padding(16);

    // Manual panels only exist in manual mode
    if mode == Mode::Manual {
        content = content
            .push(text_panel("Clipboard input", input_text))
            .push(
                button(text("📋 Paste & Copy").size(16))
                    .width(Length::Fill)
                    .padding(12)
                    .on_press(Message::PasteAndCopy),
            )
            .push(text_panel("Joined output", output_text));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
