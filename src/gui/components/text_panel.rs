//! Read-only text panel used for the manual input and output

use crate::gui::app::Message;
use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length};

pub fn text_panel(title: &str, content: &str) -> Element<'static, Message> {
    container(
        column![
            text(title).size(12),
            scrollable(text(content).size(14)).height(Length::Fill),
        ]
        .spacing(6),
    )
    .padding(10)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Box)
    .into()
}
