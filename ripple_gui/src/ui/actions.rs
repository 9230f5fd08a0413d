//! Form buttons (Reset / Save)

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

pub fn view(error: Option<&str>) -> Element<'_, Message> {
    let status: Element<'_, Message> = match error {
        Some(message) => text(message).size(11).color([0.7, 0.1, 0.1]).into(),
        None => Space::new().into(),
    };

    row![
        status,
        Space::new().width(Length::Fill),
        button(text("↻ Reset").size(12))
            .on_press(Message::Reset)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        button(text("Save").size(12))
            .on_press(Message::Save)
            .padding(Padding::from([6, 16]))
            .style(button::success),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
