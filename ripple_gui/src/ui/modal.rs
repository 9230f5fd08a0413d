//! Confirmation dialog
//!
//! Drawn over the form while the controller holds an open prompt. Clicking
//! the backdrop counts as "Cancel".

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use ripple_core::Confirmation;

use crate::Message;

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::ConfirmDeclined)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

pub fn view_confirmation(confirmation: Confirmation) -> Element<'static, Message> {
    let title = match confirmation {
        Confirmation::ChangeIndustry { to } => format!("Switch to {}?", to),
        Confirmation::Reset => "Reset Form?".to_string(),
    };

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(11))
            .on_press(Message::ConfirmDeclined)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        button(text("OK").size(11))
            .on_press(Message::ConfirmAccepted)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let content = column![
        text(title).size(18),
        Space::new().height(12),
        text(confirmation.prompt()).size(12),
        Space::new().height(20),
        buttons,
    ]
    .width(Length::Fixed(400.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
