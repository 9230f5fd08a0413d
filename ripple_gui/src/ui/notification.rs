//! Toast in the top-right corner

use iced::widget::{button, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};

use ripple_core::notification::{Notification, NotificationKind};

use crate::Message;

pub fn view(notification: &Notification) -> Element<'_, Message> {
    let (background, accent) = match notification.kind {
        NotificationKind::Success => (Color::from_rgb(0.86, 0.98, 0.89), Color::from_rgb(0.13, 0.55, 0.29)),
        NotificationKind::Error => (Color::from_rgb(1.0, 0.89, 0.89), Color::from_rgb(0.80, 0.15, 0.15)),
    };

    let content = row![
        text(&notification.message).size(12).color(accent),
        button(text("×").size(12).color(accent))
            .on_press(Message::NotificationClosed(notification.ticket))
            .padding(Padding::from([0, 4]))
            .style(button::text),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let toast = container(content)
        .padding(Padding::from([12, 16]))
        .style(move |_theme: &Theme| container::Style {
            text_color: Some(accent),
            background: Some(Background::Color(background)),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            snap: false,
        });

    container(toast)
        .width(Length::Fill)
        .padding(16)
        .align_x(iced::alignment::Horizontal::Right)
        .into()
}
