//! Page shell: background, header, form card and footer

use iced::widget::{column, container, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Shadow, Theme};

use crate::Message;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const GREEN_DARK: Color = Color::from_rgb(0.09, 0.33, 0.18);
pub const GREEN: Color = Color::from_rgb(0.13, 0.55, 0.29);
pub const GREEN_LIGHT: Color = Color::from_rgb(0.94, 0.99, 0.95);
pub const GREEN_BORDER: Color = Color::from_rgb(0.73, 0.90, 0.78);

/// Light green page background
pub fn page_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.91, 0.97, 0.92))),
        ..container::Style::default()
    }
}

/// Title, subtitle and introduction
pub fn view_header() -> Element<'static, Message> {
    column![
        text("Carbon Ripples").size(40).color(GREEN_DARK),
        text("Calculation Suite").size(26).color(GREEN),
        Space::new().height(8),
        text(
            "Please select your industry and enter the relevant data for your operations. \
             Fields will adapt to your selection."
        )
        .size(14)
        .color(GREEN),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// White card holding the form
pub fn view_card(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(32)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            text_color: None,
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                color: GREEN_BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            snap: false,
        })
        .into()
}

/// Privacy notice and version line
pub fn view_footer() -> Element<'static, Message> {
    column![
        text("Your data privacy is important to us. For more information, please see our privacy policy.")
            .size(11)
            .color(GREEN),
        text(format!("Version {} | Sustainable Emissions Tracker", VERSION))
            .size(11)
            .color(GREEN),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Section heading used by every form section
pub fn section_title(title: impl text::IntoFragment<'static>) -> Element<'static, Message> {
    text(title).size(22).color(GREEN_DARK).into()
}
