//! Industry radio group

use iced::widget::{column, container, radio, row};
use iced::{Element, Length, Padding, Theme};

use ripple_core::Industry;

use crate::ui::shell::{section_title, GREEN_BORDER, GREEN_LIGHT};
use crate::Message;

pub fn view(selected: Option<Industry>) -> Element<'static, Message> {
    let options = Industry::ALL.iter().fold(row![].spacing(12), |options, industry| {
        let choice = radio(
            industry.display_name(),
            *industry,
            selected,
            Message::IndustrySelected,
        )
        .size(16)
        .text_size(13);

        options.push(
            container(choice)
                .padding(Padding::from([10, 12]))
                .width(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(GREEN_LIGHT.into()),
                    border: iced::Border {
                        color: GREEN_BORDER,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    ..container::Style::default()
                }),
        )
    });

    column![section_title("Industry Selection"), options]
        .spacing(12)
        .into()
}
