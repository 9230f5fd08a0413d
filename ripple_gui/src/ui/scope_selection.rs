//! Scope checkboxes and the empty-scope warning

use iced::widget::{checkbox, column, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Theme};

use ripple_core::layout::EMPTY_SCOPE_WARNING;
use ripple_core::{Scope, ScopeSet};

use crate::ui::field::info_tooltip;
use crate::ui::shell::{section_title, GREEN_BORDER, GREEN_LIGHT};
use crate::Message;

pub fn view(scopes: &ScopeSet) -> Element<'static, Message> {
    let mut boxes = row![].spacing(12);

    for scope in Scope::ALL {
        let toggle = checkbox(scopes.contains(scope))
            .label(scope.display_name())
            .on_toggle(move |_| Message::ScopeToggled(scope))
            .text_size(13);

        boxes = boxes.push(
            container(
                row![toggle, info_tooltip(scope.description())]
                    .spacing(8)
                    .align_y(Alignment::Center),
            )
            .padding(Padding::from([10, 12]))
            .width(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(GREEN_LIGHT.into()),
                border: Border {
                    color: GREEN_BORDER,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..container::Style::default()
            }),
        );
    }

    column![section_title("Scope Selection"), boxes]
        .spacing(12)
        .into()
}

/// Yellow banner shown while no scope is selected
pub fn view_warning() -> Element<'static, Message> {
    let amber = Color::from_rgb(0.52, 0.38, 0.02);

    container(
        column![
            text("⚠ Warning").size(13).color(amber),
            text(EMPTY_SCOPE_WARNING).size(12).color(amber),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color::from_rgb(1.0, 0.97, 0.80))),
        border: Border {
            color: Color::from_rgb(0.98, 0.80, 0.25),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    })
    .into()
}
