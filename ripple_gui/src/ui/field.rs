//! Labeled form controls
//!
//! Every control takes its label, unit, tooltip and placeholder from the
//! field catalog so the GUI never hard-codes field text.

use iced::widget::{column, container, pick_list, row, text, text_input, tooltip, Space};
use iced::{Alignment, Element, Length, Padding};

use ripple_core::form::FormState;
use ripple_core::Field;

use crate::ui::shell::{GREEN, GREEN_DARK};
use crate::Message;

/// Small "ⓘ" marker that shows `tip` on hover
pub fn info_tooltip(tip: &'static str) -> Element<'static, Message> {
    tooltip(
        text("ⓘ").size(13).color(GREEN),
        container(text(tip).size(11))
            .padding(Padding::from([6, 10]))
            .max_width(320.0)
            .style(container::bordered_box),
        tooltip::Position::Top,
    )
    .into()
}

/// Label line: text, unit suffix and tooltip marker
pub fn label(field: Field) -> Element<'static, Message> {
    let caption = match field.unit() {
        Some(unit) => format!("{} ({})", field.label(), unit),
        None => field.label().to_string(),
    };

    let mut line = row![text(caption).size(12).color(GREEN_DARK)]
        .spacing(6)
        .align_y(Alignment::Center);
    if let Some(tip) = field.tooltip() {
        line = line.push(info_tooltip(tip));
    }
    line.into()
}

/// Free-entry box bound to `field`
pub fn input<'a>(field: Field, data: &'a FormState) -> Element<'a, Message> {
    text_input(field.label(), data.value(field).unwrap_or_default())
        .on_input(move |raw| Message::InputChanged(field, raw))
        .padding(6)
        .size(12)
        .width(Length::Fill)
        .into()
}

/// Label above a free-entry box
pub fn labeled_input<'a>(field: Field, data: &'a FormState) -> Element<'a, Message> {
    column![label(field), input(field, data)].spacing(4).into()
}

/// Dropdown over a choice enum
pub fn choice<'a, T>(
    field: Field,
    options: &'static [T],
    selected: Option<T>,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
{
    pick_list(options, selected, on_select)
        .placeholder(field.placeholder())
        .text_size(12)
        .padding(Padding::from([6, 8]))
        .width(Length::Fill)
        .into()
}

/// Label above a dropdown
pub fn labeled_choice<'a, T>(
    field: Field,
    options: &'static [T],
    selected: Option<T>,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
{
    column![
        label(field),
        choice(field, options, selected, on_select)
    ]
    .spacing(4)
    .into()
}

/// Lay controls out two per row
pub fn grid<'a>(cells: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut rows = column![].spacing(16);
    let mut cells = cells.into_iter();

    while let Some(first) = cells.next() {
        let second = cells
            .next()
            .unwrap_or_else(|| Space::new().width(Length::Fill).into());
        rows = rows.push(
            row![
                container(first).width(Length::FillPortion(1)),
                container(second).width(Length::FillPortion(1)),
            ]
            .spacing(16),
        );
    }
    rows.into()
}
