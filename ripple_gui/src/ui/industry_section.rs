//! "<Industry> Specific Data" section

use iced::widget::column;
use iced::Element;

use ripple_core::choices::{FiberType, ResinOrigin, ResinType};
use ripple_core::form::FormState;
use ripple_core::{Field, FieldEdit, FormLayout};

use crate::ui::field;
use crate::ui::shell::section_title;
use crate::Message;

/// Render the selected industry's fields, or nothing when no industry is set
pub fn view<'a>(layout: &FormLayout, data: &'a FormState) -> Option<Element<'a, Message>> {
    let title = layout.industry_title.clone()?;

    let cells = layout
        .industry
        .iter()
        .map(|&f| view_field(f, data))
        .collect();

    Some(
        column![section_title(title), field::grid(cells)]
            .spacing(16)
            .into(),
    )
}

fn view_field(f: Field, data: &FormState) -> Element<'_, Message> {
    match f {
        Field::FiberType => field::labeled_choice(
            f,
            &FiberType::ALL,
            data.apparel().and_then(|d| d.fiber_type),
            |fiber| Message::ChoiceSelected(FieldEdit::FiberType(fiber)),
        ),
        Field::ResinType => field::labeled_choice(
            f,
            &ResinType::ALL,
            data.plastics().and_then(|d| d.resin_type),
            |resin| Message::ChoiceSelected(FieldEdit::ResinType(resin)),
        ),
        Field::ResinOrigin => field::labeled_choice(
            f,
            &ResinOrigin::ALL,
            data.plastics().and_then(|d| d.resin_origin),
            |origin| Message::ChoiceSelected(FieldEdit::ResinOrigin(origin)),
        ),
        _ => field::labeled_input(f, data),
    }
}
