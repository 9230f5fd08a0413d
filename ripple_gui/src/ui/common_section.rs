//! Common Data section
//!
//! Shows the fields every industry reports. Fuel combustion follows
//! Scope 1 and the raw materials group follows Scope 3; both come and go
//! with the layout.

use iced::widget::{column, row, text};
use iced::{Alignment, Element, Length};

use ripple_core::choices::{DisposalMethod, MassUnit, TravelMode};
use ripple_core::fields::{RAW_MATERIALS_LABEL, RAW_MATERIALS_TOOLTIP};
use ripple_core::form::FormState;
use ripple_core::{Field, FieldEdit, FormLayout};

use crate::ui::field;
use crate::ui::shell::{section_title, GREEN_DARK};
use crate::Message;

pub fn view<'a>(layout: &FormLayout, data: &'a FormState) -> Element<'a, Message> {
    let mut cells = Vec::new();
    let mut raw_materials_shown = false;

    for &f in &layout.common {
        if f.is_raw_materials() {
            if !raw_materials_shown {
                cells.push(view_raw_materials(layout, data));
                raw_materials_shown = true;
            }
            continue;
        }
        cells.push(view_field(f, data));
    }

    column![section_title("Common Data"), field::grid(cells)]
        .spacing(16)
        .into()
}

fn view_field(f: Field, data: &FormState) -> Element<'_, Message> {
    match f {
        Field::DisposalMethod => field::labeled_choice(
            f,
            &DisposalMethod::ALL,
            data.common.disposal_method,
            |method| Message::ChoiceSelected(FieldEdit::DisposalMethod(method)),
        ),
        Field::PredominantTravelMode => field::labeled_choice(
            f,
            &TravelMode::ALL,
            data.common.predominant_travel_mode,
            |mode| Message::ChoiceSelected(FieldEdit::PredominantTravelMode(mode)),
        ),
        _ => field::labeled_input(f, data),
    }
}

/// Material name, quantity and unit on one line under a shared label
fn view_raw_materials<'a>(layout: &FormLayout, data: &'a FormState) -> Element<'a, Message> {
    let mut controls = row![].spacing(8).align_y(Alignment::Center);

    for f in layout.raw_materials() {
        let control = match f {
            Field::RawMaterialsUnit => field::choice(
                f,
                &MassUnit::ALL,
                data.common.raw_materials_unit,
                |unit| Message::ChoiceSelected(FieldEdit::RawMaterialsUnit(unit)),
            ),
            _ => field::input(f, data),
        };
        controls = controls.push(iced::widget::container(control).width(Length::FillPortion(1)));
    }

    column![
        row![
            text(RAW_MATERIALS_LABEL).size(12).color(GREEN_DARK),
            field::info_tooltip(RAW_MATERIALS_TOOLTIP),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
        controls,
    ]
    .spacing(4)
    .into()
}
