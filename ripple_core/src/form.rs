//! # Form Data
//!
//! The values a user has entered, stored per section:
//!
//! ```text
//! FormState
//! ├── common: CommonData (always present)
//! └── industry: Option<IndustryData>
//!     ├── Apparel(ApparelData)
//!     ├── Solar(SolarData)
//!     └── Plastics(PlasticsData)
//! ```
//!
//! Inputs hold the raw string the user typed, numeric fields included. A
//! value is `Some` once the field has been edited, even if it was cleared
//! back to an empty string.
//!
//! ## Example
//!
//! ```rust
//! use ripple_core::fields::CommonInput;
//! use ripple_core::form::{FieldEdit, FormState};
//!
//! let mut form = FormState::default();
//! form.apply(FieldEdit::Common(CommonInput::Electricity, "1200".into()), None).unwrap();
//! assert_eq!(form.record().get("electricity").map(String::as_str), Some("1200"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::choices::{parse_wire, DisposalMethod, FiberType, MassUnit, ResinOrigin, ResinType, TravelMode};
use crate::errors::{FormError, FormResult};
use crate::fields::{ApparelInput, CommonInput, Field, PlasticsInput, SolarInput};
use crate::industry::Industry;

// ============================================================================
// Section records
// ============================================================================

/// Values of the common data section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_combustion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_disposal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_commuting_distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_employees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_materials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_materials_quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_materials_unit: Option<MassUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposal_method: Option<DisposalMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predominant_travel_mode: Option<TravelMode>,
}

impl CommonData {
    pub fn input(&self, input: CommonInput) -> Option<&str> {
        let value = match input {
            CommonInput::Electricity => &self.electricity,
            CommonInput::FuelCombustion => &self.fuel_combustion,
            CommonInput::WasteDisposal => &self.waste_disposal,
            CommonInput::EmployeeCommutingDistance => &self.employee_commuting_distance,
            CommonInput::NumberOfEmployees => &self.number_of_employees,
            CommonInput::RawMaterials => &self.raw_materials,
            CommonInput::RawMaterialsQuantity => &self.raw_materials_quantity,
        };
        value.as_deref()
    }

    fn input_mut(&mut self, input: CommonInput) -> &mut Option<String> {
        match input {
            CommonInput::Electricity => &mut self.electricity,
            CommonInput::FuelCombustion => &mut self.fuel_combustion,
            CommonInput::WasteDisposal => &mut self.waste_disposal,
            CommonInput::EmployeeCommutingDistance => &mut self.employee_commuting_distance,
            CommonInput::NumberOfEmployees => &mut self.number_of_employees,
            CommonInput::RawMaterials => &mut self.raw_materials,
            CommonInput::RawMaterialsQuantity => &mut self.raw_materials_quantity,
        }
    }

    pub fn is_empty(&self) -> bool {
        CommonInput::ALL.iter().all(|i| self.input(*i).is_none())
            && self.raw_materials_unit.is_none()
            && self.disposal_method.is_none()
            && self.predominant_travel_mode.is_none()
    }
}

/// Values of the Apparel section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApparelData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_inputs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_usage_dyeing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dye_chemicals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dye_bath_temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sewing_machine_electricity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_cuts_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_type: Option<FiberType>,
}

impl ApparelData {
    pub fn input(&self, input: ApparelInput) -> Option<&str> {
        let value = match input {
            ApparelInput::FiberInputs => &self.fiber_inputs,
            ApparelInput::WaterUsageDyeing => &self.water_usage_dyeing,
            ApparelInput::DyeChemicals => &self.dye_chemicals,
            ApparelInput::DyeBathTemperature => &self.dye_bath_temperature,
            ApparelInput::SewingMachineElectricity => &self.sewing_machine_electricity,
            ApparelInput::OffCutsPercentage => &self.off_cuts_percentage,
        };
        value.as_deref()
    }

    fn input_mut(&mut self, input: ApparelInput) -> &mut Option<String> {
        match input {
            ApparelInput::FiberInputs => &mut self.fiber_inputs,
            ApparelInput::WaterUsageDyeing => &mut self.water_usage_dyeing,
            ApparelInput::DyeChemicals => &mut self.dye_chemicals,
            ApparelInput::DyeBathTemperature => &mut self.dye_bath_temperature,
            ApparelInput::SewingMachineElectricity => &mut self.sewing_machine_electricity,
            ApparelInput::OffCutsPercentage => &mut self.off_cuts_percentage,
        }
    }

    pub fn is_empty(&self) -> bool {
        ApparelInput::ALL.iter().all(|i| self.input(*i).is_none()) && self.fiber_type.is_none()
    }
}

/// Values of the Solar Panel Manufacturing section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolarData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silicon_feedstock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnace_electricity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wafer_slicing_losses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_etchants: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanroom_energy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aluminum_frame_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encapsulant_materials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lamination_energy: Option<String>,
}

impl SolarData {
    pub fn input(&self, input: SolarInput) -> Option<&str> {
        let value = match input {
            SolarInput::SiliconFeedstock => &self.silicon_feedstock,
            SolarInput::FurnaceElectricity => &self.furnace_electricity,
            SolarInput::WaferSlicingLosses => &self.wafer_slicing_losses,
            SolarInput::ChemicalEtchants => &self.chemical_etchants,
            SolarInput::CleanroomEnergy => &self.cleanroom_energy,
            SolarInput::GlassUsage => &self.glass_usage,
            SolarInput::AluminumFrameUsage => &self.aluminum_frame_usage,
            SolarInput::EncapsulantMaterials => &self.encapsulant_materials,
            SolarInput::LaminationEnergy => &self.lamination_energy,
        };
        value.as_deref()
    }

    fn input_mut(&mut self, input: SolarInput) -> &mut Option<String> {
        match input {
            SolarInput::SiliconFeedstock => &mut self.silicon_feedstock,
            SolarInput::FurnaceElectricity => &mut self.furnace_electricity,
            SolarInput::WaferSlicingLosses => &mut self.wafer_slicing_losses,
            SolarInput::ChemicalEtchants => &mut self.chemical_etchants,
            SolarInput::CleanroomEnergy => &mut self.cleanroom_energy,
            SolarInput::GlassUsage => &mut self.glass_usage,
            SolarInput::AluminumFrameUsage => &mut self.aluminum_frame_usage,
            SolarInput::EncapsulantMaterials => &mut self.encapsulant_materials,
            SolarInput::LaminationEnergy => &mut self.lamination_energy,
        }
    }

    pub fn is_empty(&self) -> bool {
        SolarInput::ALL.iter().all(|i| self.input(*i).is_none())
    }
}

/// Values of the Plastics section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlasticsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polymer_feedstocks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injection_molding_energy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extrusion_energy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drying_pelletizing_energy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additives: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycled_scrap_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resin_type: Option<ResinType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resin_origin: Option<ResinOrigin>,
}

impl PlasticsData {
    pub fn input(&self, input: PlasticsInput) -> Option<&str> {
        let value = match input {
            PlasticsInput::PolymerFeedstocks => &self.polymer_feedstocks,
            PlasticsInput::InjectionMoldingEnergy => &self.injection_molding_energy,
            PlasticsInput::ExtrusionEnergy => &self.extrusion_energy,
            PlasticsInput::DryingPelletizingEnergy => &self.drying_pelletizing_energy,
            PlasticsInput::Additives => &self.additives,
            PlasticsInput::RecycledScrapPercentage => &self.recycled_scrap_percentage,
        };
        value.as_deref()
    }

    fn input_mut(&mut self, input: PlasticsInput) -> &mut Option<String> {
        match input {
            PlasticsInput::PolymerFeedstocks => &mut self.polymer_feedstocks,
            PlasticsInput::InjectionMoldingEnergy => &mut self.injection_molding_energy,
            PlasticsInput::ExtrusionEnergy => &mut self.extrusion_energy,
            PlasticsInput::DryingPelletizingEnergy => &mut self.drying_pelletizing_energy,
            PlasticsInput::Additives => &mut self.additives,
            PlasticsInput::RecycledScrapPercentage => &mut self.recycled_scrap_percentage,
        }
    }

    pub fn is_empty(&self) -> bool {
        PlasticsInput::ALL.iter().all(|i| self.input(*i).is_none())
            && self.resin_type.is_none()
            && self.resin_origin.is_none()
    }
}

/// Values of whichever industry section is active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "industry")]
pub enum IndustryData {
    Apparel(ApparelData),
    #[serde(rename = "Solar Panel Manufacturing")]
    Solar(SolarData),
    Plastics(PlasticsData),
}

impl IndustryData {
    /// Empty record for an industry
    pub fn new(industry: Industry) -> Self {
        match industry {
            Industry::Apparel => IndustryData::Apparel(ApparelData::default()),
            Industry::SolarPanelManufacturing => IndustryData::Solar(SolarData::default()),
            Industry::Plastics => IndustryData::Plastics(PlasticsData::default()),
        }
    }

    pub fn industry(&self) -> Industry {
        match self {
            IndustryData::Apparel(_) => Industry::Apparel,
            IndustryData::Solar(_) => Industry::SolarPanelManufacturing,
            IndustryData::Plastics(_) => Industry::Plastics,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            IndustryData::Apparel(data) => data.is_empty(),
            IndustryData::Solar(data) => data.is_empty(),
            IndustryData::Plastics(data) => data.is_empty(),
        }
    }
}

// ============================================================================
// Edits
// ============================================================================

/// A single user edit, typed by the field it targets.
///
/// Inputs carry the raw text; choice fields carry their option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Common(CommonInput, String),
    RawMaterialsUnit(MassUnit),
    DisposalMethod(DisposalMethod),
    PredominantTravelMode(TravelMode),
    Apparel(ApparelInput, String),
    FiberType(FiberType),
    Solar(SolarInput, String),
    Plastics(PlasticsInput, String),
    ResinType(ResinType),
    ResinOrigin(ResinOrigin),
}

impl FieldEdit {
    /// The field this edit writes
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Common(input, _) => Field::Common(*input),
            FieldEdit::RawMaterialsUnit(_) => Field::RawMaterialsUnit,
            FieldEdit::DisposalMethod(_) => Field::DisposalMethod,
            FieldEdit::PredominantTravelMode(_) => Field::PredominantTravelMode,
            FieldEdit::Apparel(input, _) => Field::Apparel(*input),
            FieldEdit::FiberType(_) => Field::FiberType,
            FieldEdit::Solar(input, _) => Field::Solar(*input),
            FieldEdit::Plastics(input, _) => Field::Plastics(*input),
            FieldEdit::ResinType(_) => Field::ResinType,
            FieldEdit::ResinOrigin(_) => Field::ResinOrigin,
        }
    }

    /// Text edit for a free-entry field; `None` for choice fields
    pub fn input(field: Field, raw: impl Into<String>) -> Option<FieldEdit> {
        let raw = raw.into();
        match field {
            Field::Common(input) => Some(FieldEdit::Common(input, raw)),
            Field::Apparel(input) => Some(FieldEdit::Apparel(input, raw)),
            Field::Solar(input) => Some(FieldEdit::Solar(input, raw)),
            Field::Plastics(input) => Some(FieldEdit::Plastics(input, raw)),
            _ => None,
        }
    }

    /// Build an edit from a field and a textual value.
    ///
    /// Inputs accept any text; choice fields accept one of their wire values.
    pub fn parse(field: Field, value: &str) -> FormResult<FieldEdit> {
        let invalid = || FormError::invalid_choice(field.key(), value, &field.options());
        match field {
            Field::RawMaterialsUnit => parse_wire(&MassUnit::ALL, MassUnit::wire, value)
                .map(FieldEdit::RawMaterialsUnit)
                .ok_or_else(invalid),
            Field::DisposalMethod => parse_wire(&DisposalMethod::ALL, DisposalMethod::wire, value)
                .map(FieldEdit::DisposalMethod)
                .ok_or_else(invalid),
            Field::PredominantTravelMode => parse_wire(&TravelMode::ALL, TravelMode::wire, value)
                .map(FieldEdit::PredominantTravelMode)
                .ok_or_else(invalid),
            Field::FiberType => parse_wire(&FiberType::ALL, FiberType::wire, value)
                .map(FieldEdit::FiberType)
                .ok_or_else(invalid),
            Field::ResinType => parse_wire(&ResinType::ALL, ResinType::wire, value)
                .map(FieldEdit::ResinType)
                .ok_or_else(invalid),
            Field::ResinOrigin => parse_wire(&ResinOrigin::ALL, ResinOrigin::wire, value)
                .map(FieldEdit::ResinOrigin)
                .ok_or_else(invalid),
            _ => FieldEdit::input(field, value).ok_or_else(invalid),
        }
    }
}

// ============================================================================
// FormState
// ============================================================================

/// All values entered in the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub common: CommonData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<IndustryData>,
}

impl FormState {
    /// True when no field has been edited
    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.industry.as_ref().map_or(true, |data| data.is_empty())
    }

    /// Drop every value
    pub fn clear(&mut self) {
        *self = FormState::default();
    }

    /// Write an edit.
    ///
    /// `selected` is the industry currently chosen on the form. Edits to an
    /// industry section are refused unless that industry is selected.
    pub fn apply(&mut self, edit: FieldEdit, selected: Option<Industry>) -> FormResult<()> {
        let field = edit.field();
        if let Some(field_industry) = field.industry() {
            match selected {
                None => return Err(FormError::no_industry_selected(field.key())),
                Some(industry) if industry != field_industry => {
                    return Err(FormError::industry_mismatch(
                        field.key(),
                        field_industry.display_name(),
                        industry.display_name(),
                    ));
                }
                Some(_) => {}
            }
        }

        match edit {
            FieldEdit::Common(input, raw) => *self.common.input_mut(input) = Some(raw),
            FieldEdit::RawMaterialsUnit(unit) => self.common.raw_materials_unit = Some(unit),
            FieldEdit::DisposalMethod(method) => self.common.disposal_method = Some(method),
            FieldEdit::PredominantTravelMode(mode) => {
                self.common.predominant_travel_mode = Some(mode)
            }
            FieldEdit::Apparel(input, raw) => {
                self.with_apparel(|data| *data.input_mut(input) = Some(raw))
            }
            FieldEdit::FiberType(fiber) => self.with_apparel(|data| data.fiber_type = Some(fiber)),
            FieldEdit::Solar(input, raw) => self.with_solar(|data| *data.input_mut(input) = Some(raw)),
            FieldEdit::Plastics(input, raw) => {
                self.with_plastics(|data| *data.input_mut(input) = Some(raw))
            }
            FieldEdit::ResinType(resin) => self.with_plastics(|data| data.resin_type = Some(resin)),
            FieldEdit::ResinOrigin(origin) => {
                self.with_plastics(|data| data.resin_origin = Some(origin))
            }
        }
        Ok(())
    }

    pub fn apparel(&self) -> Option<&ApparelData> {
        match &self.industry {
            Some(IndustryData::Apparel(data)) => Some(data),
            _ => None,
        }
    }

    pub fn solar(&self) -> Option<&SolarData> {
        match &self.industry {
            Some(IndustryData::Solar(data)) => Some(data),
            _ => None,
        }
    }

    pub fn plastics(&self) -> Option<&PlasticsData> {
        match &self.industry {
            Some(IndustryData::Plastics(data)) => Some(data),
            _ => None,
        }
    }

    fn with_apparel(&mut self, write: impl FnOnce(&mut ApparelData)) {
        let mut data = match self.industry.take() {
            Some(IndustryData::Apparel(data)) => data,
            _ => ApparelData::default(),
        };
        write(&mut data);
        self.industry = Some(IndustryData::Apparel(data));
    }

    fn with_solar(&mut self, write: impl FnOnce(&mut SolarData)) {
        let mut data = match self.industry.take() {
            Some(IndustryData::Solar(data)) => data,
            _ => SolarData::default(),
        };
        write(&mut data);
        self.industry = Some(IndustryData::Solar(data));
    }

    fn with_plastics(&mut self, write: impl FnOnce(&mut PlasticsData)) {
        let mut data = match self.industry.take() {
            Some(IndustryData::Plastics(data)) => data,
            _ => PlasticsData::default(),
        };
        write(&mut data);
        self.industry = Some(IndustryData::Plastics(data));
    }

    /// Current value of a field as text (choice fields give their wire value)
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Common(input) => self.common.input(input),
            Field::RawMaterialsUnit => self.common.raw_materials_unit.map(|o| o.wire()),
            Field::DisposalMethod => self.common.disposal_method.map(|o| o.wire()),
            Field::PredominantTravelMode => self.common.predominant_travel_mode.map(|o| o.wire()),
            Field::Apparel(input) => self.apparel().and_then(|d| d.input(input)),
            Field::FiberType => self.apparel().and_then(|d| d.fiber_type).map(|o| o.wire()),
            Field::Solar(input) => self.solar().and_then(|d| d.input(input)),
            Field::Plastics(input) => self.plastics().and_then(|d| d.input(input)),
            Field::ResinType => self.plastics().and_then(|d| d.resin_type).map(|o| o.wire()),
            Field::ResinOrigin => self.plastics().and_then(|d| d.resin_origin).map(|o| o.wire()),
        }
    }

    /// Flat key/value view of every entered field
    pub fn record(&self) -> BTreeMap<&'static str, String> {
        self.record_of(Field::all())
    }

    /// Flat key/value view restricted to `fields`
    pub fn record_of(&self, fields: impl IntoIterator<Item = Field>) -> BTreeMap<&'static str, String> {
        fields
            .into_iter()
            .filter_map(|field| self.value(field).map(|v| (field.key(), v.to_string())))
            .collect()
    }

    /// Check the form before saving.
    ///
    /// No rules are enforced yet; every form is accepted.
    pub fn validate(&self) -> bool {
        true
    }
}
