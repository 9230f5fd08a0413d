//! # Field Catalog
//!
//! Typed identifiers and presentation metadata for every field of the
//! measurement form. Free-entry inputs are grouped per section
//! ([`CommonInput`], [`ApparelInput`], [`SolarInput`], [`PlasticsInput`]);
//! [`Field`] wraps them together with the choice fields.
//!
//! Each field has a stable camelCase wire key that names it in saved
//! records and on the command line.
//!
//! ## Example
//!
//! ```rust
//! use ripple_core::fields::{Field, FieldKind};
//! use ripple_core::scope::Scope;
//!
//! let field = Field::from_key("fuelCombustion").unwrap();
//! assert_eq!(field.label(), "On-Site Fuel Combustion");
//! assert_eq!(field.kind(), FieldKind::Number);
//! assert_eq!(field.required_scope(), Some(Scope::Scope1));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::choices::{DisposalMethod, FiberType, MassUnit, ResinOrigin, ResinType, TravelMode};
use crate::errors::{FormError, FormResult};
use crate::industry::Industry;
use crate::scope::Scope;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Numeric text input (the raw string is stored)
    Number,
    /// Free text input
    Text,
    /// Pick one of a fixed option list
    Choice,
}

/// Which part of the form a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Common,
    Industry(Industry),
}

/// Presentation metadata for a free-entry input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Option<&'static str>,
    pub tooltip: &'static str,
    pub kind: FieldKind,
}

const fn number(
    key: &'static str,
    label: &'static str,
    unit: Option<&'static str>,
    tooltip: &'static str,
) -> InputSpec {
    InputSpec {
        key,
        label,
        unit,
        tooltip,
        kind: FieldKind::Number,
    }
}

// ============================================================================
// Common inputs
// ============================================================================

/// Free-entry inputs of the common data section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonInput {
    Electricity,
    FuelCombustion,
    WasteDisposal,
    EmployeeCommutingDistance,
    NumberOfEmployees,
    RawMaterials,
    RawMaterialsQuantity,
}

impl CommonInput {
    pub const ALL: [CommonInput; 7] = [
        CommonInput::Electricity,
        CommonInput::FuelCombustion,
        CommonInput::WasteDisposal,
        CommonInput::EmployeeCommutingDistance,
        CommonInput::NumberOfEmployees,
        CommonInput::RawMaterials,
        CommonInput::RawMaterialsQuantity,
    ];

    pub fn spec(&self) -> InputSpec {
        match self {
            CommonInput::Electricity => number(
                "electricity",
                "Energy Consumption - Electricity Usage",
                Some("kWh/year"),
                "Enter total annual electricity usage from all on-site sources.",
            ),
            CommonInput::FuelCombustion => number(
                "fuelCombustion",
                "On-Site Fuel Combustion",
                Some("m³ or liters"),
                "Fuel used for heating, boilers, or machinery. Specify volumes and fuel types.",
            ),
            CommonInput::WasteDisposal => number(
                "wasteDisposal",
                "Waste & Disposal",
                Some("tons/year"),
                "Specify total process waste and how it is managed. Different disposal methods have different emission factors.",
            ),
            CommonInput::EmployeeCommutingDistance => number(
                "employeeCommutingDistance",
                "Employee Commuting - Average Distance",
                Some("km/day"),
                "Enter average commuting distance per employee per day.",
            ),
            CommonInput::NumberOfEmployees => number(
                "numberOfEmployees",
                "Number of Employees",
                None,
                "Enter the total number of employees.",
            ),
            CommonInput::RawMaterials => InputSpec {
                key: "rawMaterials",
                label: "Material name",
                unit: None,
                tooltip: RAW_MATERIALS_TOOLTIP,
                kind: FieldKind::Text,
            },
            CommonInput::RawMaterialsQuantity => number(
                "rawMaterialsQuantity",
                "Quantity",
                None,
                RAW_MATERIALS_TOOLTIP,
            ),
        }
    }
}

/// Heading of the Scope 3 raw materials group
pub const RAW_MATERIALS_LABEL: &str = "General Raw Materials";

/// Tooltip shared by the raw materials group
pub const RAW_MATERIALS_TOOLTIP: &str =
    "List major raw materials used and their approximate annual volumes.";

// ============================================================================
// Industry inputs
// ============================================================================

/// Free-entry inputs of the Apparel section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApparelInput {
    FiberInputs,
    WaterUsageDyeing,
    DyeChemicals,
    DyeBathTemperature,
    SewingMachineElectricity,
    OffCutsPercentage,
}

impl ApparelInput {
    pub const ALL: [ApparelInput; 6] = [
        ApparelInput::FiberInputs,
        ApparelInput::WaterUsageDyeing,
        ApparelInput::DyeChemicals,
        ApparelInput::DyeBathTemperature,
        ApparelInput::SewingMachineElectricity,
        ApparelInput::OffCutsPercentage,
    ];

    pub fn spec(&self) -> InputSpec {
        match self {
            ApparelInput::FiberInputs => number(
                "fiberInputs",
                "Fiber Inputs",
                Some("kg/year"),
                "Specify the predominant fibers used in garment production.",
            ),
            ApparelInput::WaterUsageDyeing => number(
                "waterUsageDyeing",
                "Water Usage for Dyeing",
                Some("liters/year"),
                "Specify the water usage for dyeing processes.",
            ),
            ApparelInput::DyeChemicals => number(
                "dyeChemicals",
                "Dye Chemicals",
                Some("kg/year"),
                "Specify the amount of dye chemicals used.",
            ),
            ApparelInput::DyeBathTemperature => number(
                "dyeBathTemperature",
                "Dye Bath Temperature",
                Some("°C"),
                "Specify the temperature requirements for dye baths.",
            ),
            ApparelInput::SewingMachineElectricity => number(
                "sewingMachineElectricity",
                "Electricity Consumption for Sewing Machines",
                Some("kWh/year"),
                "Enter approximate energy usage for garment assembly.",
            ),
            ApparelInput::OffCutsPercentage => number(
                "offCutsPercentage",
                "Off-cuts Percentage",
                Some("%"),
                "Enter the percentage of fabric wasted as off-cuts.",
            ),
        }
    }
}

/// Free-entry inputs of the Solar Panel Manufacturing section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarInput {
    SiliconFeedstock,
    FurnaceElectricity,
    WaferSlicingLosses,
    ChemicalEtchants,
    CleanroomEnergy,
    GlassUsage,
    AluminumFrameUsage,
    EncapsulantMaterials,
    LaminationEnergy,
}

impl SolarInput {
    pub const ALL: [SolarInput; 9] = [
        SolarInput::SiliconFeedstock,
        SolarInput::FurnaceElectricity,
        SolarInput::WaferSlicingLosses,
        SolarInput::ChemicalEtchants,
        SolarInput::CleanroomEnergy,
        SolarInput::GlassUsage,
        SolarInput::AluminumFrameUsage,
        SolarInput::EncapsulantMaterials,
        SolarInput::LaminationEnergy,
    ];

    pub fn spec(&self) -> InputSpec {
        match self {
            SolarInput::SiliconFeedstock => number(
                "siliconFeedstock",
                "Silicon Feedstock",
                Some("kg/year"),
                "Silicon purification and ingot growth are highly energy-intensive. Provide annual volumes.",
            ),
            SolarInput::FurnaceElectricity => number(
                "furnaceElectricity",
                "Furnace Electricity Consumption",
                Some("kWh/year"),
                "Specify the electricity consumption for ingot growth.",
            ),
            SolarInput::WaferSlicingLosses => number(
                "waferSlicingLosses",
                "Wafer Slicing Losses",
                Some("kg/year"),
                "Specify the amount of silicon waste from wafer slicing.",
            ),
            SolarInput::ChemicalEtchants => number(
                "chemicalEtchants",
                "Chemical Etchants",
                Some("liters/year"),
                "Specify the volume of chemical etchants used.",
            ),
            SolarInput::CleanroomEnergy => number(
                "cleanroomEnergy",
                "Cleanroom Energy Consumption",
                Some("kWh/year"),
                "Specify the energy consumption for cleanroom operation (filtration, HVAC).",
            ),
            SolarInput::GlassUsage => number(
                "glassUsage",
                "Glass Usage",
                Some("kg/year"),
                "Specify the amount of glass used in module assembly.",
            ),
            SolarInput::AluminumFrameUsage => number(
                "aluminumFrameUsage",
                "Aluminum Frame Usage",
                Some("kg/year"),
                "Specify the amount of aluminum used for frames.",
            ),
            SolarInput::EncapsulantMaterials => number(
                "encapsulantMaterials",
                "Encapsulant Materials",
                Some("kg/year"),
                "Specify the amount of encapsulant materials used.",
            ),
            SolarInput::LaminationEnergy => number(
                "laminationEnergy",
                "Lamination Energy",
                Some("kWh/year"),
                "Specify the energy consumption for the lamination process.",
            ),
        }
    }
}

/// Free-entry inputs of the Plastics section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlasticsInput {
    PolymerFeedstocks,
    InjectionMoldingEnergy,
    ExtrusionEnergy,
    DryingPelletizingEnergy,
    Additives,
    RecycledScrapPercentage,
}

impl PlasticsInput {
    pub const ALL: [PlasticsInput; 6] = [
        PlasticsInput::PolymerFeedstocks,
        PlasticsInput::InjectionMoldingEnergy,
        PlasticsInput::ExtrusionEnergy,
        PlasticsInput::DryingPelletizingEnergy,
        PlasticsInput::Additives,
        PlasticsInput::RecycledScrapPercentage,
    ];

    pub fn spec(&self) -> InputSpec {
        match self {
            PlasticsInput::PolymerFeedstocks => number(
                "polymerFeedstocks",
                "Polymer Feedstocks",
                Some("kg/year"),
                "Identify primary polymers and their source. Recycled resin often has lower embodied emissions.",
            ),
            PlasticsInput::InjectionMoldingEnergy => number(
                "injectionMoldingEnergy",
                "Injection Molding Energy",
                Some("kWh/year"),
                "Specify the energy consumption for injection molding processes.",
            ),
            PlasticsInput::ExtrusionEnergy => number(
                "extrusionEnergy",
                "Extrusion Energy",
                Some("kWh/year"),
                "Specify the energy consumption for extrusion processes.",
            ),
            PlasticsInput::DryingPelletizingEnergy => number(
                "dryingPelletizingEnergy",
                "Drying and Pelletizing Energy",
                Some("kWh/year"),
                "Specify the energy consumption for drying and pelletizing processes.",
            ),
            PlasticsInput::Additives => number(
                "additives",
                "Additives",
                Some("kg/year"),
                "Specify the annual volume of plasticizers, stabilizers, and other additives.",
            ),
            PlasticsInput::RecycledScrapPercentage => number(
                "recycledScrapPercentage",
                "On-site Recycled Scrap Percentage",
                Some("%"),
                "Specify the percentage of scrap recycled on-site.",
            ),
        }
    }
}

// ============================================================================
// Field
// ============================================================================

/// Any field of the measurement form.
///
/// Serializes as its wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Common(CommonInput),
    RawMaterialsUnit,
    DisposalMethod,
    PredominantTravelMode,
    Apparel(ApparelInput),
    FiberType,
    Solar(SolarInput),
    Plastics(PlasticsInput),
    ResinType,
    ResinOrigin,
}

/// Common fields in display order
const COMMON_FIELDS: [Field; 10] = [
    Field::Common(CommonInput::Electricity),
    Field::Common(CommonInput::FuelCombustion),
    Field::Common(CommonInput::WasteDisposal),
    Field::Common(CommonInput::EmployeeCommutingDistance),
    Field::Common(CommonInput::NumberOfEmployees),
    Field::Common(CommonInput::RawMaterials),
    Field::Common(CommonInput::RawMaterialsQuantity),
    Field::RawMaterialsUnit,
    Field::DisposalMethod,
    Field::PredominantTravelMode,
];

const APPAREL_FIELDS: [Field; 7] = [
    Field::Apparel(ApparelInput::FiberInputs),
    Field::Apparel(ApparelInput::WaterUsageDyeing),
    Field::Apparel(ApparelInput::DyeChemicals),
    Field::Apparel(ApparelInput::DyeBathTemperature),
    Field::Apparel(ApparelInput::SewingMachineElectricity),
    Field::Apparel(ApparelInput::OffCutsPercentage),
    Field::FiberType,
];

const SOLAR_FIELDS: [Field; 9] = [
    Field::Solar(SolarInput::SiliconFeedstock),
    Field::Solar(SolarInput::FurnaceElectricity),
    Field::Solar(SolarInput::WaferSlicingLosses),
    Field::Solar(SolarInput::ChemicalEtchants),
    Field::Solar(SolarInput::CleanroomEnergy),
    Field::Solar(SolarInput::GlassUsage),
    Field::Solar(SolarInput::AluminumFrameUsage),
    Field::Solar(SolarInput::EncapsulantMaterials),
    Field::Solar(SolarInput::LaminationEnergy),
];

const PLASTICS_FIELDS: [Field; 8] = [
    Field::Plastics(PlasticsInput::PolymerFeedstocks),
    Field::Plastics(PlasticsInput::InjectionMoldingEnergy),
    Field::Plastics(PlasticsInput::ExtrusionEnergy),
    Field::Plastics(PlasticsInput::DryingPelletizingEnergy),
    Field::Plastics(PlasticsInput::Additives),
    Field::Plastics(PlasticsInput::RecycledScrapPercentage),
    Field::ResinType,
    Field::ResinOrigin,
];

/// Wire key -> field index
static FIELD_INDEX: Lazy<HashMap<&'static str, Field>> = Lazy::new(|| {
    Field::all()
        .map(|field| (field.key(), field))
        .collect()
});

impl Field {
    /// Common-section fields in display order (including scope-gated ones)
    pub fn common() -> &'static [Field] {
        &COMMON_FIELDS
    }

    /// The field group of one industry, in display order
    pub fn for_industry(industry: Industry) -> &'static [Field] {
        match industry {
            Industry::Apparel => &APPAREL_FIELDS,
            Industry::SolarPanelManufacturing => &SOLAR_FIELDS,
            Industry::Plastics => &PLASTICS_FIELDS,
        }
    }

    /// Every field in the catalog
    pub fn all() -> impl Iterator<Item = Field> {
        Field::common()
            .iter()
            .chain(Industry::ALL.into_iter().flat_map(|i| Field::for_industry(i).iter()))
            .copied()
    }

    /// Look up a field by its wire key
    pub fn from_key(key: &str) -> FormResult<Field> {
        FIELD_INDEX
            .get(key.trim())
            .copied()
            .ok_or_else(|| FormError::unknown_field(key))
    }

    /// Metadata of a free-entry input; `None` for choice fields
    pub fn input_spec(&self) -> Option<InputSpec> {
        match self {
            Field::Common(input) => Some(input.spec()),
            Field::Apparel(input) => Some(input.spec()),
            Field::Solar(input) => Some(input.spec()),
            Field::Plastics(input) => Some(input.spec()),
            _ => None,
        }
    }

    /// Stable camelCase key
    pub fn key(&self) -> &'static str {
        match self {
            Field::RawMaterialsUnit => "rawMaterialsUnit",
            Field::DisposalMethod => "disposalMethod",
            Field::PredominantTravelMode => "predominantTravelMode",
            Field::FiberType => "fiberType",
            Field::ResinType => "resinType",
            Field::ResinOrigin => "resinOrigin",
            Field::Common(input) => input.spec().key,
            Field::Apparel(input) => input.spec().key,
            Field::Solar(input) => input.spec().key,
            Field::Plastics(input) => input.spec().key,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::RawMaterialsUnit => "Unit",
            Field::DisposalMethod => "Disposal Method",
            Field::PredominantTravelMode => "Predominant Travel Mode",
            Field::FiberType => "Fiber Type",
            Field::ResinType => "Resin Type",
            Field::ResinOrigin => "Resin Origin",
            Field::Common(input) => input.spec().label,
            Field::Apparel(input) => input.spec().label,
            Field::Solar(input) => input.spec().label,
            Field::Plastics(input) => input.spec().label,
        }
    }

    /// Placeholder shown by an empty pick list
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::RawMaterialsUnit => "Unit",
            Field::DisposalMethod => "Select disposal method",
            Field::PredominantTravelMode => "Select travel mode",
            Field::FiberType => "Select fiber type",
            Field::ResinType => "Select resin type",
            Field::ResinOrigin => "Select resin origin",
            _ => "",
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        self.input_spec().and_then(|spec| spec.unit)
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            Field::RawMaterialsUnit => Some(RAW_MATERIALS_TOOLTIP),
            _ => self.input_spec().map(|spec| spec.tooltip),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.input_spec()
            .map(|spec| spec.kind)
            .unwrap_or(FieldKind::Choice)
    }

    /// Wire values of a choice field's options (empty for inputs)
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            Field::RawMaterialsUnit => MassUnit::ALL.iter().map(|o| o.wire()).collect(),
            Field::DisposalMethod => DisposalMethod::ALL.iter().map(|o| o.wire()).collect(),
            Field::PredominantTravelMode => TravelMode::ALL.iter().map(|o| o.wire()).collect(),
            Field::FiberType => FiberType::ALL.iter().map(|o| o.wire()).collect(),
            Field::ResinType => ResinType::ALL.iter().map(|o| o.wire()).collect(),
            Field::ResinOrigin => ResinOrigin::ALL.iter().map(|o| o.wire()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Field::Common(_)
            | Field::RawMaterialsUnit
            | Field::DisposalMethod
            | Field::PredominantTravelMode => Section::Common,
            Field::Apparel(_) | Field::FiberType => Section::Industry(Industry::Apparel),
            Field::Solar(_) => Section::Industry(Industry::SolarPanelManufacturing),
            Field::Plastics(_) | Field::ResinType | Field::ResinOrigin => {
                Section::Industry(Industry::Plastics)
            }
        }
    }

    /// Industry whose section owns this field, if any
    pub fn industry(&self) -> Option<Industry> {
        match self.section() {
            Section::Common => None,
            Section::Industry(industry) => Some(industry),
        }
    }

    /// Scope that must be selected for the field to be shown
    pub fn required_scope(&self) -> Option<Scope> {
        match self {
            Field::Common(CommonInput::FuelCombustion) => Some(Scope::Scope1),
            Field::Common(CommonInput::RawMaterials)
            | Field::Common(CommonInput::RawMaterialsQuantity)
            | Field::RawMaterialsUnit => Some(Scope::Scope3),
            _ => None,
        }
    }

    /// Whether the field belongs to the Scope 3 raw materials group
    pub fn is_raw_materials(&self) -> bool {
        matches!(
            self,
            Field::Common(CommonInput::RawMaterials)
                | Field::Common(CommonInput::RawMaterialsQuantity)
                | Field::RawMaterialsUnit
        )
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Field::from_key(&key).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_industry_group_sizes() {
        assert_eq!(Field::for_industry(Industry::Apparel).len(), 7);
        assert_eq!(Field::for_industry(Industry::SolarPanelManufacturing).len(), 9);
        assert_eq!(Field::for_industry(Industry::Plastics).len(), 8);
    }

    #[test]
    fn test_keys_are_unique_and_indexed() {
        let keys: HashSet<&str> = Field::all().map(|f| f.key()).collect();
        assert_eq!(keys.len(), Field::all().count());
        for field in Field::all() {
            assert_eq!(Field::from_key(field.key()).unwrap(), field);
        }
    }

    #[test]
    fn test_industry_groups_are_disjoint_from_common() {
        for industry in Industry::ALL {
            for field in Field::for_industry(industry) {
                assert_eq!(field.industry(), Some(industry));
                assert!(!Field::common().contains(field));
            }
        }
    }

    #[test]
    fn test_scope_gated_fields() {
        let gated: Vec<(&str, Scope)> = Field::all()
            .filter_map(|f| f.required_scope().map(|s| (f.key(), s)))
            .collect();
        assert_eq!(
            gated,
            vec![
                ("fuelCombustion", Scope::Scope1),
                ("rawMaterials", Scope::Scope3),
                ("rawMaterialsQuantity", Scope::Scope3),
                ("rawMaterialsUnit", Scope::Scope3),
            ]
        );
    }

    #[test]
    fn test_choice_metadata() {
        assert_eq!(Field::ResinType.kind(), FieldKind::Choice);
        assert_eq!(Field::ResinType.options(), vec!["PE", "PP", "PVC", "PET"]);
        assert_eq!(Field::ResinType.unit(), None);
        assert_eq!(Field::RawMaterialsUnit.tooltip(), Some(RAW_MATERIALS_TOOLTIP));
        assert_eq!(
            Field::Common(CommonInput::RawMaterials).kind(),
            FieldKind::Text
        );
        assert!(Field::Common(CommonInput::Electricity).options().is_empty());
    }

    #[test]
    fn test_unknown_key() {
        let err = Field::from_key("co2Emissions").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_field_serializes_as_key() {
        let json = serde_json::to_string(&Field::Solar(SolarInput::GlassUsage)).unwrap();
        assert_eq!(json, "\"glassUsage\"");
        let field: Field = serde_json::from_str("\"resinOrigin\"").unwrap();
        assert_eq!(field, Field::ResinOrigin);
        assert!(serde_json::from_str::<Field>("\"bogus\"").is_err());
    }
}
