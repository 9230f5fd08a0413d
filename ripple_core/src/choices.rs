//! Option sets for the form's choice fields
//!
//! Every option has a wire value (what the form data records) and a
//! display name (what the pick lists show).

use serde::{Deserialize, Serialize};

/// Unit of the general raw materials quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    Kg,
    Tons,
}

impl MassUnit {
    pub const ALL: [MassUnit; 2] = [MassUnit::Kg, MassUnit::Tons];

    pub fn wire(&self) -> &'static str {
        match self {
            MassUnit::Kg => "kg",
            MassUnit::Tons => "tons",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.wire()
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How process waste is disposed of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisposalMethod {
    Landfill,
    Incineration,
    Recycling,
}

impl DisposalMethod {
    pub const ALL: [DisposalMethod; 3] = [
        DisposalMethod::Landfill,
        DisposalMethod::Incineration,
        DisposalMethod::Recycling,
    ];

    pub fn wire(&self) -> &'static str {
        match self {
            DisposalMethod::Landfill => "landfill",
            DisposalMethod::Incineration => "incineration",
            DisposalMethod::Recycling => "recycling",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DisposalMethod::Landfill => "Landfill",
            DisposalMethod::Incineration => "Incineration",
            DisposalMethod::Recycling => "Recycling",
        }
    }
}

impl std::fmt::Display for DisposalMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Predominant way employees commute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Car,
    PublicTransport,
    Bicycle,
    Walk,
}

impl TravelMode {
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Car,
        TravelMode::PublicTransport,
        TravelMode::Bicycle,
        TravelMode::Walk,
    ];

    pub fn wire(&self) -> &'static str {
        match self {
            TravelMode::Car => "car",
            TravelMode::PublicTransport => "public_transport",
            TravelMode::Bicycle => "bicycle",
            TravelMode::Walk => "walk",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TravelMode::Car => "Car",
            TravelMode::PublicTransport => "Public Transport",
            TravelMode::Bicycle => "Bicycle",
            TravelMode::Walk => "Walk",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Predominant fiber in garment production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiberType {
    Cotton,
    Wool,
    Polyester,
    Hemp,
}

impl FiberType {
    pub const ALL: [FiberType; 4] = [
        FiberType::Cotton,
        FiberType::Wool,
        FiberType::Polyester,
        FiberType::Hemp,
    ];

    pub fn wire(&self) -> &'static str {
        match self {
            FiberType::Cotton => "cotton",
            FiberType::Wool => "wool",
            FiberType::Polyester => "polyester",
            FiberType::Hemp => "hemp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FiberType::Cotton => "Cotton",
            FiberType::Wool => "Wool",
            FiberType::Polyester => "Polyester",
            FiberType::Hemp => "Hemp",
        }
    }
}

impl std::fmt::Display for FiberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resin family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResinType {
    Pe,
    Pp,
    Pvc,
    Pet,
}

impl ResinType {
    pub const ALL: [ResinType; 4] = [ResinType::Pe, ResinType::Pp, ResinType::Pvc, ResinType::Pet];

    pub fn wire(&self) -> &'static str {
        match self {
            ResinType::Pe => "PE",
            ResinType::Pp => "PP",
            ResinType::Pvc => "PVC",
            ResinType::Pet => "PET",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.wire()
    }
}

impl std::fmt::Display for ResinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Whether resin is virgin or recycled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResinOrigin {
    Virgin,
    Recycled,
}

impl ResinOrigin {
    pub const ALL: [ResinOrigin; 2] = [ResinOrigin::Virgin, ResinOrigin::Recycled];

    pub fn wire(&self) -> &'static str {
        match self {
            ResinOrigin::Virgin => "virgin",
            ResinOrigin::Recycled => "recycled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResinOrigin::Virgin => "Virgin",
            ResinOrigin::Recycled => "Recycled",
        }
    }
}

impl std::fmt::Display for ResinOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Look up an option by its wire value (case-insensitive)
pub(crate) fn parse_wire<T: Copy>(options: &[T], wire: impl Fn(&T) -> &'static str, value: &str) -> Option<T> {
    let value = value.trim();
    options
        .iter()
        .find(|option| wire(*option).eq_ignore_ascii_case(value))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_wire_values() {
        for mode in TravelMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.wire()));
        }
        for resin in ResinType::ALL {
            let json = serde_json::to_string(&resin).unwrap();
            assert_eq!(json, format!("\"{}\"", resin.wire()));
        }
    }

    #[test]
    fn test_parse_wire_is_case_insensitive() {
        assert_eq!(
            parse_wire(&ResinType::ALL, ResinType::wire, "pvc"),
            Some(ResinType::Pvc)
        );
        assert_eq!(
            parse_wire(&TravelMode::ALL, TravelMode::wire, "public_transport"),
            Some(TravelMode::PublicTransport)
        );
        assert_eq!(parse_wire(&FiberType::ALL, FiberType::wire, "silk"), None);
    }
}
