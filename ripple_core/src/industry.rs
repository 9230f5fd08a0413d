//! Supported reporting verticals
//!
//! Each industry owns a disjoint group of data fields (see [`crate::fields`]).

use serde::{Deserialize, Serialize};

use crate::errors::{FormError, FormResult};

/// Industry vertical a measurement is reported for
///
/// # Example
/// ```
/// use ripple_core::industry::Industry;
///
/// let industry = Industry::from_str_flexible("solar").unwrap();
/// assert_eq!(industry, Industry::SolarPanelManufacturing);
/// assert_eq!(industry.section_title(), "Solar Panel Manufacturing Specific Data");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    /// Garment production
    Apparel,
    /// Photovoltaic module production
    #[serde(rename = "Solar Panel Manufacturing")]
    SolarPanelManufacturing,
    /// Polymer processing and moulding
    Plastics,
}

impl Industry {
    /// All industries in display order
    pub const ALL: [Industry; 3] = [
        Industry::Apparel,
        Industry::SolarPanelManufacturing,
        Industry::Plastics,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Industry::Apparel => "Apparel",
            Industry::SolarPanelManufacturing => "Solar Panel Manufacturing",
            Industry::Plastics => "Plastics",
        }
    }

    /// Short identifier used on the command line and in element ids
    pub fn slug(&self) -> &'static str {
        match self {
            Industry::Apparel => "apparel",
            Industry::SolarPanelManufacturing => "solar-panel-manufacturing",
            Industry::Plastics => "plastics",
        }
    }

    /// Heading of the industry-specific field section
    pub fn section_title(&self) -> String {
        format!("{} Specific Data", self.display_name())
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> FormResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "apparel" | "garments" | "textiles" => Ok(Industry::Apparel),
            "solar" | "solar-panel" | "solar-panels" | "solar-panel-manufacturing" | "pv" => {
                Ok(Industry::SolarPanelManufacturing)
            }
            "plastics" | "plastic" => Ok(Industry::Plastics),
            _ => Err(FormError::unknown_industry(s)),
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(Industry::from_str_flexible("Apparel").unwrap(), Industry::Apparel);
        assert_eq!(
            Industry::from_str_flexible("Solar Panel Manufacturing").unwrap(),
            Industry::SolarPanelManufacturing
        );
        assert_eq!(Industry::from_str_flexible("PLASTICS").unwrap(), Industry::Plastics);
        assert!(Industry::from_str_flexible("steel").is_err());
    }

    #[test]
    fn test_slug_roundtrip() {
        for industry in Industry::ALL {
            assert_eq!(Industry::from_str_flexible(industry.slug()).unwrap(), industry);
        }
    }

    #[test]
    fn test_industry_serialization() {
        let json = serde_json::to_string(&Industry::SolarPanelManufacturing).unwrap();
        assert_eq!(json, "\"Solar Panel Manufacturing\"");

        let roundtrip: Industry = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Industry::SolarPanelManufacturing);
    }
}
