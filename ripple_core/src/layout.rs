//! Field visibility rules
//!
//! Which fields the form shows is a pure function of the selected
//! industry and scopes:
//!
//! - common fields are always shown, except `fuelCombustion` (needs
//!   Scope 1) and the raw materials group (needs Scope 3)
//! - the industry group of the selected industry is shown in full; no
//!   industry group is shown when none is selected
//! - an empty scope selection raises an advisory warning

use serde::Serialize;

use crate::fields::Field;
use crate::industry::Industry;
use crate::scope::ScopeSet;

/// Banner text shown while no scope is selected
pub const EMPTY_SCOPE_WARNING: &str = "At least one emission scope must be selected to proceed.";

/// Fields visible for one industry/scope combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormLayout {
    /// Common data fields, in display order
    pub common: Vec<Field>,
    /// Industry-specific fields, in display order
    pub industry: Vec<Field>,
    /// Heading of the industry section, when one is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_title: Option<String>,
    /// Whether the empty-scope warning is shown
    pub scope_warning: bool,
}

impl FormLayout {
    /// Compute the layout for a selection.
    ///
    /// # Example
    /// ```
    /// use ripple_core::industry::Industry;
    /// use ripple_core::layout::FormLayout;
    /// use ripple_core::scope::ScopeSet;
    ///
    /// let layout = FormLayout::compute(Some(Industry::Plastics), &ScopeSet::all());
    /// assert_eq!(layout.industry.len(), 8);
    /// assert_eq!(layout.common.len(), 10);
    /// assert!(!layout.scope_warning);
    /// ```
    pub fn compute(industry: Option<Industry>, scopes: &ScopeSet) -> Self {
        let common = Field::common()
            .iter()
            .copied()
            .filter(|field| field.required_scope().map_or(true, |s| scopes.contains(s)))
            .collect();

        let industry_fields = industry
            .map(|i| Field::for_industry(i).to_vec())
            .unwrap_or_default();

        FormLayout {
            common,
            industry: industry_fields,
            industry_title: industry.map(|i| i.section_title()),
            scope_warning: scopes.is_empty(),
        }
    }

    /// Every visible field, common section first
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.common.iter().chain(self.industry.iter()).copied()
    }

    pub fn is_visible(&self, field: Field) -> bool {
        self.common.contains(&field) || self.industry.contains(&field)
    }

    /// Visible fields of the raw materials group (empty unless Scope 3 is selected)
    pub fn raw_materials(&self) -> Vec<Field> {
        self.common
            .iter()
            .copied()
            .filter(|f| f.is_raw_materials())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::CommonInput;
    use crate::scope::Scope;

    const FUEL: Field = Field::Common(CommonInput::FuelCombustion);

    #[test]
    fn test_no_industry_shows_only_common() {
        let layout = FormLayout::compute(None, &ScopeSet::all());
        assert!(layout.industry.is_empty());
        assert_eq!(layout.industry_title, None);
        assert_eq!(layout.common.len(), 10);
    }

    #[test]
    fn test_industry_group_sizes() {
        let scopes = ScopeSet::all();
        let sizes: Vec<usize> = Industry::ALL
            .iter()
            .map(|i| FormLayout::compute(Some(*i), &scopes).industry.len())
            .collect();
        assert_eq!(sizes, vec![7, 9, 8]);
    }

    #[test]
    fn test_scope_one_gates_fuel_combustion() {
        let without = FormLayout::compute(None, &ScopeSet::all().toggled(Scope::Scope1));
        assert!(!without.is_visible(FUEL));
        assert_eq!(without.raw_materials().len(), 3);

        let with: ScopeSet = [Scope::Scope1].into_iter().collect();
        let layout = FormLayout::compute(None, &with);
        assert!(layout.is_visible(FUEL));
        assert!(layout.raw_materials().is_empty());
    }

    #[test]
    fn test_empty_scopes_keep_always_visible_subset() {
        let layout = FormLayout::compute(Some(Industry::Apparel), &ScopeSet::empty());
        assert!(layout.scope_warning);
        let keys: Vec<&str> = layout.common.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec![
                "electricity",
                "wasteDisposal",
                "employeeCommutingDistance",
                "numberOfEmployees",
                "disposalMethod",
                "predominantTravelMode",
            ]
        );
        // Industry fields do not depend on scopes
        assert_eq!(layout.industry.len(), 7);
    }

    #[test]
    fn test_industry_title() {
        let layout = FormLayout::compute(Some(Industry::SolarPanelManufacturing), &ScopeSet::all());
        assert_eq!(
            layout.industry_title.as_deref(),
            Some("Solar Panel Manufacturing Specific Data")
        );
    }
}
