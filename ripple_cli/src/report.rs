//! Plain-text rendering of the field catalog and layouts

use std::io::{self, Write};

use ripple_core::fields::{FieldKind, Section};
use ripple_core::form::FormState;
use ripple_core::layout::EMPTY_SCOPE_WARNING;
use ripple_core::{Field, FormLayout, Industry};

/// One catalog entry as JSON
pub fn field_json(field: Field) -> serde_json::Value {
    let section = match field.section() {
        Section::Common => "common".to_string(),
        Section::Industry(industry) => industry.slug().to_string(),
    };
    serde_json::json!({
        "key": field.key(),
        "label": field.label(),
        "unit": field.unit(),
        "kind": field.kind(),
        "section": section,
        "requiredScope": field.required_scope(),
        "options": field.options(),
    })
}

fn describe(field: Field) -> String {
    let mut line = format!("  {:<28} {}", field.key(), field.label());
    if let Some(unit) = field.unit() {
        line.push_str(&format!(" ({})", unit));
    }
    if field.kind() == FieldKind::Choice {
        line.push_str(&format!(" [{}]", field.options().join("|")));
    }
    if let Some(scope) = field.required_scope() {
        line.push_str(&format!(" - needs {}", scope));
    }
    line
}

/// Print every field grouped by section
pub fn print_catalog(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Common Data")?;
    for &field in Field::common() {
        writeln!(out, "{}", describe(field))?;
    }
    for industry in Industry::ALL {
        writeln!(out)?;
        writeln!(out, "{}", industry.section_title())?;
        for &field in Field::for_industry(industry) {
            writeln!(out, "{}", describe(field))?;
        }
    }
    Ok(())
}

/// Print the visible fields, with their values when `data` is given
pub fn print_layout(
    out: &mut impl Write,
    layout: &FormLayout,
    data: Option<&FormState>,
) -> io::Result<()> {
    if layout.scope_warning {
        writeln!(out, "Warning: {}", EMPTY_SCOPE_WARNING)?;
        writeln!(out)?;
    }

    writeln!(out, "Common Data")?;
    print_fields(out, &layout.common, data)?;

    if let Some(title) = &layout.industry_title {
        writeln!(out)?;
        writeln!(out, "{}", title)?;
        print_fields(out, &layout.industry, data)?;
    }
    Ok(())
}

fn print_fields(out: &mut impl Write, fields: &[Field], data: Option<&FormState>) -> io::Result<()> {
    for &field in fields {
        match data {
            Some(data) => writeln!(
                out,
                "  {:<28} {}",
                field.key(),
                data.value(field).unwrap_or("-")
            )?,
            None => writeln!(out, "{}", describe(field))?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::ScopeSet;

    fn render(layout: &FormLayout) -> String {
        let mut out = Vec::new();
        print_layout(&mut out, layout, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_layout_lists_industry_section() {
        let text = render(&FormLayout::compute(Some(Industry::Apparel), &ScopeSet::all()));
        assert!(text.contains("Apparel Specific Data"));
        assert!(text.contains("fiberType"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_empty_scopes_print_warning() {
        let text = render(&FormLayout::compute(None, &ScopeSet::empty()));
        assert!(text.starts_with("Warning: At least one emission scope"));
        assert!(!text.contains("fuelCombustion"));
    }

    #[test]
    fn test_field_json() {
        let value = field_json(Field::ResinType);
        assert_eq!(value["key"], "resinType");
        assert_eq!(value["section"], "plastics");
        assert_eq!(value["kind"], "choice");
        assert_eq!(value["options"][3], "PET");
    }

    #[test]
    fn test_catalog_mentions_scope_gates() {
        let mut out = Vec::new();
        print_catalog(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("needs Scope 1"));
        assert!(text.contains("Solar Panel Manufacturing Specific Data"));
    }
}
