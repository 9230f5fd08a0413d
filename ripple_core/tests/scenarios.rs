//! End-to-end form sessions driven through the public API

use std::time::{Duration, Instant};

use ripple_core::controller::SAVE_SUCCESS_MESSAGE;
use ripple_core::fields::CommonInput;
use ripple_core::layout::EMPTY_SCOPE_WARNING;
use ripple_core::notification::NotificationKind;
use ripple_core::{
    Confirmation, Decision, Field, FieldEdit, FormConfig, Industry, MeasurementForm, Outcome,
    Phase, Scope, ScopeSet,
};

const FUEL: Field = Field::Common(CommonInput::FuelCombustion);
const RAW_MATERIALS: Field = Field::Common(CommonInput::RawMaterials);

fn keys(fields: &[Field]) -> Vec<&'static str> {
    fields.iter().map(|f| f.key()).collect()
}

#[test]
fn plastics_then_no_scopes() {
    let mut form = MeasurementForm::default();
    assert_eq!(form.phase(), Phase::Idle);

    assert_eq!(form.select_industry(Industry::Plastics).unwrap(), Outcome::Applied);
    let layout = form.layout();
    assert_eq!(
        keys(&layout.industry),
        vec![
            "polymerFeedstocks",
            "injectionMoldingEnergy",
            "extrusionEnergy",
            "dryingPelletizingEnergy",
            "additives",
            "recycledScrapPercentage",
            "resinType",
            "resinOrigin",
        ]
    );
    assert!(layout.is_visible(FUEL));
    assert!(layout.is_visible(RAW_MATERIALS));
    assert_eq!(layout.industry_title.as_deref(), Some("Plastics Specific Data"));
    assert!(!layout.scope_warning);

    for scope in Scope::ALL {
        form.toggle_scope(scope).unwrap();
    }
    let layout = form.layout();
    assert!(form.scopes().is_empty());
    assert!(layout.scope_warning);
    assert_eq!(layout.common.len(), 6);
    assert!(!layout.is_visible(FUEL));
    assert!(layout.raw_materials().is_empty());
    assert_eq!(layout.industry.len(), 8);

    // Saving is still allowed
    assert!(form.save(Instant::now()).unwrap().is_saved());
    assert_eq!(
        EMPTY_SCOPE_WARNING,
        "At least one emission scope must be selected to proceed."
    );
}

#[test]
fn save_then_auto_dismiss() {
    let start = Instant::now();
    let mut form = MeasurementForm::default();
    form.set("electricity", "1200").unwrap();

    let outcome = form.save(start).unwrap();
    let notification = form.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, SAVE_SUCCESS_MESSAGE);

    assert!(!form.tick(start + Duration::from_millis(2500)));
    assert!(form.tick(start + Duration::from_millis(3000)));
    assert!(form.notification().is_none());
    // A late dismissal for the expired ticket is harmless
    assert!(!form.dismiss_notification(outcome.ticket));

    assert_eq!(
        form.data().value(Field::Common(CommonInput::Electricity)),
        Some("1200")
    );
}

#[test]
fn second_save_outlives_first_timer() {
    let start = Instant::now();
    let mut form = MeasurementForm::new(FormConfig {
        notification_ms: 1000,
        ..FormConfig::default()
    });

    let first = form.save(start).unwrap();
    let second = form.save(start + Duration::from_millis(800)).unwrap();

    assert!(!form.dismiss_notification(first.ticket));
    assert!(!form.tick(start + Duration::from_millis(1000)));
    assert_eq!(form.notification().map(|n| n.ticket), Some(second.ticket));
    assert!(form.tick(start + Duration::from_millis(1800)));
}

#[test]
fn declined_industry_change_keeps_everything() {
    let mut form = MeasurementForm::default();
    form.select_industry(Industry::Apparel).unwrap();
    form.set("fiberType", "wool").unwrap();
    form.set("electricity", "900").unwrap();
    let before = form.data().clone();

    let outcome = form.select_industry(Industry::SolarPanelManufacturing).unwrap();
    let Outcome::ConfirmationRequired(confirmation) = outcome else {
        panic!("expected a prompt, got {outcome:?}");
    };
    assert_eq!(
        confirmation.prompt(),
        "Changing industry will reset all industry-specific data. Proceed?"
    );
    assert_eq!(form.pending(), Some(confirmation));

    assert_eq!(form.resolve(Decision::Decline).unwrap(), Outcome::Declined);
    assert_eq!(form.industry(), Some(Industry::Apparel));
    assert_eq!(form.data(), &before);
    assert!(form.pending().is_none());
}

#[test]
fn accepted_industry_change_clears_common_data_too() {
    let mut form = MeasurementForm::default();
    form.set("electricity", "900").unwrap();

    let outcome = form.select_industry(Industry::Apparel).unwrap();
    assert_eq!(
        outcome,
        Outcome::ConfirmationRequired(Confirmation::ChangeIndustry {
            to: Industry::Apparel
        })
    );
    form.resolve(Decision::Accept).unwrap();

    assert_eq!(form.phase(), Phase::Configuring(Industry::Apparel));
    assert!(form.data().is_empty());
}

#[test]
fn stale_value_returns_with_its_scope() {
    let mut form = MeasurementForm::default();
    form.edit(FieldEdit::Common(CommonInput::FuelCombustion, "250".into()))
        .unwrap();

    form.toggle_scope(Scope::Scope1).unwrap();
    assert!(!form.layout().is_visible(FUEL));
    assert!(form.receipt().data.get("fuelCombustion").is_none());

    form.toggle_scope(Scope::Scope1).unwrap();
    assert!(form.layout().is_visible(FUEL));
    assert_eq!(form.data().value(FUEL), Some("250"));
    assert_eq!(
        form.receipt().data.get("fuelCombustion").map(String::as_str),
        Some("250")
    );
}

#[test]
fn industry_field_requires_matching_industry() {
    let mut form = MeasurementForm::default();
    assert_eq!(
        form.set("resinType", "PP").unwrap_err().error_code(),
        "NO_INDUSTRY_SELECTED"
    );

    form.select_industry(Industry::Apparel).unwrap();
    assert_eq!(
        form.set("resinType", "PP").unwrap_err().error_code(),
        "INDUSTRY_MISMATCH"
    );
    assert_eq!(
        form.set("fiberType", "silk").unwrap_err().error_code(),
        "INVALID_CHOICE"
    );
    assert!(form.data().is_empty());
}

#[test]
fn reset_after_full_session() {
    let mut form = MeasurementForm::default();
    form.select_industry(Industry::SolarPanelManufacturing).unwrap();
    form.set("cleanroomEnergy", "52000").unwrap();
    form.toggle_scope(Scope::Scope3).unwrap();

    let outcome = form.request_reset().unwrap();
    assert_eq!(outcome, Outcome::ConfirmationRequired(Confirmation::Reset));
    assert_eq!(
        Confirmation::Reset.prompt(),
        "Are you sure you want to reset all data?"
    );
    form.resolve(Decision::Accept).unwrap();

    assert_eq!(form.phase(), Phase::Idle);
    assert_eq!(form.scopes(), &ScopeSet::all());
    assert!(form.data().is_empty());
    assert!(form.layout().industry.is_empty());
}
