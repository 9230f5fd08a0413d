//! # Measurement Form Controller
//!
//! [`MeasurementForm`] owns one session of the emissions form: the selected
//! industry and scopes, the entered values, an open confirmation prompt and
//! the current notification.
//!
//! Operations that would discard data do not block. They park a
//! [`Confirmation`] and return [`Outcome::ConfirmationRequired`]; the caller
//! shows the prompt and answers with [`MeasurementForm::resolve`]. While a
//! prompt is open every other mutation fails with
//! [`FormError::ConfirmationPending`].
//!
//! ```rust
//! use ripple_core::controller::{Decision, MeasurementForm, Outcome};
//! use ripple_core::fields::{CommonInput, Field};
//! use ripple_core::form::FieldEdit;
//! use ripple_core::industry::Industry;
//!
//! let mut form = MeasurementForm::default();
//! form.select_industry(Industry::Apparel).unwrap();
//! form.edit(FieldEdit::Common(CommonInput::Electricity, "1200".into())).unwrap();
//!
//! let outcome = form.select_industry(Industry::Plastics).unwrap();
//! assert!(matches!(outcome, Outcome::ConfirmationRequired(_)));
//!
//! form.resolve(Decision::Decline).unwrap();
//! assert_eq!(form.industry(), Some(Industry::Apparel));
//! assert_eq!(form.data().value(Field::Common(CommonInput::Electricity)), Some("1200"));
//! ```

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::FormConfig;
use crate::errors::{FormError, FormResult};
use crate::form::{FieldEdit, FormState};
use crate::industry::Industry;
use crate::layout::FormLayout;
use crate::notification::{Notification, NotificationKind, NotificationTicket, NotificationTimer};
use crate::scope::{Scope, ScopeSet};

pub const SAVE_SUCCESS_MESSAGE: &str = "Your emissions data has been successfully saved.";
pub const SAVE_ERROR_MESSAGE: &str = "Please check your inputs and try again.";

/// Coarse state of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "industry")]
pub enum Phase {
    /// No industry selected
    Idle,
    /// An industry is selected
    Configuring(Industry),
}

/// A destructive action waiting for the user's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Confirmation {
    ChangeIndustry { to: Industry },
    Reset,
}

impl Confirmation {
    /// Question shown to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirmation::ChangeIndustry { .. } => {
                "Changing industry will reset all industry-specific data. Proceed?"
            }
            Confirmation::Reset => "Are you sure you want to reset all data?",
        }
    }
}

/// Answer to a [`Confirmation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Decline,
}

/// Result of a state-changing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The change took effect
    Applied,
    /// The request matched the current state; nothing changed
    Unchanged,
    /// A prompt is now open; answer it with [`MeasurementForm::resolve`]
    ConfirmationRequired(Confirmation),
    /// The user declined the prompt; nothing changed
    Declined,
}

/// Snapshot written to the log when the form is saved.
///
/// `data` holds only the fields visible at save time. Values kept for a
/// deselected scope stay in the form but are left out of the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReceipt {
    pub session_id: Uuid,
    pub saved_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
    pub scopes: ScopeSet,
    pub data: BTreeMap<&'static str, String>,
}

/// What a save produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Ticket of the notification that reports the result
    pub ticket: NotificationTicket,
    /// Present when the form passed validation
    pub receipt: Option<SaveReceipt>,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        self.receipt.is_some()
    }
}

/// One emissions form session
#[derive(Debug, Clone)]
pub struct MeasurementForm {
    session_id: Uuid,
    config: FormConfig,
    industry: Option<Industry>,
    scopes: ScopeSet,
    data: FormState,
    pending: Option<Confirmation>,
    notifications: NotificationTimer,
}

impl Default for MeasurementForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl MeasurementForm {
    /// Start a session: no industry, every scope selected, nothing entered
    pub fn new(config: FormConfig) -> Self {
        let session_id = Uuid::new_v4();
        tracing::debug!(%session_id, "form session started");
        MeasurementForm {
            session_id,
            notifications: NotificationTimer::new(config.notification_duration()),
            config,
            industry: None,
            scopes: ScopeSet::all(),
            data: FormState::default(),
            pending: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    pub fn scopes(&self) -> &ScopeSet {
        &self.scopes
    }

    pub fn data(&self) -> &FormState {
        &self.data
    }

    pub fn phase(&self) -> Phase {
        match self.industry {
            Some(industry) => Phase::Configuring(industry),
            None => Phase::Idle,
        }
    }

    /// The open prompt, if any
    pub fn pending(&self) -> Option<Confirmation> {
        self.pending
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Fields visible for the current selection
    pub fn layout(&self) -> FormLayout {
        FormLayout::compute(self.industry, &self.scopes)
    }

    fn ensure_no_prompt(&self) -> FormResult<()> {
        match self.pending {
            Some(confirmation) => Err(FormError::confirmation_pending(confirmation.prompt())),
            None => Ok(()),
        }
    }

    fn ask(&mut self, confirmation: Confirmation) -> Outcome {
        tracing::debug!(?confirmation, "confirmation requested");
        self.pending = Some(confirmation);
        Outcome::ConfirmationRequired(confirmation)
    }

    /// Choose the industry.
    ///
    /// Switching away from an industry discards every entered value, so it
    /// asks first unless the form is still empty.
    pub fn select_industry(&mut self, industry: Industry) -> FormResult<Outcome> {
        self.ensure_no_prompt()?;

        if self.industry == Some(industry) {
            return Ok(Outcome::Unchanged);
        }
        if self.config.confirm_industry_change && !self.data.is_empty() {
            return Ok(self.ask(Confirmation::ChangeIndustry { to: industry }));
        }

        self.change_industry(industry);
        Ok(Outcome::Applied)
    }

    fn change_industry(&mut self, industry: Industry) {
        tracing::debug!(from = ?self.industry, to = %industry, "industry changed");
        self.industry = Some(industry);
        self.data.clear();
    }

    /// Add `scope` if absent, remove it if present.
    ///
    /// Values of fields hidden by the change are kept.
    pub fn toggle_scope(&mut self, scope: Scope) -> FormResult<Outcome> {
        self.ensure_no_prompt()?;

        let selected = self.scopes.toggle(scope);
        tracing::debug!(%scope, selected, scopes = %self.scopes, "scope toggled");
        if self.scopes.is_empty() {
            tracing::warn!("no emission scope selected");
        }
        Ok(Outcome::Applied)
    }

    /// Write one field value.
    ///
    /// Only fields the current layout shows can be edited. Fields of a
    /// deselected scope fail with [`FormError::FieldHidden`]; industry
    /// fields are checked against the selected industry.
    pub fn edit(&mut self, edit: FieldEdit) -> FormResult<()> {
        self.ensure_no_prompt()?;

        let field = edit.field();
        if let Some(scope) = field.required_scope() {
            if !self.scopes.contains(scope) {
                return Err(FormError::field_hidden(field.key(), scope.display_name()));
            }
        }
        self.data.apply(edit, self.industry)?;
        tracing::trace!(%field, "field edited");
        Ok(())
    }

    /// Parse `value` for the field named `key` and write it
    pub fn set(&mut self, key: &str, value: &str) -> FormResult<()> {
        let field = crate::fields::Field::from_key(key)?;
        self.edit(FieldEdit::parse(field, value)?)
    }

    /// Validate and report the result with a notification.
    ///
    /// A successful save logs a [`SaveReceipt`]; the form is left as is.
    pub fn save(&mut self, now: Instant) -> FormResult<SaveOutcome> {
        self.ensure_no_prompt()?;

        if !self.data.validate() {
            tracing::info!(session_id = %self.session_id, "save rejected by validation");
            let ticket = self
                .notifications
                .show(NotificationKind::Error, SAVE_ERROR_MESSAGE, now);
            return Ok(SaveOutcome {
                ticket,
                receipt: None,
            });
        }

        let receipt = self.receipt();
        match serde_json::to_string(&receipt) {
            Ok(json) => tracing::info!(receipt = %json, "emissions data saved"),
            Err(e) => tracing::warn!(error = %e, "could not encode save receipt"),
        }
        let ticket = self
            .notifications
            .show(NotificationKind::Success, SAVE_SUCCESS_MESSAGE, now);

        Ok(SaveOutcome {
            ticket,
            receipt: Some(receipt),
        })
    }

    /// Snapshot of the visible, entered fields
    pub fn receipt(&self) -> SaveReceipt {
        SaveReceipt {
            session_id: self.session_id,
            saved_at: Utc::now(),
            industry: self.industry,
            scopes: self.scopes.clone(),
            data: self.data.record_of(self.layout().fields()),
        }
    }

    /// Ask to return the form to its initial state
    pub fn request_reset(&mut self) -> FormResult<Outcome> {
        self.ensure_no_prompt()?;

        if self.config.confirm_reset {
            return Ok(self.ask(Confirmation::Reset));
        }
        self.reset();
        Ok(Outcome::Applied)
    }

    fn reset(&mut self) {
        tracing::debug!(session_id = %self.session_id, "form reset");
        self.industry = None;
        self.scopes = ScopeSet::all();
        self.data.clear();
    }

    /// Answer the open prompt
    pub fn resolve(&mut self, decision: Decision) -> FormResult<Outcome> {
        let confirmation = self.pending.take().ok_or(FormError::NoPendingConfirmation)?;
        tracing::debug!(?confirmation, ?decision, "confirmation resolved");

        if decision == Decision::Decline {
            return Ok(Outcome::Declined);
        }
        match confirmation {
            Confirmation::ChangeIndustry { to } => self.change_industry(to),
            Confirmation::Reset => self.reset(),
        }
        Ok(Outcome::Applied)
    }

    /// Expire the notification if its deadline passed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifications.tick(now)
    }

    /// Hide the notification if `ticket` is still the one showing
    pub fn dismiss_notification(&mut self, ticket: NotificationTicket) -> bool {
        self.notifications.dismiss(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{CommonInput, Field, PlasticsInput};

    fn electricity(value: &str) -> FieldEdit {
        FieldEdit::Common(CommonInput::Electricity, value.to_string())
    }

    #[test]
    fn test_initial_state() {
        let form = MeasurementForm::default();
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.scopes(), &ScopeSet::all());
        assert!(form.data().is_empty());
        assert!(form.pending().is_none());
        assert!(form.notification().is_none());
    }

    #[test]
    fn test_select_industry_on_empty_form_applies() {
        let mut form = MeasurementForm::default();
        assert_eq!(form.select_industry(Industry::Apparel).unwrap(), Outcome::Applied);
        assert_eq!(form.select_industry(Industry::Plastics).unwrap(), Outcome::Applied);
        assert_eq!(form.phase(), Phase::Configuring(Industry::Plastics));
    }

    #[test]
    fn test_same_industry_is_noop() {
        let mut form = MeasurementForm::default();
        form.select_industry(Industry::Apparel).unwrap();
        form.edit(electricity("5")).unwrap();
        assert_eq!(form.select_industry(Industry::Apparel).unwrap(), Outcome::Unchanged);
        assert!(form.pending().is_none());
    }

    #[test]
    fn test_accepting_industry_change_clears_data() {
        let mut form = MeasurementForm::default();
        form.select_industry(Industry::Plastics).unwrap();
        form.edit(FieldEdit::Plastics(PlasticsInput::Additives, "3".into()))
            .unwrap();

        let outcome = form.select_industry(Industry::Apparel).unwrap();
        assert_eq!(
            outcome,
            Outcome::ConfirmationRequired(Confirmation::ChangeIndustry {
                to: Industry::Apparel
            })
        );
        assert_eq!(form.resolve(Decision::Accept).unwrap(), Outcome::Applied);
        assert_eq!(form.industry(), Some(Industry::Apparel));
        assert!(form.data().is_empty());
    }

    #[test]
    fn test_pending_prompt_blocks_mutations() {
        let mut form = MeasurementForm::default();
        form.request_reset().unwrap();

        let err = form.edit(electricity("1")).unwrap_err();
        assert!(err.is_blocked_by_prompt());
        assert!(form.toggle_scope(Scope::Scope2).is_err());
        assert!(form.save(Instant::now()).is_err());
        assert!(form.select_industry(Industry::Apparel).is_err());

        form.resolve(Decision::Decline).unwrap();
        assert!(form.edit(electricity("1")).is_ok());
    }

    #[test]
    fn test_resolve_without_prompt() {
        let mut form = MeasurementForm::default();
        assert_eq!(
            form.resolve(Decision::Accept).unwrap_err(),
            FormError::NoPendingConfirmation
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut form = MeasurementForm::default();
        form.select_industry(Industry::SolarPanelManufacturing).unwrap();
        form.toggle_scope(Scope::Scope2).unwrap();
        form.edit(electricity("10")).unwrap();

        form.request_reset().unwrap();
        form.resolve(Decision::Accept).unwrap();

        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.scopes(), &ScopeSet::all());
        assert!(form.data().is_empty());
    }

    #[test]
    fn test_unconfirmed_config_applies_immediately() {
        let config = FormConfig {
            confirm_industry_change: false,
            confirm_reset: false,
            ..FormConfig::default()
        };
        let mut form = MeasurementForm::new(config);
        form.select_industry(Industry::Apparel).unwrap();
        form.edit(electricity("7")).unwrap();

        assert_eq!(form.select_industry(Industry::Plastics).unwrap(), Outcome::Applied);
        assert!(form.data().is_empty());

        form.edit(electricity("7")).unwrap();
        assert_eq!(form.request_reset().unwrap(), Outcome::Applied);
        assert_eq!(form.industry(), None);
    }

    #[test]
    fn test_save_receipt_holds_visible_values_only() {
        let mut form = MeasurementForm::default();
        form.set("electricity", "1200").unwrap();
        form.set("fuelCombustion", "40").unwrap();
        form.toggle_scope(Scope::Scope1).unwrap();

        let outcome = form.save(Instant::now()).unwrap();
        assert!(outcome.is_saved());
        let receipt = outcome.receipt.unwrap();
        assert_eq!(receipt.data.get("electricity").map(String::as_str), Some("1200"));
        assert!(!receipt.data.contains_key("fuelCombustion"));
        assert_eq!(receipt.session_id, form.session_id());

        // Hidden value is still held by the form
        assert_eq!(
            form.data().value(Field::Common(CommonInput::FuelCombustion)),
            Some("40")
        );
    }

    #[test]
    fn test_save_shows_success_notification() {
        let now = Instant::now();
        let mut form = MeasurementForm::default();
        let outcome = form.save(now).unwrap();

        let notification = form.notification().unwrap();
        assert_eq!(notification.ticket, outcome.ticket);
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, SAVE_SUCCESS_MESSAGE);

        assert!(form.tick(now + form.config().notification_duration()));
        assert!(form.notification().is_none());
    }

    #[test]
    fn test_edit_rejects_fields_of_deselected_scope() {
        let mut form = MeasurementForm::default();
        form.toggle_scope(Scope::Scope1).unwrap();
        form.toggle_scope(Scope::Scope3).unwrap();

        let err = form.set("fuelCombustion", "40").unwrap_err();
        assert_eq!(err, FormError::field_hidden("fuelCombustion", "Scope 1"));
        assert_eq!(
            form.set("rawMaterialsUnit", "kg").unwrap_err().error_code(),
            "FIELD_HIDDEN"
        );
        assert!(form.data().is_empty());

        // No prompt: the rejected edits left the form empty
        assert_eq!(form.select_industry(Industry::Apparel).unwrap(), Outcome::Applied);

        form.toggle_scope(Scope::Scope1).unwrap();
        form.set("fuelCombustion", "40").unwrap();
        assert_eq!(
            form.receipt().data.get("fuelCombustion").map(String::as_str),
            Some("40")
        );
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut form = MeasurementForm::default();
        let err = form.set("carbonTax", "1").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_receipt_serializes_wire_names() {
        let mut form = MeasurementForm::default();
        form.select_industry(Industry::SolarPanelManufacturing).unwrap();
        let json = serde_json::to_string(&form.receipt()).unwrap();
        assert!(json.contains(r#""industry":"Solar Panel Manufacturing""#));
        assert!(json.contains(r#""scopes":["Scope 1","Scope 2","Scope 3"]"#));
        assert!(json.contains("sessionId"));
    }
}
