//! # ripple_core - Emissions Measurement Form Model
//!
//! `ripple_core` is the front-end independent heart of Carbon Ripples: the
//! catalog of greenhouse-gas inputs an organisation reports, the rules that
//! decide which of them are shown, and the controller that owns a form
//! session. The GUI and CLI are thin shells around it.
//!
//! ## Design Philosophy
//!
//! - **Typed**: every field is a variant of [`Field`], every dropdown an enum
//! - **JSON-First**: values, layouts and receipts serialize with their wire names
//! - **Non-blocking prompts**: destructive actions return a confirmation request
//!   instead of waiting on a dialog
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Instant;
//! use ripple_core::{Industry, MeasurementForm};
//!
//! let mut form = MeasurementForm::default();
//! form.select_industry(Industry::Plastics).unwrap();
//! form.set("electricity", "1200").unwrap();
//! form.set("resinType", "PET").unwrap();
//!
//! let saved = form.save(Instant::now()).unwrap();
//! assert_eq!(saved.receipt.unwrap().data["resinType"], "PET");
//! ```
//!
//! ## Modules
//!
//! - [`controller`] - Form session state machine
//! - [`fields`] - Field catalog: keys, labels, units, tooltips
//! - [`form`] - Entered values and typed edits
//! - [`layout`] - Field visibility for an industry/scope selection
//! - [`notification`] - Auto-dismissing notifications
//! - [`industry`], [`scope`], [`choices`] - Selection and dropdown enums
//! - [`config`] - Behaviour settings
//! - [`errors`] - Structured error types

pub mod choices;
pub mod config;
pub mod controller;
pub mod errors;
pub mod fields;
pub mod form;
pub mod industry;
pub mod layout;
pub mod notification;
pub mod scope;

// Re-export commonly used types at crate root for convenience
pub use config::FormConfig;
pub use controller::{Confirmation, Decision, MeasurementForm, Outcome, Phase, SaveReceipt};
pub use errors::{FormError, FormResult};
pub use fields::Field;
pub use form::{FieldEdit, FormState};
pub use industry::Industry;
pub use layout::FormLayout;
pub use scope::{Scope, ScopeSet};
