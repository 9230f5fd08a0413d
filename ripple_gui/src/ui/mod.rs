//! UI module for the Carbon Ripples GUI
//!
//! # Page Structure
//! - `shell` - Page background, header, form card and footer
//! - `industry_selection` - Industry radio group
//! - `scope_selection` - Scope checkboxes and the empty-scope warning
//! - `common_section` - Common Data fields
//! - `industry_section` - Fields of the selected industry
//! - `actions` - Reset / Save buttons
//!
//! # Overlays
//! - `notification` - Auto-dismissing save result
//! - `modal` - Confirmation dialog
//!
//! # Shared Components
//! - `field` - Labeled inputs, dropdowns and info tooltips

pub mod shell;
pub mod industry_selection;
pub mod scope_selection;
pub mod common_section;
pub mod industry_section;
pub mod actions;

pub mod notification;
pub mod modal;

pub mod field;
