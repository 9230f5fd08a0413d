//! # Error Types
//!
//! Structured error types for ripple_core. Nothing in the form is fatal:
//! every error describes an operation the controller refused, and the
//! front-ends report it to the user and carry on.
//!
//! ## Example
//!
//! ```rust
//! use ripple_core::errors::{FormError, FormResult};
//!
//! fn require_known(key: &str) -> FormResult<()> {
//!     if key.is_empty() {
//!         return Err(FormError::unknown_field(key));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(require_known("").unwrap_err().error_code(), "UNKNOWN_FIELD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ripple_core operations
pub type FormResult<T> = Result<T, FormError>;

/// Structured error type for form operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum FormError {
    /// A confirmation prompt is open; it must be answered first
    #[error("A confirmation is pending: {prompt}")]
    ConfirmationPending { prompt: String },

    /// `resolve` was called with nothing to confirm
    #[error("There is no pending confirmation to resolve")]
    NoPendingConfirmation,

    /// The edited field belongs to another industry's section
    #[error("Field '{field}' belongs to {field_industry}, but the selected industry is {industry}")]
    IndustryMismatch {
        field: String,
        field_industry: String,
        industry: String,
    },

    /// An industry field was edited before any industry was chosen
    #[error("Field '{field}' requires an industry to be selected")]
    NoIndustrySelected { field: String },

    /// The field is not shown because its scope is deselected
    #[error("Field '{field}' is hidden while {scope} is not selected")]
    FieldHidden { field: String, scope: String },

    /// No field is registered under this key
    #[error("Unknown field: {key}")]
    UnknownField { key: String },

    /// The value is not one of the options of a choice field
    #[error("Invalid choice for '{field}': {value} (expected one of: {expected})")]
    InvalidChoice {
        field: String,
        value: String,
        expected: String,
    },

    /// The string does not name a supported industry
    #[error("Unknown industry: {value}")]
    UnknownIndustry { value: String },

    /// The string does not name a reporting scope
    #[error("Unknown scope: {value}")]
    UnknownScope { value: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl FormError {
    /// Create a ConfirmationPending error
    pub fn confirmation_pending(prompt: impl Into<String>) -> Self {
        FormError::ConfirmationPending {
            prompt: prompt.into(),
        }
    }

    /// Create an IndustryMismatch error
    pub fn industry_mismatch(
        field: impl Into<String>,
        field_industry: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        FormError::IndustryMismatch {
            field: field.into(),
            field_industry: field_industry.into(),
            industry: industry.into(),
        }
    }

    /// Create a NoIndustrySelected error
    pub fn no_industry_selected(field: impl Into<String>) -> Self {
        FormError::NoIndustrySelected {
            field: field.into(),
        }
    }

    /// Create a FieldHidden error
    pub fn field_hidden(field: impl Into<String>, scope: impl Into<String>) -> Self {
        FormError::FieldHidden {
            field: field.into(),
            scope: scope.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(key: impl Into<String>) -> Self {
        FormError::UnknownField { key: key.into() }
    }

    /// Create an InvalidChoice error
    pub fn invalid_choice(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        FormError::InvalidChoice {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an UnknownIndustry error
    pub fn unknown_industry(value: impl Into<String>) -> Self {
        FormError::UnknownIndustry {
            value: value.into(),
        }
    }

    /// Create an UnknownScope error
    pub fn unknown_scope(value: impl Into<String>) -> Self {
        FormError::UnknownScope {
            value: value.into(),
        }
    }

    /// Create a Config error
    pub fn config(reason: impl Into<String>) -> Self {
        FormError::Config {
            reason: reason.into(),
        }
    }

    /// Whether the user can get past this error by answering the open prompt
    pub fn is_blocked_by_prompt(&self) -> bool {
        matches!(self, FormError::ConfirmationPending { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::ConfirmationPending { .. } => "CONFIRMATION_PENDING",
            FormError::NoPendingConfirmation => "NO_PENDING_CONFIRMATION",
            FormError::IndustryMismatch { .. } => "INDUSTRY_MISMATCH",
            FormError::NoIndustrySelected { .. } => "NO_INDUSTRY_SELECTED",
            FormError::FieldHidden { .. } => "FIELD_HIDDEN",
            FormError::UnknownField { .. } => "UNKNOWN_FIELD",
            FormError::InvalidChoice { .. } => "INVALID_CHOICE",
            FormError::UnknownIndustry { .. } => "UNKNOWN_INDUSTRY",
            FormError::UnknownScope { .. } => "UNKNOWN_SCOPE",
            FormError::Config { .. } => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FormError::industry_mismatch("resinType", "Plastics", "Apparel");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"IndustryMismatch\""));
        let roundtrip: FormError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FormError::unknown_field("x").error_code(), "UNKNOWN_FIELD");
        assert_eq!(
            FormError::NoPendingConfirmation.error_code(),
            "NO_PENDING_CONFIRMATION"
        );
        assert!(FormError::confirmation_pending("Proceed?").is_blocked_by_prompt());
        assert_eq!(
            FormError::field_hidden("fuelCombustion", "Scope 1").error_code(),
            "FIELD_HIDDEN"
        );
    }

    #[test]
    fn test_invalid_choice_lists_options() {
        let error = FormError::invalid_choice("fiberType", "silk", &["cotton", "wool"]);
        assert_eq!(
            error.to_string(),
            "Invalid choice for 'fiberType': silk (expected one of: cotton, wool)"
        );
    }
}
