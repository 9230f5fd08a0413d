//! # Form Configuration
//!
//! Behaviour knobs shared by the front-ends, read from a JSON file. Every
//! key is optional:
//!
//! ```json
//! {
//!   "notification_ms": 3000,
//!   "confirm_industry_change": true,
//!   "confirm_reset": true
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{FormError, FormResult};

/// Default auto-dismiss delay for notifications
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;

/// Form behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// How long a notification stays visible (milliseconds)
    pub notification_ms: u64,

    /// Ask before an industry change discards entered data
    pub confirm_industry_change: bool,

    /// Ask before the reset action discards everything
    pub confirm_reset: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            notification_ms: DEFAULT_NOTIFICATION_MS,
            confirm_industry_change: true,
            confirm_reset: true,
        }
    }
}

impl FormConfig {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Parse a configuration document
    pub fn from_json(json: &str) -> FormResult<Self> {
        serde_json::from_str(json).map_err(|e| FormError::config(e.to_string()))
    }

    /// Read a configuration file
    pub fn load(path: &Path) -> FormResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| FormError::config(format!("cannot read '{}': {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Read `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> FormResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(FormConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.notification_duration(), Duration::from_secs(3));
        assert!(config.confirm_industry_change);
        assert!(config.confirm_reset);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = FormConfig::from_json(r#"{ "notification_ms": 500 }"#).unwrap();
        assert_eq!(config.notification_ms, 500);
        assert!(config.confirm_reset);
    }

    #[test]
    fn test_malformed_document() {
        let err = FormConfig::from_json("{ notification_ms: }").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = FormConfig::load(Path::new("/nonexistent/ripple.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
        assert_eq!(FormConfig::load_or_default(None).unwrap(), FormConfig::default());
    }
}
