//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::BackendKind;

/// Default application name attached to notifications
pub const DEFAULT_APP_NAME: &str = "native-notify";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub backend: Option<String>,
    pub json: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            backend: Some(BackendKind::default().to_string()),
            json: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            backend: other.backend.or(self.backend),
            json: other.json.or(self.json),
        }
    }

    /// Get app name, or the crate default if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get backend as parsed BackendKind, or default if not set/invalid
    pub fn backend_or_default(&self) -> BackendKind {
        self.backend
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get json output setting, or false if not set
    pub fn json_or_default(&self) -> bool {
        self.json.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.app_name, Some("native-notify".to_string()));
        assert_eq!(config.backend, Some("auto".to_string()));
        assert_eq!(config.json, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.app_name.is_none());
        assert!(config.backend.is_none());
        assert!(config.json.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            app_name: Some("base".to_string()),
            backend: Some("auto".to_string()),
            ..Default::default()
        };
        let other = AppConfig {
            app_name: Some("other".to_string()),
            backend: None, // Should not override
            json: Some(true),
        };

        let merged = base.merge(other);

        assert_eq!(merged.app_name, Some("other".to_string()));
        assert_eq!(merged.backend, Some("auto".to_string()));
        assert_eq!(merged.json, Some(true));
    }

    #[test]
    fn backend_or_default_parses() {
        let config = AppConfig {
            backend: Some("unsupported".to_string()),
            ..Default::default()
        };
        assert_eq!(config.backend_or_default(), BackendKind::Unsupported);
    }

    #[test]
    fn backend_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            backend: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(config.backend_or_default(), BackendKind::Auto);
    }

    #[test]
    fn scalar_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.app_name_or_default(), "native-notify");
        assert!(!config.json_or_default());
    }
}
