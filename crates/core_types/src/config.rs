//! App configuration.

use serde::{Deserialize, Serialize};

use crate::Result;

/// How pages pick a role when the navigation payload has none.
///
/// The default consults the login selection before the page default, so a
/// logged-in teacher keeps the teacher view on pages reached without a
/// payload. [`RoleResolution::PayloadOnly`] restores strict per-page
/// defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleResolution {
    /// Payload, then the page default. The holder is never consulted.
    PayloadOnly,
    /// Payload, then the holder's login selection, then the page default.
    #[default]
    PayloadThenHolder,
}

/// Stand-in values for voice notes until a recorder is wired up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicePlaceholder {
    /// Note content recorded for every clip
    pub content: String,
    /// Clip length in seconds
    pub duration_secs: u32,
}

impl Default for VoicePlaceholder {
    fn default() -> Self {
        Self {
            content: "Voice memo recording".to_string(),
            duration_secs: 30,
        }
    }
}

/// Configuration shared by the frontend and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Brand shown in headers and greetings (default: WeeWoolies)
    pub school_name: String,
    /// Role resolution policy (default: payload_then_holder)
    pub role_resolution: RoleResolution,
    /// Voice note placeholder values
    pub voice_placeholder: VoicePlaceholder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            school_name: "WeeWoolies".to_string(),
            role_resolution: RoleResolution::default(),
            voice_placeholder: VoicePlaceholder::default(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.school_name, "WeeWoolies");
        assert_eq!(config.role_resolution, RoleResolution::PayloadThenHolder);
        assert_eq!(config.voice_placeholder.duration_secs, 30);
        assert_eq!(config.voice_placeholder.content, "Voice memo recording");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            AppConfig::from_json_str(r#"{"role_resolution": "payload_only"}"#).unwrap();
        assert_eq!(config.role_resolution, RoleResolution::PayloadOnly);
        assert_eq!(config.school_name, "WeeWoolies");
        assert_eq!(config.voice_placeholder, VoicePlaceholder::default());
    }

    #[test]
    fn test_nested_partial_json() {
        let config =
            AppConfig::from_json_str(r#"{"voice_placeholder": {"duration_secs": 12}}"#).unwrap();
        assert_eq!(config.voice_placeholder.duration_secs, 12);
        assert_eq!(config.voice_placeholder.content, "Voice memo recording");
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = AppConfig::from_json_str(r#"{"role_resolution": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
