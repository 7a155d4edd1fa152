//! Responsive configuration (`vista.toml`)
//!
//! ```toml
//! invalid_input = "reject"
//!
//! [breakpoints]
//! tablet = 600.0
//! desktop = 900.0
//! ```
//!
//! Every field is optional; omitted fields take the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::breakpoints::Breakpoints;
use crate::category::DeviceCategory;
use crate::error::{check_dimension, ResponsiveError, Result};
use crate::viewport::Viewport;

/// Conventional file name for the configuration
pub const CONFIG_FILE_NAME: &str = "vista.toml";

/// What to do with a negative or non-finite width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// Treat the width as 0 (mobile)
    #[default]
    Clamp,
    /// Return [`ResponsiveError::InvalidInput`]
    Reject,
}

/// Breakpoints plus the invalid-input policy.
///
/// Both fields are always valid: [`Breakpoints`] can only be built checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveConfig {
    #[serde(default)]
    pub invalid_input: InvalidInputPolicy,
    #[serde(default)]
    pub breakpoints: Breakpoints,
}

impl ResponsiveConfig {
    pub fn new(breakpoints: Breakpoints, invalid_input: InvalidInputPolicy) -> Result<Self> {
        breakpoints.validate()?;
        Ok(Self {
            breakpoints,
            invalid_input,
        })
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ResponsiveConfig =
            toml::from_str(content).map_err(|e| ResponsiveError::Config(e.to_string()))?;
        config.breakpoints.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ResponsiveError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            tablet = config.breakpoints.tablet(),
            desktop = config.breakpoints.desktop(),
            "loaded responsive config"
        );
        Ok(config)
    }

    /// Load `vista.toml` from a directory, falling back to defaults if absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(dir = %dir.display(), "no {} found, using defaults", CONFIG_FILE_NAME);
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ResponsiveError::Config(e.to_string()))
    }

    /// Classify a width according to the configured policy
    pub fn classify(&self, width: f32) -> Result<DeviceCategory> {
        match self.invalid_input {
            InvalidInputPolicy::Clamp => Ok(self.breakpoints.classify(width)),
            InvalidInputPolicy::Reject => self.breakpoints.try_classify(width),
        }
    }

    /// Build a viewport from host-reported dimensions under the configured
    /// policy.
    ///
    /// `Clamp` turns negative and NaN dimensions into 0; `Reject` fails on
    /// them. Infinite dimensions are rejected under both policies since
    /// nothing can be laid out in them.
    pub fn viewport(&self, width: f32, height: f32) -> Result<Viewport> {
        match self.invalid_input {
            InvalidInputPolicy::Clamp => {
                let width = clamp_dimension("width", width)?;
                let height = clamp_dimension("height", height)?;
                Viewport::new(width, height)
            }
            InvalidInputPolicy::Reject => Viewport::new(width, height),
        }
    }

    /// Category of a viewport. Viewports are validated on construction, so
    /// this never fails.
    pub fn category_of(&self, viewport: &Viewport) -> DeviceCategory {
        self.breakpoints.classify(viewport.width())
    }
}

fn clamp_dimension(what: &'static str, value: f32) -> Result<f32> {
    if value == f32::INFINITY {
        return check_dimension(what, value);
    }
    if value >= 0.0 {
        Ok(value)
    } else {
        tracing::debug!(what, value, "clamping invalid viewport dimension to 0");
        Ok(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = ResponsiveConfig::from_toml_str("").unwrap();
        assert_eq!(config, ResponsiveConfig::default());
        assert_eq!(config.breakpoints, Breakpoints::DEFAULT);
        assert_eq!(config.invalid_input, InvalidInputPolicy::Clamp);
    }

    #[test]
    fn test_parse_full_document() {
        let config = ResponsiveConfig::from_toml_str(
            r#"
            invalid_input = "reject"

            [breakpoints]
            tablet = 480.0
            desktop = 1024.0
            "#,
        )
        .unwrap();
        assert_eq!(config.invalid_input, InvalidInputPolicy::Reject);
        assert_eq!(config.breakpoints, Breakpoints::new(480.0, 1024.0).unwrap());
    }

    #[test]
    fn test_partial_breakpoints_keep_defaults() {
        let config = ResponsiveConfig::from_toml_str("[breakpoints]\ndesktop = 1200.0\n").unwrap();
        assert_eq!(config.breakpoints.tablet(), 600.0);
        assert_eq!(config.breakpoints.desktop(), 1200.0);
    }

    #[test]
    fn test_invalid_documents() {
        match ResponsiveConfig::from_toml_str("[breakpoints]\ntablet = 1000.0\n") {
            Err(ResponsiveError::Config(message)) => {
                assert!(message.contains("Invalid breakpoints"), "{}", message)
            }
            other => panic!("expected a config error, got {:?}", other),
        }
        assert!(matches!(
            ResponsiveConfig::from_toml_str("invalid_input = \"ignore\""),
            Err(ResponsiveError::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ResponsiveConfig::new(
            Breakpoints::new(500.0, 1100.0).unwrap(),
            InvalidInputPolicy::Reject,
        )
        .unwrap();
        let text = config.to_toml().unwrap();
        assert_eq!(ResponsiveConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_policy_dispatch() {
        let clamp = ResponsiveConfig::default();
        assert_eq!(clamp.classify(-5.0), Ok(DeviceCategory::Mobile));

        let reject = ResponsiveConfig {
            invalid_input: InvalidInputPolicy::Reject,
            ..Default::default()
        };
        assert!(reject.classify(-5.0).is_err());
        assert_eq!(reject.classify(950.0), Ok(DeviceCategory::Desktop));
    }

    #[test]
    fn test_viewport_clamps_under_clamp_policy() {
        let config = ResponsiveConfig::default();
        let viewport = config.viewport(-10.0, 100.0).unwrap();
        assert_eq!(viewport.size(), (0.0, 100.0));
        assert_eq!(config.category_of(&viewport), DeviceCategory::Mobile);

        let viewport = config.viewport(800.0, f32::NAN).unwrap();
        assert_eq!(viewport.size(), (800.0, 0.0));

        assert!(matches!(
            config.viewport(f32::INFINITY, 100.0),
            Err(ResponsiveError::InvalidInput { what: "width", .. })
        ));
    }

    #[test]
    fn test_viewport_rejects_under_reject_policy() {
        let config = ResponsiveConfig {
            invalid_input: InvalidInputPolicy::Reject,
            ..Default::default()
        };
        assert_eq!(
            config.viewport(-10.0, 100.0),
            Err(ResponsiveError::InvalidInput {
                what: "width",
                value: -10.0
            })
        );
        assert!(config.viewport(800.0, f32::NAN).is_err());
        assert_eq!(config.viewport(800.0, 600.0).map(|v| v.width()), Ok(800.0));
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let dir = std::env::temp_dir().join("vista_config_test_missing");
        let config = ResponsiveConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config, ResponsiveConfig::default());
    }

    #[test]
    fn test_load_from_path() {
        let dir = std::env::temp_dir().join(format!("vista_config_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[breakpoints]\ntablet = 700.0\n").unwrap();

        let config = ResponsiveConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.breakpoints.tablet(), 700.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
