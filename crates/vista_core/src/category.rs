//! Device size categories
//!
//! A [`DeviceCategory`] is the coarse classification that drives alternate
//! layout choices. Categories are ordered from smallest to largest, so
//! `category >= DeviceCategory::Tablet` reads as "tablet or wider".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResponsiveError;

/// Coarse screen-size classification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    /// Narrow viewports (phones)
    #[default]
    Mobile,
    /// Medium viewports (tablets, small windows)
    Tablet,
    /// Wide viewports (laptops, desktop windows)
    Desktop,
}

impl DeviceCategory {
    /// All categories, smallest first.
    pub const ALL: [DeviceCategory; 3] = [
        DeviceCategory::Mobile,
        DeviceCategory::Tablet,
        DeviceCategory::Desktop,
    ];

    /// Short lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            DeviceCategory::Mobile => "mobile",
            DeviceCategory::Tablet => "tablet",
            DeviceCategory::Desktop => "desktop",
        }
    }

    pub const fn is_mobile(self) -> bool {
        matches!(self, DeviceCategory::Mobile)
    }

    pub const fn is_tablet(self) -> bool {
        matches!(self, DeviceCategory::Tablet)
    }

    pub const fn is_desktop(self) -> bool {
        matches!(self, DeviceCategory::Desktop)
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceCategory {
    type Err = ResponsiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(DeviceCategory::Mobile),
            "tablet" => Ok(DeviceCategory::Tablet),
            "desktop" => Ok(DeviceCategory::Desktop),
            other => Err(ResponsiveError::Config(format!(
                "unknown device category '{}'",
                other
            ))),
        }
    }
}
