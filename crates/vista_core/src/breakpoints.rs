//! Width breakpoints
//!
//! | Category  | Default width range |
//! |-----------|---------------------|
//! | `Mobile`  | `width < 600`       |
//! | `Tablet`  | `600 <= width < 900`|
//! | `Desktop` | `width >= 900`      |
//!
//! Lower bounds are inclusive, so every non-negative width lands in exactly
//! one category.

use serde::{Deserialize, Serialize};

use crate::category::DeviceCategory;
use crate::error::{check_dimension, ResponsiveError, Result};

/// Width thresholds (logical pixels) separating the device categories.
///
/// Only constructed through [`Breakpoints::new`], [`Breakpoints::DEFAULT`], or
/// deserialization, all of which enforce `0 < tablet < desktop`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBreakpoints")]
pub struct Breakpoints {
    tablet: f32,
    desktop: f32,
}

/// Unchecked wire form; omitted thresholds take the defaults
#[derive(Deserialize)]
#[serde(default)]
struct RawBreakpoints {
    tablet: f32,
    desktop: f32,
}

impl Default for RawBreakpoints {
    fn default() -> Self {
        Self {
            tablet: Breakpoints::DEFAULT.tablet,
            desktop: Breakpoints::DEFAULT.desktop,
        }
    }
}

impl TryFrom<RawBreakpoints> for Breakpoints {
    type Error = ResponsiveError;

    fn try_from(raw: RawBreakpoints) -> Result<Self> {
        Self::new(raw.tablet, raw.desktop)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Breakpoints {
    pub const DEFAULT: Breakpoints = Breakpoints {
        tablet: 600.0,
        desktop: 900.0,
    };

    /// Custom thresholds. Both must be finite, positive, and `tablet < desktop`.
    pub fn new(tablet: f32, desktop: f32) -> Result<Self> {
        let breakpoints = Self { tablet, desktop };
        breakpoints.validate()?;
        Ok(breakpoints)
    }

    /// Minimum width of a tablet viewport
    pub fn tablet(&self) -> f32 {
        self.tablet
    }

    /// Minimum width of a desktop viewport
    pub fn desktop(&self) -> f32 {
        self.desktop
    }

    /// Check that the thresholds partition the width axis without gaps.
    pub fn validate(&self) -> Result<()> {
        let ok = self.tablet.is_finite()
            && self.desktop.is_finite()
            && self.tablet > 0.0
            && self.tablet < self.desktop;
        if ok {
            Ok(())
        } else {
            Err(ResponsiveError::InvalidBreakpoints {
                tablet: self.tablet,
                desktop: self.desktop,
            })
        }
    }

    /// Classify a width, clamping invalid input.
    ///
    /// Negative widths and NaN count as 0 (mobile); `+inf` is desktop.
    pub fn classify(&self, width: f32) -> DeviceCategory {
        let width = if width >= 0.0 {
            width
        } else {
            tracing::debug!(width, "clamping invalid viewport width to 0");
            0.0
        };
        self.category_for(width)
    }

    /// Classify a width, rejecting negative or non-finite input.
    pub fn try_classify(&self, width: f32) -> Result<DeviceCategory> {
        let width = check_dimension("width", width)?;
        Ok(self.category_for(width))
    }

    fn category_for(&self, width: f32) -> DeviceCategory {
        if width >= self.desktop {
            DeviceCategory::Desktop
        } else if width >= self.tablet {
            DeviceCategory::Tablet
        } else {
            DeviceCategory::Mobile
        }
    }

    /// Minimum width of a category
    pub fn threshold(&self, category: DeviceCategory) -> f32 {
        match category {
            DeviceCategory::Mobile => 0.0,
            DeviceCategory::Tablet => self.tablet,
            DeviceCategory::Desktop => self.desktop,
        }
    }

    /// All thresholds as `(category, min_width)` pairs, smallest first.
    pub fn thresholds(&self) -> [(DeviceCategory, f32); 3] {
        [
            (DeviceCategory::Mobile, 0.0),
            (DeviceCategory::Tablet, self.tablet),
            (DeviceCategory::Desktop, self.desktop),
        ]
    }

    /// True if `width` classifies as `min` or wider.
    pub fn at_least(&self, width: f32, min: DeviceCategory) -> bool {
        self.classify(width) >= min
    }

    /// True if `width` classifies within `min..=max`.
    pub fn between(&self, width: f32, min: DeviceCategory, max: DeviceCategory) -> bool {
        let category = self.classify(width);
        category >= min && category <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.classify(0.0), DeviceCategory::Mobile);
        assert_eq!(bp.classify(599.99), DeviceCategory::Mobile);
        assert_eq!(bp.classify(600.0), DeviceCategory::Tablet);
        assert_eq!(bp.classify(899.99), DeviceCategory::Tablet);
        assert_eq!(bp.classify(900.0), DeviceCategory::Desktop);
        assert_eq!(bp.classify(3840.0), DeviceCategory::Desktop);
    }

    #[test]
    fn test_clamp_policy() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.classify(-10.0), DeviceCategory::Mobile);
        assert_eq!(bp.classify(f32::NAN), DeviceCategory::Mobile);
        assert_eq!(bp.classify(f32::NEG_INFINITY), DeviceCategory::Mobile);
        assert_eq!(bp.classify(f32::INFINITY), DeviceCategory::Desktop);
    }

    #[test]
    fn test_reject_policy() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.try_classify(750.0), Ok(DeviceCategory::Tablet));
        assert!(matches!(
            bp.try_classify(-0.5),
            Err(ResponsiveError::InvalidInput { what: "width", .. })
        ));
        assert!(bp.try_classify(f32::INFINITY).is_err());
    }

    #[test]
    fn test_custom_breakpoints() {
        let bp = Breakpoints::new(480.0, 1024.0).unwrap();
        assert_eq!(bp.classify(500.0), DeviceCategory::Tablet);
        assert_eq!(bp.classify(1000.0), DeviceCategory::Tablet);
        assert_eq!(bp.classify(1024.0), DeviceCategory::Desktop);
    }

    #[test]
    fn test_invalid_breakpoints() {
        assert!(Breakpoints::new(900.0, 600.0).is_err());
        assert!(Breakpoints::new(600.0, 600.0).is_err());
        assert!(Breakpoints::new(0.0, 600.0).is_err());
        assert!(Breakpoints::new(600.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let bp: Breakpoints = toml::from_str("desktop = 1200.0\n").unwrap();
        assert_eq!(bp.tablet(), 600.0);
        assert_eq!(bp.desktop(), 1200.0);

        let inverted = toml::from_str::<Breakpoints>("tablet = 900.0\ndesktop = 600.0\n");
        assert!(inverted.is_err());
    }

    #[test]
    fn test_thresholds_and_ranges() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.threshold(DeviceCategory::Tablet), 600.0);
        assert_eq!(bp.thresholds()[2], (DeviceCategory::Desktop, 900.0));
        assert!(bp.at_least(700.0, DeviceCategory::Tablet));
        assert!(!bp.at_least(700.0, DeviceCategory::Desktop));
        assert!(bp.between(700.0, DeviceCategory::Mobile, DeviceCategory::Tablet));
        assert!(!bp.between(1200.0, DeviceCategory::Mobile, DeviceCategory::Tablet));
    }

    #[test]
    fn test_every_threshold_classifies_to_its_category() {
        let bp = Breakpoints::DEFAULT;
        for (category, min) in bp.thresholds() {
            assert_eq!(bp.classify(min), category);
        }
    }
}
