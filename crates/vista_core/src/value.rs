//! Breakpoint-dependent values
//!
//! A [`ResponsiveValue`] holds a mandatory mobile value and optional tablet
//! and desktop overrides. Resolution degrades gracefully: a missing value for
//! a wider category falls back to the next narrower one, ending at mobile.
//!
//! ```rust
//! use vista_core::{DeviceCategory, ResponsiveValue};
//!
//! let padding = ResponsiveValue::new(16.0).desktop(32.0);
//! assert_eq!(*padding.resolve(DeviceCategory::Tablet), 16.0);
//! assert_eq!(*padding.resolve(DeviceCategory::Desktop), 32.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::category::DeviceCategory;
use crate::error::{ResponsiveError, Result};

/// Pick among per-category candidates.
///
/// Returns `desktop` for desktop when supplied, else `tablet` for tablet or
/// desktop when supplied, else `mobile`.
pub fn select<T>(category: DeviceCategory, mobile: T, tablet: Option<T>, desktop: Option<T>) -> T {
    match (category, tablet, desktop) {
        (DeviceCategory::Desktop, _, Some(desktop)) => desktop,
        (DeviceCategory::Desktop | DeviceCategory::Tablet, Some(tablet), _) => tablet,
        _ => mobile,
    }
}

/// A value with per-category overrides
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponsiveValue<T> {
    mobile: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tablet: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    desktop: Option<T>,
}

impl<T> ResponsiveValue<T> {
    /// A value that is the same on every category until overridden
    pub fn new(mobile: T) -> Self {
        Self {
            mobile,
            tablet: None,
            desktop: None,
        }
    }

    /// Set the tablet override
    pub fn tablet(mut self, value: T) -> Self {
        self.tablet = Some(value);
        self
    }

    /// Set the desktop override
    pub fn desktop(mut self, value: T) -> Self {
        self.desktop = Some(value);
        self
    }

    /// Assemble from optional parts, e.g. values read from configuration.
    pub fn try_from_parts(
        mobile: Option<T>,
        tablet: Option<T>,
        desktop: Option<T>,
    ) -> Result<Self> {
        let mobile = mobile.ok_or(ResponsiveError::MissingBreakpointValue)?;
        Ok(Self {
            mobile,
            tablet,
            desktop,
        })
    }

    /// Most specific value supplied for `category`
    pub fn resolve(&self, category: DeviceCategory) -> &T {
        select(
            category,
            &self.mobile,
            self.tablet.as_ref(),
            self.desktop.as_ref(),
        )
    }

    /// Consume and return the most specific value for `category`
    pub fn into_resolved(self, category: DeviceCategory) -> T {
        select(category, self.mobile, self.tablet, self.desktop)
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ResponsiveValue<U> {
        ResponsiveValue {
            mobile: f(self.mobile),
            tablet: self.tablet.map(&mut f),
            desktop: self.desktop.map(&mut f),
        }
    }

    /// True if the value differs by category at all
    pub fn has_overrides(&self) -> bool {
        self.tablet.is_some() || self.desktop.is_some()
    }
}

impl<T: Clone> ResponsiveValue<T> {
    pub fn resolve_owned(&self, category: DeviceCategory) -> T {
        self.resolve(category).clone()
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_each_category() {
        assert_eq!(select(DeviceCategory::Mobile, 16, Some(20), Some(24)), 16);
        assert_eq!(select(DeviceCategory::Tablet, 16, Some(20), Some(24)), 20);
        assert_eq!(select(DeviceCategory::Desktop, 16, Some(20), Some(24)), 24);
    }

    #[test]
    fn test_select_fallbacks() {
        assert_eq!(select(DeviceCategory::Desktop, 16, None, Some(24)), 24);
        assert_eq!(select(DeviceCategory::Desktop, 16, Some(20), None), 20);
        assert_eq!(select(DeviceCategory::Desktop, 16, None, None), 16);
        assert_eq!(select(DeviceCategory::Tablet, 16, None, Some(24)), 16);
        assert_eq!(select::<i32>(DeviceCategory::Mobile, 16, None, None), 16);
    }

    #[test]
    fn test_select_is_idempotent() {
        for category in DeviceCategory::ALL {
            let first = select(category, "m", Some("t"), None);
            let second = select(category, "m", Some("t"), None);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_responsive_value_resolution() {
        let columns = ResponsiveValue::new(1).tablet(2).desktop(4);
        assert_eq!(*columns.resolve(DeviceCategory::Mobile), 1);
        assert_eq!(*columns.resolve(DeviceCategory::Tablet), 2);
        assert_eq!(*columns.resolve(DeviceCategory::Desktop), 4);
        assert_eq!(columns.clone().into_resolved(DeviceCategory::Tablet), 2);
        assert!(columns.has_overrides());
        assert!(!ResponsiveValue::from(3).has_overrides());
    }

    #[test]
    fn test_try_from_parts() {
        let value = ResponsiveValue::try_from_parts(Some(1), None, Some(3)).unwrap();
        assert_eq!(*value.resolve(DeviceCategory::Tablet), 1);
        assert_eq!(*value.resolve(DeviceCategory::Desktop), 3);

        assert_eq!(
            ResponsiveValue::<i32>::try_from_parts(None, Some(2), Some(3)),
            Err(ResponsiveError::MissingBreakpointValue)
        );
    }

    #[test]
    fn test_deserialize() {
        let value: ResponsiveValue<i32> = toml::from_str("mobile = 1\ndesktop = 3\n").unwrap();
        assert_eq!(*value.resolve(DeviceCategory::Mobile), 1);
        assert_eq!(*value.resolve(DeviceCategory::Tablet), 1);
        assert_eq!(*value.resolve(DeviceCategory::Desktop), 3);

        let missing_mobile = toml::from_str::<ResponsiveValue<i32>>("tablet = 2\n");
        assert!(missing_mobile.is_err());
    }

    #[test]
    fn test_map() {
        let font = ResponsiveValue::new(14).tablet(16).map(|px| px as f32 * 1.5);
        assert_eq!(font.resolve_owned(DeviceCategory::Desktop), 24.0);
        assert_eq!(font.resolve_owned(DeviceCategory::Mobile), 21.0);
    }
}
