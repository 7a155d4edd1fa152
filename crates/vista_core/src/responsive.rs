//! Stateless responsive helpers
//!
//! Free functions over the default [`Breakpoints`], plus the field-less
//! [`Responsive`] type for callers that prefer `Responsive::classify(w)`.
//! Helpers that need the screen take the [`Viewport`] explicitly; there is no
//! ambient build context to read it from.

use crate::breakpoints::Breakpoints;
use crate::category::DeviceCategory;
use crate::error::Result;
use crate::value::{self, ResponsiveValue};
use crate::viewport::Viewport;

/// Classify a width against the default breakpoints.
///
/// Negative widths and NaN are clamped to 0 and classify as mobile. Use
/// [`try_classify`] to reject them instead.
pub fn classify(width: f32) -> DeviceCategory {
    Breakpoints::DEFAULT.classify(width)
}

/// Classify a width, rejecting negative or non-finite input.
pub fn try_classify(width: f32) -> Result<DeviceCategory> {
    Breakpoints::DEFAULT.try_classify(width)
}

/// `dimension * percent / 100`. `percent` is not bounded, so values outside
/// `0..=100` extrapolate.
pub fn percent_of(dimension: f32, percent: f32) -> f32 {
    dimension * percent / 100.0
}

/// Category of a viewport against the default breakpoints
pub fn category_of(viewport: &Viewport) -> DeviceCategory {
    classify(viewport.width())
}

/// Percentage of the viewport width
pub fn width_percent(viewport: &Viewport, percent: f32) -> f32 {
    percent_of(viewport.width(), percent)
}

/// Percentage of the viewport height
pub fn height_percent(viewport: &Viewport, percent: f32) -> f32 {
    percent_of(viewport.height(), percent)
}

pub fn is_mobile(viewport: &Viewport) -> bool {
    category_of(viewport).is_mobile()
}

pub fn is_tablet(viewport: &Viewport) -> bool {
    category_of(viewport).is_tablet()
}

pub fn is_desktop(viewport: &Viewport) -> bool {
    category_of(viewport).is_desktop()
}

/// Resolve a responsive value for a viewport
pub fn value_for<'a, T>(viewport: &Viewport, value: &'a ResponsiveValue<T>) -> &'a T {
    value.resolve(category_of(viewport))
}

/// Namespace for the responsive helpers. Carries no state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Responsive;

impl Responsive {
    pub fn classify(width: f32) -> DeviceCategory {
        classify(width)
    }

    pub fn try_classify(width: f32) -> Result<DeviceCategory> {
        try_classify(width)
    }

    pub fn percent_of(dimension: f32, percent: f32) -> f32 {
        percent_of(dimension, percent)
    }

    pub fn select<T>(
        category: DeviceCategory,
        mobile: T,
        tablet: Option<T>,
        desktop: Option<T>,
    ) -> T {
        value::select(category, mobile, tablet, desktop)
    }

    /// Select directly from a viewport
    pub fn select_for<T>(
        viewport: &Viewport,
        mobile: T,
        tablet: Option<T>,
        desktop: Option<T>,
    ) -> T {
        value::select(category_of(viewport), mobile, tablet, desktop)
    }
}
