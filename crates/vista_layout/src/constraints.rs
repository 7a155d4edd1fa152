//! Parent constraints and local classification
//!
//! A widget nested inside a sidebar should adapt to the space its parent
//! gives it, not to the whole screen. [`BoxConstraints`] carries the parent's
//! bounds and classifies against `max_width` with the same breakpoints used
//! for the screen.

use serde::Serialize;
use vista_core::{Breakpoints, DeviceCategory, Viewport};

/// A width/height pair in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Min/max bounds handed down by a parent. `max_*` may be `f32::INFINITY`
/// inside scrollables.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl BoxConstraints {
    pub const UNBOUNDED: BoxConstraints = BoxConstraints {
        min_width: 0.0,
        max_width: f32::INFINITY,
        min_height: 0.0,
        max_height: f32::INFINITY,
    };

    /// Exactly `size`
    pub fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            max_width: size.width,
            min_height: size.height,
            max_height: size.height,
        }
    }

    /// Anything up to `size`
    pub fn loose(size: Size) -> Self {
        Self {
            min_width: 0.0,
            max_width: size.width,
            min_height: 0.0,
            max_height: size.height,
        }
    }

    /// Root constraints for a screen: loose over the whole viewport
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self::loose(Size::new(viewport.width(), viewport.height()))
    }

    /// Category of the available width. Unbounded width is desktop.
    pub fn category(&self) -> DeviceCategory {
        self.category_with(&Breakpoints::DEFAULT)
    }

    pub fn category_with(&self, breakpoints: &Breakpoints) -> DeviceCategory {
        breakpoints.classify(self.max_width)
    }

    /// The ad-hoc "if maxWidth > threshold" check used for one-off switches
    pub fn is_wide(&self, threshold: f32) -> bool {
        self.max_width > threshold
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Clamp a desired size into these constraints
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.max(self.min_width).min(self.max_width),
            height: size.height.max(self.min_height).min(self.max_height),
        }
    }

    /// Largest size allowed; unbounded axes fall back to the minimum
    pub fn biggest(&self) -> Size {
        Size {
            width: if self.has_bounded_width() {
                self.max_width
            } else {
                self.min_width
            },
            height: if self.has_bounded_height() {
                self.max_height
            } else {
                self.min_height
            },
        }
    }

    /// Constraints for a child after removing `horizontal` and `vertical`
    /// padding. Never goes negative.
    pub fn deflate(&self, horizontal: f32, vertical: f32) -> Self {
        let shrink = |value: f32, by: f32| (value - by).max(0.0);
        Self {
            min_width: shrink(self.min_width, horizontal),
            max_width: shrink(self.max_width, horizontal),
            min_height: shrink(self.min_height, vertical),
            max_height: shrink(self.max_height, vertical),
        }
    }
}

/// Run `builder` with the parent's constraints, the way a layout-builder
/// widget would during its layout pass.
pub fn layout_builder<T>(
    constraints: BoxConstraints,
    builder: impl FnOnce(&BoxConstraints) -> T,
) -> T {
    tracing::trace!(
        max_width = constraints.max_width,
        max_height = constraints.max_height,
        "layout builder"
    );
    builder(&constraints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_category() {
        let sidebar = BoxConstraints::loose(Size::new(320.0, 900.0));
        assert_eq!(sidebar.category(), DeviceCategory::Mobile);

        let content = BoxConstraints::loose(Size::new(960.0, 900.0));
        assert_eq!(content.category(), DeviceCategory::Desktop);

        assert_eq!(BoxConstraints::UNBOUNDED.category(), DeviceCategory::Desktop);
    }

    #[test]
    fn test_is_wide() {
        let constraints = BoxConstraints::loose(Size::new(601.0, 400.0));
        assert!(constraints.is_wide(600.0));
        assert!(!BoxConstraints::loose(Size::new(600.0, 400.0)).is_wide(600.0));
    }

    #[test]
    fn test_constrain_and_biggest() {
        let constraints = BoxConstraints {
            min_width: 100.0,
            max_width: 300.0,
            min_height: 0.0,
            max_height: f32::INFINITY,
        };
        assert_eq!(constraints.constrain(Size::new(50.0, 80.0)), Size::new(100.0, 80.0));
        assert_eq!(constraints.constrain(Size::new(500.0, 80.0)), Size::new(300.0, 80.0));
        assert_eq!(constraints.biggest(), Size::new(300.0, 0.0));
        assert!(!constraints.has_bounded_height());
    }

    #[test]
    fn test_tight_and_deflate() {
        let tight = BoxConstraints::tight(Size::new(200.0, 100.0));
        assert_eq!(tight.constrain(Size::ZERO), Size::new(200.0, 100.0));

        let inner = tight.deflate(32.0, 300.0);
        assert_eq!(inner.max_width, 168.0);
        assert_eq!(inner.max_height, 0.0);
    }

    #[test]
    fn test_layout_builder_sees_constraints() {
        let viewport = Viewport::new(700.0, 500.0).unwrap();
        let columns = layout_builder(BoxConstraints::from_viewport(&viewport), |c| {
            if c.is_wide(600.0) {
                2
            } else {
                1
            }
        });
        assert_eq!(columns, 2);
    }
}
