//! Adaptive layout - one builder per device category
//!
//! The pattern every example page starts from: supply a mobile builder and
//! optionally wider variants. A missing variant falls back to the next
//! narrower one, so a page that only defines mobile and desktop renders the
//! mobile variant on tablets.
//!
//! ```rust
//! use vista_core::Viewport;
//! use vista_layout::AdaptiveLayout;
//!
//! let layout = AdaptiveLayout::new(|_| "single column")
//!     .desktop(|_| "sidebar + content");
//!
//! let tablet = Viewport::new(768.0, 1024.0).unwrap();
//! assert_eq!(layout.build(&tablet), "single column");
//! ```

use vista_core::{category_of, select, DeviceCategory, Viewport};

type BuilderFn<T> = Box<dyn Fn(&Viewport) -> T + Send + Sync>;

/// Per-category builders producing a `T` (a subtree, a plan, a label...)
pub struct AdaptiveLayout<T> {
    mobile: BuilderFn<T>,
    tablet: Option<BuilderFn<T>>,
    desktop: Option<BuilderFn<T>>,
}

impl<T> AdaptiveLayout<T> {
    /// Create with the mandatory mobile builder
    pub fn new<F>(mobile: F) -> Self
    where
        F: Fn(&Viewport) -> T + Send + Sync + 'static,
    {
        Self {
            mobile: Box::new(mobile),
            tablet: None,
            desktop: None,
        }
    }

    /// Set the tablet builder
    pub fn tablet<F>(mut self, builder: F) -> Self
    where
        F: Fn(&Viewport) -> T + Send + Sync + 'static,
    {
        self.tablet = Some(Box::new(builder));
        self
    }

    /// Set the desktop builder
    pub fn desktop<F>(mut self, builder: F) -> Self
    where
        F: Fn(&Viewport) -> T + Send + Sync + 'static,
    {
        self.desktop = Some(Box::new(builder));
        self
    }

    /// Build for a viewport classified with the default breakpoints
    pub fn build(&self, viewport: &Viewport) -> T {
        self.build_for(category_of(viewport), viewport)
    }

    /// Build for an already-classified viewport
    pub fn build_for(&self, category: DeviceCategory, viewport: &Viewport) -> T {
        let builder = select(
            category,
            &self.mobile,
            self.tablet.as_ref(),
            self.desktop.as_ref(),
        );
        builder(viewport)
    }

    /// Category whose builder would run, after fallback
    pub fn resolved_category(&self, category: DeviceCategory) -> DeviceCategory {
        match category {
            DeviceCategory::Desktop if self.desktop.is_some() => DeviceCategory::Desktop,
            DeviceCategory::Desktop | DeviceCategory::Tablet if self.tablet.is_some() => {
                DeviceCategory::Tablet
            }
            _ => DeviceCategory::Mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f32) -> Viewport {
        Viewport::new(width, 800.0).unwrap()
    }

    #[test]
    fn test_all_variants() {
        let layout = AdaptiveLayout::new(|_| "mobile")
            .tablet(|_| "tablet")
            .desktop(|_| "desktop");
        assert_eq!(layout.build(&viewport(360.0)), "mobile");
        assert_eq!(layout.build(&viewport(700.0)), "tablet");
        assert_eq!(layout.build(&viewport(1200.0)), "desktop");
    }

    #[test]
    fn test_fallback_to_narrower_variant() {
        let layout = AdaptiveLayout::new(|_| "mobile").tablet(|_| "tablet");
        assert_eq!(layout.build(&viewport(1200.0)), "tablet");
        assert_eq!(layout.resolved_category(DeviceCategory::Desktop), DeviceCategory::Tablet);

        let mobile_only = AdaptiveLayout::new(|_| "mobile");
        assert_eq!(mobile_only.build(&viewport(1200.0)), "mobile");
        assert_eq!(
            mobile_only.resolved_category(DeviceCategory::Desktop),
            DeviceCategory::Mobile
        );
    }

    #[test]
    fn test_tablet_does_not_use_desktop_variant() {
        let layout = AdaptiveLayout::new(|_| "mobile").desktop(|_| "desktop");
        assert_eq!(layout.build(&viewport(700.0)), "mobile");
        assert_eq!(layout.resolved_category(DeviceCategory::Tablet), DeviceCategory::Mobile);
    }

    #[test]
    fn test_builder_receives_viewport() {
        let layout = AdaptiveLayout::new(|v: &Viewport| v.width() / 2.0);
        assert_eq!(layout.build(&viewport(400.0)), 200.0);
    }

    #[test]
    fn test_build_for_explicit_category() {
        let layout = AdaptiveLayout::new(|_| 1).desktop(|_| 3);
        assert_eq!(layout.build_for(DeviceCategory::Desktop, &viewport(100.0)), 3);
    }
}
