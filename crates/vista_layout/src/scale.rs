//! Spacing and typography scale
//!
//! | Category | Padding | Body | Heading | Max content width |
//! |----------|---------|------|---------|-------------------|
//! | Mobile   | 16      | 14   | 22      | none              |
//! | Tablet   | 24      | 16   | 28      | 720               |
//! | Desktop  | 32      | 18   | 34      | 1200              |

use serde::Serialize;
use vista_core::{category_of, DeviceCategory, ResponsiveValue, Viewport};

/// Resolved spacing and font sizes for one category
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scale {
    pub padding: f32,
    pub gap: f32,
    pub body_font: f32,
    pub heading_font: f32,
    /// `None` means content may use the full width
    pub max_content_width: Option<f32>,
}

/// Per-category values behind [`Scale`]
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleTable {
    pub padding: ResponsiveValue<f32>,
    pub gap: ResponsiveValue<f32>,
    pub body_font: ResponsiveValue<f32>,
    pub heading_font: ResponsiveValue<f32>,
    pub max_content_width: ResponsiveValue<Option<f32>>,
}

impl Default for ScaleTable {
    fn default() -> Self {
        Self {
            padding: ResponsiveValue::new(16.0).tablet(24.0).desktop(32.0),
            gap: ResponsiveValue::new(8.0).tablet(12.0).desktop(16.0),
            body_font: ResponsiveValue::new(14.0).tablet(16.0).desktop(18.0),
            heading_font: ResponsiveValue::new(22.0).tablet(28.0).desktop(34.0),
            max_content_width: ResponsiveValue::new(None)
                .tablet(Some(720.0))
                .desktop(Some(1200.0)),
        }
    }
}

impl ScaleTable {
    pub fn resolve(&self, category: DeviceCategory) -> Scale {
        Scale {
            padding: self.padding.resolve_owned(category),
            gap: self.gap.resolve_owned(category),
            body_font: self.body_font.resolve_owned(category),
            heading_font: self.heading_font.resolve_owned(category),
            max_content_width: self.max_content_width.resolve_owned(category),
        }
    }
}

impl Scale {
    pub fn for_category(category: DeviceCategory) -> Self {
        ScaleTable::default().resolve(category)
    }

    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self::for_category(category_of(viewport))
    }

    /// Width of the centered content column: the viewport minus padding,
    /// capped by `max_content_width`. Never negative.
    pub fn content_width(&self, viewport_width: f32) -> f32 {
        let available = (viewport_width - 2.0 * self.padding).max(0.0);
        match self.max_content_width {
            Some(max) => available.min(max),
            None => available,
        }
    }

    /// Left offset that centers the content column
    pub fn content_offset(&self, viewport_width: f32) -> f32 {
        ((viewport_width - self.content_width(viewport_width)) / 2.0).max(0.0)
    }
}
