//! Top-level navigation style
//!
//! Phones get a bottom bar, tablets a compact rail, desktops a full sidebar.

use serde::Serialize;
use vista_core::{category_of, percent_of, DeviceCategory, Viewport};

/// Rail width in logical pixels
pub const RAIL_WIDTH: f32 = 72.0;
/// Bottom bar height in logical pixels
pub const BOTTOM_BAR_HEIGHT: f32 = 56.0;

const SIDEBAR_PERCENT: f32 = 20.0;
const SIDEBAR_MIN_WIDTH: f32 = 200.0;
const SIDEBAR_MAX_WIDTH: f32 = 320.0;

/// How primary destinations are presented
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStyle {
    BottomBar,
    Rail,
    Sidebar,
}

impl NavigationStyle {
    pub fn for_category(category: DeviceCategory) -> Self {
        match category {
            DeviceCategory::Mobile => NavigationStyle::BottomBar,
            DeviceCategory::Tablet => NavigationStyle::Rail,
            DeviceCategory::Desktop => NavigationStyle::Sidebar,
        }
    }

    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self::for_category(category_of(viewport))
    }

    /// Horizontal space taken from the content area
    pub fn leading_width(self, viewport: &Viewport) -> f32 {
        match self {
            NavigationStyle::BottomBar => 0.0,
            NavigationStyle::Rail => RAIL_WIDTH.min(viewport.width()),
            NavigationStyle::Sidebar => sidebar_width(viewport),
        }
    }

    /// Vertical space taken from the content area
    pub fn bottom_height(self, viewport: &Viewport) -> f32 {
        match self {
            NavigationStyle::BottomBar => BOTTOM_BAR_HEIGHT.min(viewport.height()),
            NavigationStyle::Rail | NavigationStyle::Sidebar => 0.0,
        }
    }
}

/// Sidebar width: 20% of the viewport, kept between 200 and 320 pixels and
/// never wider than the viewport itself.
pub fn sidebar_width(viewport: &Viewport) -> f32 {
    percent_of(viewport.width(), SIDEBAR_PERCENT)
        .clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH)
        .min(viewport.width())
}
