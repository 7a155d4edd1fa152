//! Screen plans
//!
//! A [`ScreenPlan`] is the headless result of laying out an example screen:
//! which navigation style, which regions at which positions, and the grid or
//! pane decisions behind them. Plans are plain data and serialize to JSON.

use serde::Serialize;
use thiserror::Error;
use vista_core::{DeviceCategory, Orientation, ResponsiveConfig, Viewport};
use vista_layout::{GridMetrics, NavigationStyle, PaneArrangement, Scale};

/// Rounding slack when comparing summed f32 widths against the viewport
const EPSILON: f32 = 0.5;

/// A named rectangle within the viewport
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn new(name: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Layout decisions for one screen at one viewport
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScreenPlan {
    pub screen: String,
    pub viewport: Viewport,
    pub category: DeviceCategory,
    pub orientation: Orientation,
    pub navigation: NavigationStyle,
    pub scale: Scale,
    pub regions: Vec<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panes: Option<PaneArrangement>,
}

/// Invariants a plan must satisfy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanViolation {
    #[error("plan category {planned} does not match classifier result {expected}")]
    CategoryMismatch {
        planned: DeviceCategory,
        expected: DeviceCategory,
    },

    #[error("region '{name}' extends outside the viewport ({right} x {bottom})")]
    OutOfBounds { name: String, right: f32, bottom: f32 },

    #[error("region '{name}' has a negative position or size")]
    NegativeGeometry { name: String },

    #[error("grid row needs {row_width}px but only {available}px are available")]
    GridOverflow { row_width: f32, available: f32 },

    #[error("panes need {total}px but the viewport is {available}px wide")]
    PaneOverflow { total: f32, available: f32 },
}

fn navigation_region(style: NavigationStyle, viewport: &Viewport) -> Region {
    let (width, height) = viewport.size();
    match style {
        NavigationStyle::BottomBar => {
            let bar = style.bottom_height(viewport);
            Region::new("navigation", 0.0, height - bar, width, bar)
        }
        NavigationStyle::Rail | NavigationStyle::Sidebar => {
            Region::new("navigation", 0.0, 0.0, style.leading_width(viewport), height)
        }
    }
}

impl ScreenPlan {
    /// Start a plan with the navigation style and scale for `category`.
    /// The navigation chrome is the first region.
    pub fn new(screen: impl Into<String>, viewport: Viewport, category: DeviceCategory) -> Self {
        let navigation = NavigationStyle::for_category(category);
        Self {
            screen: screen.into(),
            viewport,
            category,
            orientation: viewport.orientation(),
            navigation,
            scale: Scale::for_category(category),
            regions: vec![navigation_region(navigation, &viewport)],
            grid: None,
            panes: None,
        }
    }

    pub fn region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions.extend(regions);
        self
    }

    pub fn grid(mut self, grid: GridMetrics) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn panes(mut self, panes: PaneArrangement) -> Self {
        self.panes = Some(panes);
        self
    }

    /// Area left for content after the navigation chrome
    pub fn content_area(&self) -> Region {
        let leading = self.navigation.leading_width(&self.viewport);
        let bottom = self.navigation.bottom_height(&self.viewport);
        Region::new(
            "content",
            leading,
            0.0,
            self.viewport.width() - leading,
            self.viewport.height() - bottom,
        )
    }

    pub fn find(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Check the plan against the classifier and the viewport bounds
    pub fn validate(&self, config: &ResponsiveConfig) -> Result<(), PlanViolation> {
        let expected = config.category_of(&self.viewport);
        if expected != self.category {
            return Err(PlanViolation::CategoryMismatch {
                planned: self.category,
                expected,
            });
        }

        let (width, height) = self.viewport.size();
        for region in &self.regions {
            if region.x < 0.0 || region.y < 0.0 || region.width < 0.0 || region.height < 0.0 {
                return Err(PlanViolation::NegativeGeometry {
                    name: region.name.clone(),
                });
            }
            if region.right() > width + EPSILON || region.bottom() > height + EPSILON {
                return Err(PlanViolation::OutOfBounds {
                    name: region.name.clone(),
                    right: region.right(),
                    bottom: region.bottom(),
                });
            }
        }

        if let Some(grid) = &self.grid {
            let available = self.content_area().width;
            if grid.item_width > 0.0 && grid.row_width() > available + EPSILON {
                return Err(PlanViolation::GridOverflow {
                    row_width: grid.row_width(),
                    available,
                });
            }
        }

        if let Some(panes) = &self.panes {
            let total = panes.total_width();
            if total > width + EPSILON {
                return Err(PlanViolation::PaneOverflow {
                    total,
                    available: width,
                });
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Viewport {
        Viewport::new(390.0, 844.0).unwrap()
    }

    #[test]
    fn test_new_plan_uses_category_defaults() {
        let plan = ScreenPlan::new("test", phone(), DeviceCategory::Mobile);
        assert_eq!(plan.navigation, NavigationStyle::BottomBar);
        assert_eq!(plan.scale.padding, 16.0);
        assert_eq!(plan.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_content_area_excludes_navigation() {
        let plan = ScreenPlan::new("test", phone(), DeviceCategory::Mobile);
        let content = plan.content_area();
        assert_eq!(plan.find("navigation").map(|r| r.y), Some(844.0 - 56.0));
        assert_eq!(content.x, 0.0);
        assert_eq!(content.width, 390.0);
        assert_eq!(content.height, 844.0 - 56.0);

        let tablet = Viewport::new(768.0, 1024.0).unwrap();
        let plan = ScreenPlan::new("test", tablet, DeviceCategory::Tablet);
        assert_eq!(plan.content_area().x, 72.0);
        assert_eq!(plan.content_area().width, 696.0);
    }

    #[test]
    fn test_validate_category() {
        let plan = ScreenPlan::new("test", phone(), DeviceCategory::Desktop);
        assert_eq!(
            plan.validate(&ResponsiveConfig::default()),
            Err(PlanViolation::CategoryMismatch {
                planned: DeviceCategory::Desktop,
                expected: DeviceCategory::Mobile
            })
        );
    }

    #[test]
    fn test_validate_bounds() {
        let plan = ScreenPlan::new("test", phone(), DeviceCategory::Mobile)
            .region(Region::new("ok", 0.0, 0.0, 390.0, 100.0));
        assert!(plan.validate(&ResponsiveConfig::default()).is_ok());

        let plan = plan.region(Region::new("wide", 10.0, 0.0, 390.0, 100.0));
        assert!(matches!(
            plan.validate(&ResponsiveConfig::default()),
            Err(PlanViolation::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_region_clamps_size() {
        let region = Region::new("r", 0.0, 0.0, -5.0, 10.0);
        assert_eq!(region.width, 0.0);
        assert_eq!(region.bottom(), 10.0);
    }

    #[test]
    fn test_json_output() {
        let plan = ScreenPlan::new("home", phone(), DeviceCategory::Mobile)
            .region(Region::new("hero", 0.0, 0.0, 390.0, 300.0));
        let json = plan.to_json().unwrap();
        assert!(json.contains("\"screen\": \"home\""));
        assert!(json.contains("\"category\": \"mobile\""));
        assert!(json.contains("\"navigation\": \"bottom_bar\""));
        assert!(!json.contains("\"grid\""));
    }
}
