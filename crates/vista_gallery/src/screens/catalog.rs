//! Catalog - product grid with orientation-dependent filters
//!
//! Phones always show filters as a chip bar above the grid. On wider screens
//! the filters move into a side panel when the device is held in landscape.

use vista_core::{percent_of, ResponsiveConfig, ResponsiveValue, Result, Viewport};
use vista_layout::{OrientationLayout, ResponsiveGrid};

use super::Screen;
use crate::plan::{Region, ScreenPlan};

const FILTER_BAR_HEIGHT: f32 = 48.0;
const FILTER_PANEL_PERCENT: f32 = 25.0;
const FILTER_PANEL_MAX_WIDTH: f32 = 280.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterPlacement {
    Top,
    Side,
}

pub struct CatalogScreen {
    grid: ResponsiveGrid,
    filters: OrientationLayout<FilterPlacement>,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            grid: ResponsiveGrid::new(ResponsiveValue::new(2).tablet(3).desktop(5))
                .landscape_bonus(1)
                .spacing(12.0),
            filters: OrientationLayout::new(FilterPlacement::Top, FilterPlacement::Side),
        }
    }
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CatalogScreen {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn description(&self) -> &'static str {
        "Product grid whose filters follow the device orientation"
    }

    fn plan(&self, viewport: &Viewport, config: &ResponsiveConfig) -> Result<ScreenPlan> {
        let category = config.category_of(viewport);
        let plan = ScreenPlan::new(self.name(), *viewport, category);
        let content = plan.content_area();

        let placement = if category.is_mobile() {
            FilterPlacement::Top
        } else {
            self.filters.pick(viewport)
        };

        let (filters, products) = match placement {
            FilterPlacement::Top => {
                let bar = FILTER_BAR_HEIGHT.min(content.height);
                (
                    Region::new("filters", content.x, 0.0, content.width, bar),
                    Region::new("products", content.x, bar, content.width, content.height - bar),
                )
            }
            FilterPlacement::Side => {
                let panel =
                    percent_of(content.width, FILTER_PANEL_PERCENT).min(FILTER_PANEL_MAX_WIDTH);
                (
                    Region::new("filters", content.x, 0.0, panel, content.height),
                    Region::new(
                        "products",
                        content.x + panel,
                        0.0,
                        content.width - panel,
                        content.height,
                    ),
                )
            }
        };

        let products_viewport = Viewport::new(products.width, products.height)?;
        let grid = self.grid.metrics(category, &products_viewport);

        Ok(plan.region(filters).region(products).grid(grid))
    }
}
