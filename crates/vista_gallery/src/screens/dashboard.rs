//! Dashboard - panels sized from the available space

use vista_core::{percent_of, ResponsiveConfig, ResponsiveValue, Result, Viewport};

use super::{inset, tracks, Screen};
use crate::plan::{Region, ScreenPlan};

const PANELS: [&str; 4] = ["revenue", "orders", "visitors", "conversion"];

/// Share of the content height used by the summary header
const HEADER_PERCENT: f32 = 12.0;

pub struct DashboardScreen {
    columns: ResponsiveValue<usize>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            columns: ResponsiveValue::new(1).tablet(2).desktop(4),
        }
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for DashboardScreen {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn description(&self) -> &'static str {
        "Percentage-sized header and panels next to adaptive navigation"
    }

    fn plan(&self, viewport: &Viewport, config: &ResponsiveConfig) -> Result<ScreenPlan> {
        let category = config.category_of(viewport);
        let plan = ScreenPlan::new(self.name(), *viewport, category);
        let content = plan.content_area();
        let scale = plan.scale;

        let (pad_x, inner_width) = inset(content.width, scale.padding);
        let (pad_y, inner_height) = inset(content.height, scale.padding);
        let left = content.x + pad_x;

        let header_height = percent_of(inner_height, HEADER_PERCENT);
        let header = Region::new("header", left, pad_y, inner_width, header_height);

        let columns = self.columns.resolve_owned(category).max(1);
        let rows = PANELS.len().div_ceil(columns);
        let body_top = pad_y + header_height;
        let body_height = inner_height - header_height;

        let column_tracks = tracks(left, inner_width, columns, scale.gap);
        let row_tracks = tracks(body_top, body_height, rows, scale.gap);

        let panels = PANELS.iter().enumerate().map(|(i, name)| {
            let (x, width) = column_tracks[i % columns];
            let (y, height) = row_tracks[i / columns];
            Region::new(*name, x, y, width, height)
        });

        Ok(plan.region(header).regions(panels))
    }
}
