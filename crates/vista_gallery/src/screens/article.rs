//! Article - centered reading column
//!
//! The text column is capped by the category's maximum content width and
//! centered. Desktops with enough margin show a table of contents beside it.

use vista_core::{ResponsiveConfig, Result, Viewport};

use super::Screen;
use crate::plan::{Region, ScreenPlan};

const TOC_MIN_MARGIN: f32 = 160.0;
const TOC_MAX_WIDTH: f32 = 280.0;
/// Title block height as a multiple of the heading font size
const TITLE_LINES: f32 = 2.5;

pub struct ArticleScreen;

impl ArticleScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArticleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ArticleScreen {
    fn name(&self) -> &'static str {
        "article"
    }

    fn description(&self) -> &'static str {
        "Capped, centered text column with per-category typography"
    }

    fn plan(&self, viewport: &Viewport, config: &ResponsiveConfig) -> Result<ScreenPlan> {
        let category = config.category_of(viewport);
        let plan = ScreenPlan::new(self.name(), *viewport, category);
        let content = plan.content_area();
        let scale = plan.scale;

        let column_width = scale.content_width(content.width);
        let offset = scale.content_offset(content.width);
        let left = content.x + offset;

        let title_height = (scale.heading_font * TITLE_LINES).min(content.height);
        let mut regions = vec![
            Region::new("title", left, 0.0, column_width, title_height),
            Region::new(
                "body",
                left,
                title_height,
                column_width,
                content.height - title_height,
            ),
        ];

        if category.is_desktop() && offset >= TOC_MIN_MARGIN {
            let width = (offset - scale.gap).min(TOC_MAX_WIDTH);
            regions.push(Region::new(
                "table_of_contents",
                left + column_width + scale.gap,
                0.0,
                width,
                content.height,
            ));
        }

        Ok(plan.regions(regions))
    }
}
