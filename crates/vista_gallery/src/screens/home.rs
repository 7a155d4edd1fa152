//! Home - adaptive hero above a card grid

use vista_core::{height_percent, width_percent, ResponsiveConfig, Result, Viewport};
use vista_layout::{AdaptiveLayout, ResponsiveGrid};

use super::Screen;
use crate::plan::{Region, ScreenPlan};

/// Featured cards shown under the hero
const CARD_COUNT: usize = 12;

pub struct HomeScreen {
    hero: AdaptiveLayout<Vec<Region>>,
    grid: ResponsiveGrid,
}

impl HomeScreen {
    pub fn new() -> Self {
        // Builders receive the content area as their viewport
        let hero = AdaptiveLayout::new(|v: &Viewport| {
            vec![Region::new("hero", 0.0, 0.0, v.width(), height_percent(v, 35.0))]
        })
        .tablet(|v: &Viewport| {
            vec![Region::new("hero", 0.0, 0.0, v.width(), height_percent(v, 30.0))]
        })
        .desktop(|v: &Viewport| {
            let hero_width = width_percent(v, 60.0);
            let height = height_percent(v, 40.0);
            vec![
                Region::new("hero", 0.0, 0.0, hero_width, height),
                Region::new("promo", hero_width, 0.0, v.width() - hero_width, height),
            ]
        });

        Self {
            hero,
            grid: ResponsiveGrid::default().landscape_bonus(1),
        }
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HomeScreen {
    fn name(&self) -> &'static str {
        "home"
    }

    fn description(&self) -> &'static str {
        "Adaptive hero per category above a responsive card grid"
    }

    fn plan(&self, viewport: &Viewport, config: &ResponsiveConfig) -> Result<ScreenPlan> {
        let category = config.category_of(viewport);
        let plan = ScreenPlan::new(self.name(), *viewport, category);
        let content = plan.content_area();
        let content_viewport = Viewport::new(content.width, content.height)?;

        let hero: Vec<Region> = self
            .hero
            .build_for(category, &content_viewport)
            .into_iter()
            .map(|r| Region::new(r.name, content.x + r.x, r.y, r.width, r.height))
            .collect();
        let hero_height = hero.iter().map(|r| r.height).fold(0.0, f32::max);

        let cards_top = (hero_height + plan.scale.gap).min(content.height);
        let cards = Region::new(
            "cards",
            content.x,
            cards_top,
            content.width,
            content.height - cards_top,
        );

        let grid = self.grid.metrics(category, &content_viewport);
        tracing::debug!(
            %category,
            columns = grid.columns,
            rows = CARD_COUNT.div_ceil(grid.columns as usize),
            "home grid"
        );

        Ok(plan.regions(hero).region(cards).grid(grid))
    }
}
