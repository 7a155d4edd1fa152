//! Settings - master/detail

use vista_core::{ResponsiveConfig, Result, Viewport};
use vista_layout::{MasterDetail, PaneArrangement};

use super::Screen;
use crate::plan::{Region, ScreenPlan};

pub struct SettingsScreen {
    policy: MasterDetail,
    selected: Option<usize>,
}

impl SettingsScreen {
    /// `selected` is the index of the open settings section, if any
    pub fn new(selected: Option<usize>) -> Self {
        Self {
            policy: MasterDetail::default(),
            selected,
        }
    }
}

impl Screen for SettingsScreen {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn description(&self) -> &'static str {
        "Master/detail: separate pages on phones, side-by-side panes elsewhere"
    }

    fn plan(&self, viewport: &Viewport, config: &ResponsiveConfig) -> Result<ScreenPlan> {
        let category = config.category_of(viewport);
        let plan = ScreenPlan::new(self.name(), *viewport, category);
        let content = plan.content_area();

        let panes = self.policy.arrange_for(category, content.width, self.selected);
        let regions = match panes {
            PaneArrangement::Master { width } => {
                vec![Region::new("sections", content.x, 0.0, width, content.height)]
            }
            PaneArrangement::Detail { width, .. } => {
                vec![Region::new("section_detail", content.x, 0.0, width, content.height)]
            }
            PaneArrangement::Split {
                master_width,
                detail_width,
                ..
            } => vec![
                Region::new("sections", content.x, 0.0, master_width, content.height),
                Region::new(
                    "section_detail",
                    content.x + master_width,
                    0.0,
                    detail_width,
                    content.height,
                ),
            ],
        };

        Ok(plan.regions(regions).panes(panes))
    }
}
