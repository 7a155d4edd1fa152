//! Master/detail arrangement
//!
//! On phones the list and the selected item are separate pages: the list is
//! shown until something is selected, then the detail replaces it. On
//! tablets and desktops both panes sit side by side and the master pane takes
//! a fixed share of the width.

use serde::Serialize;
use vista_core::{category_of, percent_of, DeviceCategory, ResponsiveValue, Viewport};

/// Narrowest master pane worth showing next to a detail pane
const MIN_MASTER_WIDTH: f32 = 240.0;

/// Resolved pane layout
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaneArrangement {
    /// Only the list, full width
    Master { width: f32 },
    /// Only the selected item, full width
    Detail { selected: usize, width: f32 },
    /// Both panes side by side
    Split {
        master_width: f32,
        detail_width: f32,
        selected: Option<usize>,
    },
}

impl PaneArrangement {
    pub fn is_split(&self) -> bool {
        matches!(self, PaneArrangement::Split { .. })
    }

    /// Combined width of the visible panes
    pub fn total_width(&self) -> f32 {
        match *self {
            PaneArrangement::Master { width } | PaneArrangement::Detail { width, .. } => width,
            PaneArrangement::Split {
                master_width,
                detail_width,
                ..
            } => master_width + detail_width,
        }
    }
}

/// Master/detail policy
#[derive(Clone, Debug, PartialEq)]
pub struct MasterDetail {
    master_percent: ResponsiveValue<f32>,
}

impl Default for MasterDetail {
    fn default() -> Self {
        Self {
            // The mobile value is never used for a split; it only anchors the fallback chain.
            master_percent: ResponsiveValue::new(100.0).tablet(40.0).desktop(30.0),
        }
    }
}

impl MasterDetail {
    pub fn new(master_percent: ResponsiveValue<f32>) -> Self {
        Self { master_percent }
    }

    /// Arrange panes for an already-classified `width`
    pub fn arrange_for(
        &self,
        category: DeviceCategory,
        width: f32,
        selected: Option<usize>,
    ) -> PaneArrangement {
        if category.is_mobile() {
            return match selected {
                Some(selected) => PaneArrangement::Detail { selected, width },
                None => PaneArrangement::Master { width },
            };
        }

        let master_width = percent_of(width, *self.master_percent.resolve(category))
            .max(MIN_MASTER_WIDTH)
            .min(width);
        PaneArrangement::Split {
            master_width,
            detail_width: width - master_width,
            selected,
        }
    }

    pub fn arrange(&self, viewport: &Viewport, selected: Option<usize>) -> PaneArrangement {
        self.arrange_for(category_of(viewport), viewport.width(), selected)
    }
}
