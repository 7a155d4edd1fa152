//! Responsive grid
//!
//! Column count per category with optional extra column for phones held
//! in landscape. Item widths are derived from the viewport, padding and
//! spacing, so cards grow with the window between breakpoints.

use serde::Serialize;
use vista_core::{category_of, DeviceCategory, ResponsiveValue, Viewport};

/// Grid configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ResponsiveGrid {
    columns: ResponsiveValue<u32>,
    landscape_bonus: u32,
    spacing: f32,
    padding: f32,
}

/// Resolved grid geometry for one viewport
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridMetrics {
    pub columns: u32,
    pub item_width: f32,
    pub spacing: f32,
    pub padding: f32,
}

impl Default for ResponsiveGrid {
    fn default() -> Self {
        Self {
            columns: ResponsiveValue::new(2).tablet(3).desktop(4),
            landscape_bonus: 0,
            spacing: 16.0,
            padding: 16.0,
        }
    }
}

impl ResponsiveGrid {
    pub fn new(columns: ResponsiveValue<u32>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    /// Extra columns on a landscape phone
    pub fn landscape_bonus(mut self, extra: u32) -> Self {
        self.landscape_bonus = extra;
        self
    }

    /// Gap between items, both axes
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Outer padding on each side
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Column count for an already-classified viewport. Always at least 1.
    pub fn columns_for(&self, category: DeviceCategory, viewport: &Viewport) -> u32 {
        let mut columns = *self.columns.resolve(category);
        if category.is_mobile() && viewport.is_landscape() {
            columns = columns.saturating_add(self.landscape_bonus);
        }
        columns.max(1)
    }

    pub fn columns(&self, viewport: &Viewport) -> u32 {
        self.columns_for(category_of(viewport), viewport)
    }

    /// Width of one item. Never negative, 0 when the viewport is too narrow
    /// to fit the padding and gaps.
    pub fn item_width_for(&self, category: DeviceCategory, viewport: &Viewport) -> f32 {
        let columns = self.columns_for(category, viewport) as f32;
        let usable = viewport.width() - 2.0 * self.padding - self.spacing * (columns - 1.0);
        (usable / columns).max(0.0)
    }

    pub fn item_width(&self, viewport: &Viewport) -> f32 {
        self.item_width_for(category_of(viewport), viewport)
    }

    /// Number of rows needed for `item_count` items
    pub fn rows_for(&self, item_count: usize, viewport: &Viewport) -> usize {
        let columns = self.columns(viewport) as usize;
        item_count.div_ceil(columns)
    }

    pub fn metrics(&self, category: DeviceCategory, viewport: &Viewport) -> GridMetrics {
        GridMetrics {
            columns: self.columns_for(category, viewport),
            item_width: self.item_width_for(category, viewport),
            spacing: self.spacing,
            padding: self.padding,
        }
    }
}

impl GridMetrics {
    /// Total width taken by one full row including padding
    pub fn row_width(&self) -> f32 {
        let columns = self.columns as f32;
        self.item_width * columns + self.spacing * (columns - 1.0) + 2.0 * self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let grid = ResponsiveGrid::default();
        assert_eq!(grid.columns(&Viewport::new(390.0, 844.0).unwrap()), 2);
        assert_eq!(grid.columns(&Viewport::new(820.0, 1180.0).unwrap()), 3);
        assert_eq!(grid.columns(&Viewport::new(1440.0, 900.0).unwrap()), 4);
    }

    #[test]
    fn test_landscape_bonus_only_on_mobile() {
        let grid = ResponsiveGrid::default().landscape_bonus(1);
        assert_eq!(grid.columns(&Viewport::new(568.0, 320.0).unwrap()), 3);
        assert_eq!(grid.columns(&Viewport::new(1180.0, 820.0).unwrap()), 4);
    }

    #[test]
    fn test_huge_landscape_bonus_saturates() {
        let grid = ResponsiveGrid::new(ResponsiveValue::new(2)).landscape_bonus(u32::MAX);
        let viewport = Viewport::new(568.0, 320.0).unwrap();
        assert_eq!(grid.columns(&viewport), u32::MAX);
        assert_eq!(grid.item_width(&viewport), 0.0);
    }

    #[test]
    fn test_item_width() {
        let grid = ResponsiveGrid::default().spacing(10.0).padding(20.0);
        let viewport = Viewport::new(400.0, 800.0).unwrap();
        // 400 - 40 padding - 10 gap = 350 over 2 columns
        assert_eq!(grid.item_width(&viewport), 175.0);

        let metrics = grid.metrics(DeviceCategory::Mobile, &viewport);
        assert_eq!(metrics.row_width(), 400.0);
    }

    #[test]
    fn test_item_width_never_negative() {
        let grid = ResponsiveGrid::default().padding(50.0);
        let narrow = Viewport::new(60.0, 200.0).unwrap();
        assert_eq!(grid.item_width(&narrow), 0.0);
        assert_eq!(grid.item_width(&Viewport::new(0.0, 0.0).unwrap()), 0.0);
    }

    #[test]
    fn test_zero_columns_clamped() {
        let grid = ResponsiveGrid::new(ResponsiveValue::new(0));
        assert_eq!(grid.columns(&Viewport::new(390.0, 844.0).unwrap()), 1);
    }

    #[test]
    fn test_rows_for() {
        let grid = ResponsiveGrid::default();
        let desktop = Viewport::new(1280.0, 800.0).unwrap();
        assert_eq!(grid.rows_for(0, &desktop), 0);
        assert_eq!(grid.rows_for(4, &desktop), 1);
        assert_eq!(grid.rows_for(9, &desktop), 3);
    }
}
