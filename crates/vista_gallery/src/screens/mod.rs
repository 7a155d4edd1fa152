//! Example screens
//!
//! Each screen reproduces one page of the responsive layout walkthrough:
//!
//! - [`home`] - adaptive hero and a card grid
//! - [`catalog`] - product grid with orientation-dependent filters
//! - [`dashboard`] - percentage-sized panels behind adaptive navigation
//! - [`settings`] - master/detail settings
//! - [`article`] - centered reading column with scaled typography

pub mod article;
pub mod catalog;
pub mod dashboard;
pub mod home;
pub mod settings;

use vista_core::{ResponsiveConfig, Result, Viewport};

use crate::plan::ScreenPlan;

/// A screen that can be planned for any viewport
pub trait Screen: Send + Sync {
    /// Stable identifier used for filtering and lookup
    fn name(&self) -> &'static str;

    /// One-line summary of the technique the screen demonstrates
    fn description(&self) -> &'static str;

    /// Lay the screen out for `viewport`
    fn plan(&self, viewport: &Viewport, config: &ResponsiveConfig) -> Result<ScreenPlan>;
}

/// Every example screen, in walkthrough order
pub fn all_screens() -> Vec<Box<dyn Screen>> {
    vec![
        Box::new(home::HomeScreen::new()),
        Box::new(catalog::CatalogScreen::new()),
        Box::new(dashboard::DashboardScreen::new()),
        Box::new(settings::SettingsScreen::new(None)),
        Box::new(article::ArticleScreen::new()),
    ]
}

/// Look up a screen by name
pub fn find_screen(name: &str) -> Option<Box<dyn Screen>> {
    all_screens().into_iter().find(|s| s.name() == name)
}

/// Split `total` into `count` equal tracks separated by `gap`, starting at
/// `start`. Returns `(offset, size)` pairs. The gap shrinks when there is not
/// enough room, so the tracks always end at `start + total`.
pub(crate) fn tracks(start: f32, total: f32, count: usize, gap: f32) -> Vec<(f32, f32)> {
    if count == 0 {
        return Vec::new();
    }
    let total = total.max(0.0);
    let gaps = (count - 1) as f32;
    let gap = if gaps > 0.0 { gap.min(total / gaps) } else { 0.0 };
    let size = ((total - gap * gaps) / count as f32).max(0.0);
    (0..count)
        .map(|i| (start + i as f32 * (size + gap), size))
        .collect()
}

/// Apply `padding` on both sides of a span of length `total`. Returns the
/// effective padding and the inner length; padding never exceeds half the span.
pub(crate) fn inset(total: f32, padding: f32) -> (f32, f32) {
    let total = total.max(0.0);
    let padding = padding.min(total / 2.0);
    (padding, total - 2.0 * padding)
}
