//! Vista Layout Patterns
//!
//! Breakpoint-driven layout decisions built on [`vista_core`]. Nothing here
//! renders or solves constraints; each helper answers one question the
//! layout code of a screen asks on every pass:
//!
//! - [`AdaptiveLayout`] - which variant of a subtree to build
//! - [`BoxConstraints`] - how wide the parent actually is
//! - [`OrientationLayout`] - portrait or landscape variant
//! - [`ResponsiveGrid`] - how many columns and how wide each card is
//! - [`NavigationStyle`] - bottom bar, rail, or sidebar
//! - [`MasterDetail`] - one pane or two, and how they split the width
//! - [`Scale`] - padding and font sizes
//!
//! # Example
//!
//! ```rust
//! use vista_core::Viewport;
//! use vista_layout::prelude::*;
//!
//! let viewport = Viewport::new(1024.0, 768.0).unwrap();
//!
//! let grid = ResponsiveGrid::default();
//! assert_eq!(grid.columns(&viewport), 4);
//! assert_eq!(NavigationStyle::for_viewport(&viewport), NavigationStyle::Sidebar);
//! ```

pub mod adaptive;
pub mod constraints;
pub mod grid;
pub mod master_detail;
pub mod navigation;
pub mod orientation;
pub mod scale;

pub use adaptive::AdaptiveLayout;
pub use constraints::{layout_builder, BoxConstraints, Size};
pub use grid::{GridMetrics, ResponsiveGrid};
pub use master_detail::{MasterDetail, PaneArrangement};
pub use navigation::{sidebar_width, NavigationStyle, BOTTOM_BAR_HEIGHT, RAIL_WIDTH};
pub use orientation::OrientationLayout;
pub use scale::{Scale, ScaleTable};

/// Commonly used types
pub mod prelude {
    pub use crate::adaptive::AdaptiveLayout;
    pub use crate::constraints::{layout_builder, BoxConstraints, Size};
    pub use crate::grid::ResponsiveGrid;
    pub use crate::master_detail::{MasterDetail, PaneArrangement};
    pub use crate::navigation::NavigationStyle;
    pub use crate::orientation::OrientationLayout;
    pub use crate::scale::Scale;
}
