//! Vista Core
//!
//! Screen-size classification for responsive layouts:
//!
//! - **Viewport**: width, height, and orientation for one layout pass
//! - **Device categories**: mobile / tablet / desktop from fixed width breakpoints
//! - **Percentage sizing**: sizes expressed as a share of a dimension
//! - **Responsive values**: per-category values with graceful fallback to
//!   the next narrower category
//!
//! Everything here is a pure function of its arguments.
//!
//! # Example
//!
//! ```rust
//! use vista_core::{classify, percent_of, select, DeviceCategory, Viewport};
//!
//! let viewport = Viewport::new(768.0, 1024.0).unwrap();
//! let category = classify(viewport.width());
//! assert_eq!(category, DeviceCategory::Tablet);
//!
//! // Font size falls back to the tablet value when no desktop value is given
//! let font = select(DeviceCategory::Desktop, 16.0, Some(20.0), None);
//! assert_eq!(font, 20.0);
//!
//! assert_eq!(percent_of(viewport.width(), 50.0), 384.0);
//! ```

pub mod breakpoints;
pub mod category;
pub mod config;
pub mod error;
pub mod responsive;
pub mod value;
pub mod viewport;

pub use breakpoints::Breakpoints;
pub use category::DeviceCategory;
pub use config::{InvalidInputPolicy, ResponsiveConfig, CONFIG_FILE_NAME};
pub use error::{ResponsiveError, Result};
pub use responsive::{
    category_of, classify, height_percent, is_desktop, is_mobile, is_tablet, percent_of,
    try_classify, value_for, width_percent, Responsive,
};
pub use value::{select, ResponsiveValue};
pub use viewport::{Orientation, Viewport};
