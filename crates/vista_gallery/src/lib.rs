//! Vista Gallery
//!
//! The example screens of the responsive layout walkthrough, planned
//! headlessly. Each screen turns a viewport into a [`ScreenPlan`]; the
//! [`GalleryRunner`] sweeps every screen across a set of device presets and
//! checks that the plans stay inside the viewport and agree with the
//! classifier.
//!
//! ```rust
//! use vista_gallery::GalleryRunner;
//!
//! let result = GalleryRunner::default().run();
//! assert!(result.all_passed());
//! ```

pub mod devices;
pub mod plan;
pub mod runner;
pub mod screens;

pub use devices::{preset, DevicePreset, PRESETS};
pub use plan::{PlanViolation, Region, ScreenPlan};
pub use runner::{GalleryResult, GalleryRunner, PlanOutcome, PlanRun};
pub use screens::{all_screens, find_screen, Screen};
