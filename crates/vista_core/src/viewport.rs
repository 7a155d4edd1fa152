//! Viewport snapshot
//!
//! The host framework hands a [`Viewport`] to layout code on every pass
//! (window resize, rotation, first build). It is a plain value: nothing in
//! this crate caches it or queries the platform for it.

use serde::{Deserialize, Serialize};

use crate::error::{check_dimension, Result};

/// Screen orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Height is at least the width
    #[default]
    Portrait,
    /// Width exceeds the height
    Landscape,
}

impl Orientation {
    /// Orientation implied by a width/height pair. Square areas are portrait.
    pub fn from_size(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Available drawing area for one layout pass, in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Viewport {
    width: f32,
    height: f32,
    orientation: Orientation,
}

impl Viewport {
    /// Create a viewport, deriving the orientation from its size.
    ///
    /// Fails with [`ResponsiveError::InvalidInput`](crate::ResponsiveError::InvalidInput)
    /// if either dimension is negative or non-finite.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let width = check_dimension("width", width)?;
        let height = check_dimension("height", height)?;
        Ok(Self {
            width,
            height,
            orientation: Orientation::from_size(width, height),
        })
    }

    /// Create a viewport with an orientation reported by the host.
    ///
    /// Some platforms report the device orientation independently of the
    /// window size (split-screen on a rotated tablet), so it is taken as-is.
    pub fn with_orientation(width: f32, height: f32, orientation: Orientation) -> Result<Self> {
        let mut viewport = Self::new(width, height)?;
        viewport.orientation = orientation;
        Ok(viewport)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `(width, height)`
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Width divided by height; 0 when the height is 0
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0.0 {
            0.0
        } else {
            self.width / self.height
        }
    }

    pub fn shortest_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn longest_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// True when there is nothing to draw into (minimized window, first frame)
    pub fn is_zero_area(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    pub fn is_portrait(&self) -> bool {
        self.orientation == Orientation::Portrait
    }

    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }
}
