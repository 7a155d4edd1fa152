//! Device presets the gallery sweeps through

use vista_core::{ResponsiveConfig, Result, Viewport};

/// A named viewport size in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevicePreset {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
}

impl DevicePreset {
    pub const fn new(name: &'static str, width: f32, height: f32) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    /// Viewport for this preset under the config's invalid-input policy
    pub fn viewport(&self, config: &ResponsiveConfig) -> Result<Viewport> {
        config.viewport(self.width, self.height)
    }
}

/// Presets covering every category and both orientations, plus the
/// degenerate zero-area window.
pub const PRESETS: &[DevicePreset] = &[
    DevicePreset::new("small-phone", 320.0, 568.0),
    DevicePreset::new("phone", 390.0, 844.0),
    DevicePreset::new("phone-landscape", 844.0, 390.0),
    DevicePreset::new("small-tablet", 600.0, 960.0),
    DevicePreset::new("tablet", 768.0, 1024.0),
    DevicePreset::new("tablet-landscape", 1024.0, 768.0),
    DevicePreset::new("laptop", 1280.0, 800.0),
    DevicePreset::new("desktop", 1920.0, 1080.0),
    DevicePreset::new("zero-area", 0.0, 0.0),
];

/// Look up a preset by name
pub fn preset(name: &str) -> Option<DevicePreset> {
    PRESETS.iter().copied().find(|p| p.name == name)
}
