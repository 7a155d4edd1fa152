//! Responsive error types

use thiserror::Error;

/// Errors raised by viewport classification and configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponsiveError {
    /// A dimension was negative, NaN, or infinite
    #[error("Invalid {what}: {value} (expected a finite, non-negative number)")]
    InvalidInput {
        /// Which dimension was rejected ("width", "height", ...)
        what: &'static str,
        value: f32,
    },

    /// Breakpoint thresholds that would leave a gap or overlap between categories
    #[error(
        "Invalid breakpoints: tablet={tablet}, desktop={desktop} (expected 0 < tablet < desktop)"
    )]
    InvalidBreakpoints { tablet: f32, desktop: f32 },

    /// A responsive value was assembled without the mandatory mobile value
    #[error("Responsive value has no mobile value to fall back to")]
    MissingBreakpointValue,

    /// Configuration could not be parsed or serialized
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for responsive operations
pub type Result<T> = std::result::Result<T, ResponsiveError>;

/// Check that a dimension is finite and non-negative
pub(crate) fn check_dimension(what: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ResponsiveError::InvalidInput { what, value })
    }
}
