//! Application state (pure Rust, no FFI).
//!
//! This module defines the overlay configuration that is restored from and
//! saved to NSUserDefaults.

use std::path::PathBuf;

use super::constants::*;
use crate::clamp;

/// Durable overlay configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Window alpha in (0, 1].
    pub opacity: f64,
    /// Overlay width as a fraction of the primary display width, in (0, 1].
    pub width_ratio: f64,
    /// Is the overlay on screen?
    pub visible: bool,
    /// Last image loaded successfully.
    pub image_path: Option<PathBuf>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            width_ratio: DEFAULT_WIDTH_RATIO,
            visible: false,
            image_path: None,
        }
    }
}

impl OverlayConfig {
    /// Clamps opacity and width ratio to their valid ranges.
    pub fn validate(&mut self) {
        self.opacity = clamp_opacity(self.opacity);
        self.width_ratio = clamp_width_ratio(self.width_ratio);
    }
}

/// Clamp an opacity to `[MIN_OPACITY, MAX_OPACITY]`. NaN falls back to the default.
pub fn clamp_opacity(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_OPACITY;
    }
    clamp(value, MIN_OPACITY, MAX_OPACITY)
}

/// Clamp a width ratio to `[MIN_WIDTH_RATIO, MAX_WIDTH_RATIO]`. NaN falls back to the default.
pub fn clamp_width_ratio(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_WIDTH_RATIO;
    }
    clamp(value, MIN_WIDTH_RATIO, MAX_WIDTH_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_opacity_keeps_positive() {
        assert_eq!(clamp_opacity(0.0), MIN_OPACITY);
        assert_eq!(clamp_opacity(-3.0), MIN_OPACITY);
        assert_eq!(clamp_opacity(2.0), MAX_OPACITY);
        assert_eq!(clamp_opacity(0.5), 0.5);
        assert_eq!(clamp_opacity(f64::NAN), DEFAULT_OPACITY);
    }

    #[test]
    fn test_clamp_width_ratio_keeps_positive() {
        assert_eq!(clamp_width_ratio(0.0), MIN_WIDTH_RATIO);
        assert_eq!(clamp_width_ratio(1.5), MAX_WIDTH_RATIO);
        assert_eq!(clamp_width_ratio(0.25), 0.25);
        assert_eq!(clamp_width_ratio(f64::NAN), DEFAULT_WIDTH_RATIO);
    }
}
