//! Overlay presentation state.
//!
//! Owns the overlay window surface and everything it shows: visibility,
//! opacity, width ratio and the decoded image. Geometry is recomputed from the
//! primary display on every `show()` and on width changes while visible; the
//! window does not track display changes on its own.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::bitmap::OverlayImage;
use super::geometry::{overlay_frame, Rect};
use crate::error::ImageLoadError;
use crate::model::{
    clamp_opacity, clamp_width_ratio, OverlayConfig, DEFAULT_OPACITY, DEFAULT_WIDTH_RATIO,
};

/// Borderless, click-through, always-on-top window.
pub trait OverlayWindow {
    fn set_frame(&mut self, frame: Rect);
    fn set_alpha(&mut self, alpha: f64);
    /// Replace the displayed bitmap. `false` leaves the previous one showing.
    fn set_image(&mut self, image: &OverlayImage) -> bool;
    /// Raise above every window and space without taking focus.
    fn order_front(&mut self);
    /// Remove from screen, keeping the window and its contents.
    fn order_out(&mut self);
    fn is_visible(&self) -> bool;
}

/// Source of the primary display frame.
pub trait PrimaryDisplay {
    fn frame(&self) -> Option<Rect>;
}

pub struct OverlayPresentation<W, D> {
    window: W,
    display: D,
    opacity: f64,
    width_ratio: f64,
    image: Option<OverlayImage>,
    image_path: Option<PathBuf>,
}

impl<W: OverlayWindow, D: PrimaryDisplay> OverlayPresentation<W, D> {
    pub fn new(mut window: W, display: D) -> Self {
        window.set_alpha(DEFAULT_OPACITY);
        Self {
            window,
            display,
            opacity: DEFAULT_OPACITY,
            width_ratio: DEFAULT_WIDTH_RATIO,
            image: None,
            image_path: None,
        }
    }

    pub fn show(&mut self) {
        self.update_frame();
        self.window.order_front();
        debug!("Overlay shown");
    }

    pub fn hide(&mut self) {
        self.window.order_out();
        debug!("Overlay hidden");
    }

    pub fn toggle(&mut self) {
        if self.is_visible() {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Applied to the window immediately, visible or not.
    pub fn set_opacity(&mut self, value: f64) {
        self.opacity = clamp_opacity(value);
        self.window.set_alpha(self.opacity);
    }

    /// Re-frames the window right away when visible, otherwise on next `show()`.
    pub fn set_width_ratio(&mut self, value: f64) {
        self.width_ratio = clamp_width_ratio(value);
        if self.is_visible() {
            self.update_frame();
        }
    }

    /// Decode and display the image at `path`.
    ///
    /// On failure nothing changes: the previous image (if any) stays.
    pub fn load_image(&mut self, path: &Path) -> Result<(), ImageLoadError> {
        let image = OverlayImage::open(path)?;
        if !self.window.set_image(&image) {
            return Err(ImageLoadError::Display {
                path: path.to_path_buf(),
            });
        }
        info!(
            "Loaded overlay image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.image = Some(image);
        self.image_path = Some(path.to_path_buf());
        Ok(())
    }

    fn update_frame(&mut self) {
        match self.display.frame() {
            Some(display) => self
                .window
                .set_frame(overlay_frame(display, self.width_ratio)),
            None => warn!("No primary display; keeping previous overlay frame"),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn width_ratio(&self) -> f64 {
        self.width_ratio
    }

    pub fn image(&self) -> Option<&OverlayImage> {
        self.image.as_ref()
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    pub fn config(&self) -> OverlayConfig {
        OverlayConfig {
            opacity: self.opacity,
            width_ratio: self.width_ratio,
            visible: self.is_visible(),
            image_path: self.image_path.clone(),
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }
}
