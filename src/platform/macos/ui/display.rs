//! Primary display geometry.

use core_graphics::display::CGDisplay;

use crate::overlay::{PrimaryDisplay, Rect};

/// The display holding the menu bar. Its origin is (0, 0) in both
/// CoreGraphics and Cocoa coordinates.
#[derive(Debug, Default, Clone, Copy)]
pub struct MainDisplay;

impl PrimaryDisplay for MainDisplay {
    fn frame(&self) -> Option<Rect> {
        let bounds = CGDisplay::main().bounds();
        if bounds.size.width <= 0.0 || bounds.size.height <= 0.0 {
            return None;
        }
        Some(Rect::new(
            bounds.origin.x,
            bounds.origin.y,
            bounds.size.width,
            bounds.size.height,
        ))
    }
}
