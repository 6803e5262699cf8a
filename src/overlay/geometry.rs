//! Overlay geometry.

/// Axis-aligned rectangle in screen points (Cocoa coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Frame of the overlay on `display`: full height, `width_ratio` of the
/// width, horizontally centred.
///
/// `width_ratio` is expected to be clamped already.
pub fn overlay_frame(display: Rect, width_ratio: f64) -> Rect {
    let width = display.width * width_ratio;
    let x = display.x + (display.width - width) / 2.0;
    Rect::new(x, display.y, width, display.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_width_is_centered() {
        let frame = overlay_frame(Rect::new(0.0, 0.0, 2000.0, 1200.0), 0.5);
        assert_eq!(frame, Rect::new(500.0, 0.0, 1000.0, 1200.0));
    }

    #[test]
    fn test_full_width_covers_display() {
        let display = Rect::new(0.0, 0.0, 1440.0, 900.0);
        assert_eq!(overlay_frame(display, 1.0), display);
    }

    #[test]
    fn test_display_origin_is_respected() {
        let frame = overlay_frame(Rect::new(100.0, 50.0, 800.0, 600.0), 0.25);
        assert_eq!(frame, Rect::new(400.0, 50.0, 200.0, 600.0));
    }
}
