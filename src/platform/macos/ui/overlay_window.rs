//! Borderless, click-through overlay window.

use tracing::warn;

use crate::overlay::{OverlayImage, OverlayWindow, Rect};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, NSPoint, NSRect, NSSize, NO, YES,
};

/// NSScreenSaverWindowLevel
const OVERLAY_WINDOW_LEVEL: isize = 1000;

// NSWindowCollectionBehaviorCanJoinAllSpaces = 1 << 0 = 1
// NSWindowCollectionBehaviorStationary = 1 << 4 = 16
// NSWindowCollectionBehaviorFullScreenAuxiliary = 1 << 8 = 256
const OVERLAY_COLLECTION_BEHAVIOR: usize = 1 | 16 | 256;

/// NSImageScaleProportionallyUpOrDown
const IMAGE_SCALE_PROPORTIONALLY_UP_OR_DOWN: usize = 3;

/// NSViewWidthSizable | NSViewHeightSizable
const AUTORESIZE_WIDTH_HEIGHT: usize = 2 | 16;

/// NSBitmapFormatAlphaNonpremultiplied
const BITMAP_FORMAT_NON_PREMULTIPLIED: usize = 1 << 1;

pub struct MacOverlayWindow {
    window: id,
    image_view: id,
}

impl MacOverlayWindow {
    /// Create the (hidden) overlay window.
    ///
    /// # Safety
    /// Must be called from main thread with valid autorelease pool.
    pub unsafe fn create() -> Self {
        let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(100.0, 100.0));

        // NSBorderlessWindowMask = 0
        let style_mask: u64 = 0;
        // NSBackingStoreBuffered = 2
        let backing: u64 = 2;

        let window: id = msg_send![get_class("NSWindow"), alloc];
        let window: id = msg_send![
            window,
            initWithContentRect: frame,
            styleMask: style_mask,
            backing: backing,
            defer: NO
        ];
        let _: () = msg_send![window, setReleasedWhenClosed: NO];

        let _: () = msg_send![window, setOpaque: NO];
        let clear_color: id = msg_send![get_class("NSColor"), clearColor];
        let _: () = msg_send![window, setBackgroundColor: clear_color];
        let _: () = msg_send![window, setHasShadow: NO];
        let _: () = msg_send![window, setIgnoresMouseEvents: YES];
        let _: () = msg_send![window, setLevel: OVERLAY_WINDOW_LEVEL];
        let _: () = msg_send![window, setCollectionBehavior: OVERLAY_COLLECTION_BEHAVIOR];

        let content: id = msg_send![window, contentView];
        let bounds: NSRect = msg_send![content, bounds];
        let image_view: id = msg_send![get_class("NSImageView"), alloc];
        let image_view: id = msg_send![image_view, initWithFrame: bounds];
        let _: () = msg_send![image_view, setAutoresizingMask: AUTORESIZE_WIDTH_HEIGHT];
        let _: () = msg_send![image_view, setImageScaling: IMAGE_SCALE_PROPORTIONALLY_UP_OR_DOWN];
        // NSImageAlignCenter = 0
        let _: () = msg_send![image_view, setImageAlignment: 0usize];
        let _: () = msg_send![content, addSubview: image_view];

        Self { window, image_view }
    }

    /// Wrap decoded RGBA pixels in an NSImage. Returns nil on failure.
    unsafe fn ns_image_from(image: &OverlayImage) -> id {
        let (width, height) = (image.width() as isize, image.height() as isize);
        let rep: id = msg_send![get_class("NSBitmapImageRep"), alloc];
        let rep: id = msg_send![
            rep,
            initWithBitmapDataPlanes: std::ptr::null_mut::<*mut u8>(),
            pixelsWide: width,
            pixelsHigh: height,
            bitsPerSample: 8isize,
            samplesPerPixel: 4isize,
            hasAlpha: YES,
            isPlanar: NO,
            colorSpaceName: nsstring_id("NSDeviceRGBColorSpace"),
            bitmapFormat: BITMAP_FORMAT_NON_PREMULTIPLIED,
            bytesPerRow: width * 4,
            bitsPerPixel: 32isize
        ];
        if rep == nil {
            return nil;
        }

        let data: *mut u8 = msg_send![rep, bitmapData];
        if data.is_null() {
            let _: () = msg_send![rep, release];
            return nil;
        }
        let pixels = image.rgba();
        std::ptr::copy_nonoverlapping(pixels.as_ptr(), data, pixels.len());

        let ns_image: id = msg_send![get_class("NSImage"), alloc];
        let ns_image: id = msg_send![
            ns_image,
            initWithSize: NSSize::new(width as f64, height as f64)
        ];
        let _: () = msg_send![ns_image, addRepresentation: rep];
        let _: () = msg_send![rep, release];
        ns_image
    }
}

impl OverlayWindow for MacOverlayWindow {
    fn set_frame(&mut self, frame: Rect) {
        let rect = NSRect::new(
            NSPoint::new(frame.x, frame.y),
            NSSize::new(frame.width, frame.height),
        );
        unsafe {
            let _: () = msg_send![self.window, setFrame: rect, display: YES];
        }
    }

    fn set_alpha(&mut self, alpha: f64) {
        unsafe {
            let _: () = msg_send![self.window, setAlphaValue: alpha];
        }
    }

    fn set_image(&mut self, image: &OverlayImage) -> bool {
        unsafe {
            let ns_image = Self::ns_image_from(image);
            if ns_image == nil {
                warn!("Could not create NSImage for overlay bitmap");
                return false;
            }
            let _: () = msg_send![self.image_view, setImage: ns_image];
            let _: () = msg_send![ns_image, release];
        }
        true
    }

    fn order_front(&mut self) {
        unsafe {
            let _: () = msg_send![self.window, orderFrontRegardless];
        }
    }

    fn order_out(&mut self) {
        unsafe {
            let _: () = msg_send![self.window, orderOut: nil];
        }
    }

    fn is_visible(&self) -> bool {
        unsafe { msg_send![self.window, isVisible] }
    }
}
