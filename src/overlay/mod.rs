//! Overlay module.
//!
//! Contains the platform-independent overlay logic:
//! - geometry.rs: frame computation against the primary display
//! - bitmap.rs: decoded overlay bitmap
//! - presentation.rs: visibility/opacity/width state and the window seam

pub mod bitmap;
pub mod geometry;
pub mod presentation;

pub use bitmap::OverlayImage;
pub use geometry::{overlay_frame, Rect};
pub use presentation::{OverlayPresentation, OverlayWindow, PrimaryDisplay};
