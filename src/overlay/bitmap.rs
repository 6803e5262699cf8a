//! Decoded overlay image.

use std::path::Path;

use image::RgbaImage;

use crate::error::ImageLoadError;

/// A decoded, straight-alpha RGBA8 bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayImage {
    pixels: RgbaImage,
}

impl OverlayImage {
    /// Decode the file at `path`. The format is sniffed from the contents.
    pub fn open(path: &Path) -> Result<Self, ImageLoadError> {
        let decoded = image::ImageReader::open(path)
            .map_err(|source| ImageLoadError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(source),
            })?
            .with_guessed_format()
            .map_err(|source| ImageLoadError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(source),
            })?
            .decode()
            .map_err(|source| ImageLoadError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            pixels: decoded.into_rgba8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Row-major RGBA bytes, `width * 4` per row.
    pub fn rgba(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}
