//! Image provider.

use std::path::Path;

use hipmark_core::{Error, Result};
use tracing::debug;

/// A decoded image in RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA bytes, `width * height * 4` long.
    pub pixels: Vec<u8>,
}

/// Source of pixel data for the annotated images.
pub trait ImageSource {
    fn load_image(&self, path: &Path) -> Result<LoadedImage>;
}

/// Decodes images from disk with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageSource;

impl ImageSource for FsImageSource {
    fn load_image(&self, path: &Path) -> Result<LoadedImage> {
        let decoded = image::open(path).map_err(|e| Error::ImageLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        debug!("Decoded {:?} ({}x{})", path, width, height);
        Ok(LoadedImage {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}
