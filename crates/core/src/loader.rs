//! Image file loading and saving.
//!
//! This is the boundary between the engine and the filesystem: files are
//! decoded into the engine's RGBA8 buffer layout on the way in, and the
//! current buffer is encoded by file extension on the way out. The engine
//! itself never touches a path.

use crate::error::Result;
use image::RgbaImage;
use std::path::Path;

/// File decode/encode utilities for the editing workflow.
pub struct ImageLoader;

impl ImageLoader {
    /// Decodes an image file into an RGBA8 buffer.
    ///
    /// Any format the `image` crate's enabled features understand is
    /// accepted; whatever the source channel layout was, the result is
    /// row-major RGBA with 8 bits per channel.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditError::Image`] if the file cannot be decoded,
    /// or [`crate::EditError::Io`] if it cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<RgbaImage> {
        let decoded = image::open(path)?;
        Ok(decoded.to_rgba8())
    }

    /// Encodes a buffer to the given path, format chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditError::Image`] if the extension maps to no
    /// supported encoder or encoding fails.
    pub fn save(path: impl AsRef<Path>, buffer: &RgbaImage) -> Result<()> {
        buffer.save(path)?;
        Ok(())
    }
}
