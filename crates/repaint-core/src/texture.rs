//! Texture buffers.
//!
//! A [`PixelBuffer`] is a flat, row-major `Vec<Rgba>`. A [`Texture`] pairs a
//! buffer with its dimensions and guarantees `pixels.len() == width * height`.
//!
//! Recoloring works on buffers alone; dimensions matter only to the code
//! that reads and re-uploads textures.

use crate::{CoreError, CoreResult, Rgba};

/// Flat row-major sequence of samples.
pub type PixelBuffer = Vec<Rgba>;

/// Pixel buffer with known dimensions.
///
/// # Example
///
/// ```
/// use repaint_core::{Rgba, Texture};
///
/// let tex = Texture::filled(2, 2, Rgba::opaque(0.5, 0.5, 0.5));
/// assert_eq!(tex.len(), 4);
/// assert_eq!(tex.pixels()[3], Rgba::opaque(0.5, 0.5, 0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: PixelBuffer,
}

impl Texture {
    /// Creates a texture with every sample set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Wraps an existing buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if the buffer length is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: PixelBuffer) -> CoreResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CoreError::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the texture has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Borrow the samples.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Checks that `other` has the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] otherwise.
    pub fn ensure_same_size(&self, other: &Texture) -> CoreResult<()> {
        if self.dimensions() != other.dimensions() {
            return Err(CoreError::dimension_mismatch(
                self.dimensions(),
                other.dimensions(),
            ));
        }
        Ok(())
    }
}
