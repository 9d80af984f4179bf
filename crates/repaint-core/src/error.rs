//! Error types for repaint-core.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while constructing pixels and textures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Pixel count does not match the declared dimensions.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Two textures that must share a size do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First texture width
        a_width: u32,
        /// First texture height
        a_height: u32,
        /// Second texture width
        b_width: u32,
        /// Second texture height
        b_height: u32,
    },

    /// A color literal could not be parsed.
    #[error("invalid color '{0}': expected RRGGBB or RRGGBBAA")]
    InvalidColor(String),
}

impl CoreError {
    /// Creates a [`CoreError::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates a [`CoreError::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }
}
