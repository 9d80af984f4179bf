//! Error types for texture I/O.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Texture I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported color type / bit depth combination.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Two building directories would write to the same output directory.
    #[error("{} and {} both write to {}", first.display(), second.display(), target.display())]
    OutputCollision {
        /// Root registered first
        first: PathBuf,
        /// Root rejected
        second: PathBuf,
        /// Shared output directory
        target: PathBuf,
    },

    /// Decoded data does not form a valid texture.
    #[error(transparent)]
    Core(#[from] repaint_core::CoreError),
}

/// Result type for texture I/O.
pub type IoResult<T> = Result<T, IoError>;
