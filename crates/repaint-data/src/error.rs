//! Error types for persistent data.

use thiserror::Error;

/// Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors reading or writing configuration and savegame data.
#[derive(Debug, Error)]
pub enum DataError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML could not be parsed or written.
    #[error("XML error: {0}")]
    Xml(String),

    /// Payload ended before all declared records were read.
    #[error("truncated color payload: {expected} records declared, {read} read")]
    Truncated {
        /// Records declared in the header
        expected: u32,
        /// Complete records found
        read: u32,
    },

    /// Bytes remain after the last declared record.
    #[error("color payload has {0} trailing bytes")]
    TrailingBytes(usize),
}
