//! Error types for shelfmark-core

use thiserror::Error;

/// Result type alias for shelfmark operations
pub type Result<T> = std::result::Result<T, ShelfmarkError>;

/// Main error type for shelfmark operations
#[derive(Error, Debug)]
pub enum ShelfmarkError {
    /// Input rejected before any state change
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Library file could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Validation errors. Rejected inputs never mutate the library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Text field exceeds the maximum length
    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    /// Publication year outside the accepted range
    #[error("publication year {year} is outside {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Genre string is not in the fixed set
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    /// Removal index past the end of the library
    #[error("index {index} is out of bounds for a library of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Persistence errors. The in-memory library stays usable on every path:
/// a read failure falls back to an empty sequence, a write failure keeps
/// the mutation in memory until the next successful flush.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Library file is present but unreadable or not valid JSON
    #[error("Read error: {0}")]
    Read(String),

    /// Flush to the library file failed
    #[error("Write error: {0}")]
    Write(String),
}
