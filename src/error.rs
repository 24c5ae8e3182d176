//! Defines [`WkxError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::datatypes::Dimension;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WkxError {
    /// An argument passed to a constructor was unusable, e.g. an empty path.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested configuration is not implemented by this codec.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// The object is in a state that does not allow the operation, e.g. settings that are
    /// already bound to a writer.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Coordinates or child geometries with different ordinate profiles were combined.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },

    /// Malformed Well-Known Text.
    ///
    /// `position` is the character offset of `token` in the input.
    #[error("WKT parse error at position {position} near '{token}': {message}")]
    WktParse {
        message: String,
        token: String,
        position: usize,
    },

    /// Malformed Well-Known Binary.
    #[error("WKB format error: {0}")]
    WkbFormat(String),

    /// Well-Known Binary input ended before the geometry was complete.
    #[error("WKB input truncated at byte offset {offset}")]
    Truncated { offset: u64 },

    /// A count does not fit into the 32 bit field of the binary encoding.
    #[error("Overflow")]
    Overflow,

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, WkxError>;
