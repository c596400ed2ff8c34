//! Error types for core types
//!
//! Construction and parsing of ids and kind tags can fail; everything
//! else in this crate is infallible. We use `thiserror` for the
//! `Display` and `Error` implementations.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, TypeError>;

/// Errors from id and kind validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The string is not a valid entity id (UUID)
    #[error("invalid entity id: {0}")]
    InvalidEntityId(String),

    /// The path segment does not name an entity kind
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),
}
