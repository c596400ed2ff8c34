//! Error types for the entity store
//!
//! Reads through [`EntityLookup`](dataspace_core::EntityLookup) never fail,
//! they report absence as `None`. The direct store API distinguishes the
//! reasons so that callers can tell "never existed" from "was deleted".

use dataspace_core::{EntityKind, EntityRef};
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors from store operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No entity with this id was ever created
    #[error("entity not found: {0}")]
    NotFound(EntityRef),

    /// The entity exists but has been soft-deleted
    #[error("entity deleted: {0}")]
    Deleted(EntityRef),

    /// Link between kinds that have no owner/owned relation
    #[error("{owner} does not own {owned}")]
    KindMismatch {
        /// Kind on the owning side
        owner: EntityKind,
        /// Kind on the owned side
        owned: EntityKind,
    },
}
