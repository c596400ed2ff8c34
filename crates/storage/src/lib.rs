//! Storage layer for the offering graph
//!
//! This crate implements the per-kind persistence lookup with:
//! - EntityStore: per-kind FxHashMap tables behind a RwLock
//! - Soft delete with tombstones (NotFound vs Deleted)
//! - Owner/owned links that maintain back-references
//! - Version management with AtomicU64
//! - StoreSnapshot: cheap point-in-time views for the document builder

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod snapshot;
pub mod store;
pub mod table;

pub use error::{Result, StoreError};
pub use snapshot::StoreSnapshot;
pub use store::EntityStore;
pub use table::{Table, TableAccess, Tables};
