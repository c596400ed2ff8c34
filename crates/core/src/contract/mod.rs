//! Contract types for addressing and versioning
//!
//! These types express the two guarantees every entity gives:
//!
//! 1. **Addressable**: every entity has a stable identity via `EntityRef`
//! 2. **Versioned**: every entity carries a monotonic version and timestamps
//!
//! ## Module Structure
//!
//! - `entity_kind`: the closed set of entity kinds
//! - `entity_ref`: universal entity addressing
//! - `timestamp`: microsecond timestamps

pub mod entity_kind;
pub mod entity_ref;
pub mod timestamp;

// Re-exports
pub use entity_kind::EntityKind;
pub use entity_ref::EntityRef;
pub use timestamp::Timestamp;
