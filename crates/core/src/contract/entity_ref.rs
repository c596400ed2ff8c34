//! Universal entity reference type
//!
//! Every entity in the offering graph is addressable by an [`EntityRef`]:
//! its kind plus its id. The pair is all the self-link service needs to
//! produce a canonical external identifier, and all the resolver needs to
//! recover one.
//!
//! ## Usage
//!
//! ```
//! use dataspace_core::{EntityId, EntityKind, EntityRef};
//!
//! let id = EntityId::new();
//! let resource = EntityRef::resource(id);
//!
//! assert_eq!(resource.kind, EntityKind::Resource);
//! assert_eq!(resource.id, id);
//! ```

use super::EntityKind;
use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// Reference to any entity: kind tag plus local id
///
/// ## Invariants
///
/// - An EntityRef names exactly one kind
/// - Two refs are equal iff kind and id are equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// Kind of the referenced entity
    pub kind: EntityKind,
    /// Id of the referenced entity
    pub id: EntityId,
}

impl EntityRef {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a reference from kind and id
    pub const fn new(kind: EntityKind, id: EntityId) -> Self {
        EntityRef { kind, id }
    }

    /// Reference a catalog
    pub const fn catalog(id: EntityId) -> Self {
        Self::new(EntityKind::Catalog, id)
    }

    /// Reference a resource
    pub const fn resource(id: EntityId) -> Self {
        Self::new(EntityKind::Resource, id)
    }

    /// Reference a representation
    pub const fn representation(id: EntityId) -> Self {
        Self::new(EntityKind::Representation, id)
    }

    /// Reference an artifact
    pub const fn artifact(id: EntityId) -> Self {
        Self::new(EntityKind::Artifact, id)
    }

    /// Reference an app
    pub const fn app(id: EntityId) -> Self {
        Self::new(EntityKind::App, id)
    }

    /// Reference an endpoint
    pub const fn endpoint(id: EntityId) -> Self {
        Self::new(EntityKind::Endpoint, id)
    }

    /// Reference a contract
    pub const fn contract(id: EntityId) -> Self {
        Self::new(EntityKind::Contract, id)
    }

    /// Reference a rule
    pub const fn rule(id: EntityId) -> Self {
        Self::new(EntityKind::Rule, id)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Relative path of the entity: `<segment>/<id>`
    pub fn path(&self) -> String {
        format!("{}/{}", self.kind.segment(), self.id)
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind.segment(), self.id)
    }
}
