//! Persisted entities of the offering graph
//!
//! Each entity is split into three parts:
//!
//! - [`EntityMeta`]: id, timestamps and version, owned by the store
//! - a `*Desc` struct: the user-editable attributes
//! - relation lists: ids of owned entities and back-references to owners
//!
//! Relations are stored in both directions (App <-> Endpoint and so on),
//! but only the owned side is ever walked by the document builder.
//! Back-references exist for collaborators that need "who uses me".

mod app;
mod artifact;
mod catalog;
mod contract;
mod endpoint;
mod representation;
mod resource;
mod rule;

pub use app::{App, AppDesc, PolicyPattern};
pub use artifact::{Artifact, ArtifactData, ArtifactDesc, Authentication};
pub use catalog::{Catalog, CatalogDesc};
pub use contract::{Contract, ContractDesc};
pub use endpoint::{Endpoint, EndpointDesc, EndpointType};
pub use representation::{Representation, RepresentationDesc};
pub use resource::{PaymentMethod, Resource, ResourceDesc};
pub use rule::{Rule, RuleDesc};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::contract::{EntityKind, EntityRef, Timestamp};
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// Store-managed metadata carried by every entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta {
    /// Immutable id assigned at creation
    pub id: EntityId,
    /// Creation time
    pub created: Timestamp,
    /// Last modification time
    pub modified: Timestamp,
    /// Per-entity version, incremented on every modification
    pub version: u64,
}

impl EntityMeta {
    /// Metadata for a freshly created entity (version 1)
    pub fn new(id: EntityId, now: Timestamp) -> Self {
        Self {
            id,
            created: now,
            modified: now,
            version: 1,
        }
    }

    /// Record a modification
    pub fn touch(&mut self, now: Timestamp) {
        self.version += 1;
        self.modified = now.max(self.modified);
    }
}

/// Common behaviour of the eight entity types
///
/// Implemented once per kind. The store is generic over `Record`, and the
/// relation accessors let it maintain both sides of an owner/owned link
/// without knowing the concrete type.
pub trait Record: Clone + Send + Sync + 'static {
    /// User-editable attributes
    type Desc: Clone + Default + Send + Sync;

    /// Kind tag of this entity type
    const KIND: EntityKind;

    /// Build a new entity with empty relations
    fn create(meta: EntityMeta, desc: Self::Desc) -> Self;

    /// Store-managed metadata
    fn meta(&self) -> &EntityMeta;

    /// Mutable store-managed metadata
    fn meta_mut(&mut self) -> &mut EntityMeta;

    /// Attributes
    fn desc(&self) -> &Self::Desc;

    /// Mutable attributes
    fn desc_mut(&mut self) -> &mut Self::Desc;

    /// Ids of owned entities of `kind`, if this type owns that kind
    fn owned_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>>;

    /// Back-references to owners of `kind`, if that kind owns this type
    fn owners_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>>;

    /// Recompute derived attributes after the description changed
    fn refresh(&mut self) {}

    /// Look up a live entity of this type
    fn lookup(source: &dyn EntityLookup, id: &EntityId) -> Option<Arc<Self>>;

    /// Wrap into the closed [`Entity`] union
    fn into_entity(this: Arc<Self>) -> Entity;

    /// Reference to this entity
    fn reference(&self) -> EntityRef {
        EntityRef::new(Self::KIND, self.meta().id)
    }
}

/// Any loaded entity
///
/// This is the closed tagged union the resolver dispatches on.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// A catalog
    Catalog(Arc<Catalog>),
    /// A resource
    Resource(Arc<Resource>),
    /// A representation
    Representation(Arc<Representation>),
    /// An artifact
    Artifact(Arc<Artifact>),
    /// An app
    App(Arc<App>),
    /// An endpoint
    Endpoint(Arc<Endpoint>),
    /// A contract
    Contract(Arc<Contract>),
    /// A rule
    Rule(Arc<Rule>),
}

impl Entity {
    /// Kind tag
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Catalog(_) => EntityKind::Catalog,
            Entity::Resource(_) => EntityKind::Resource,
            Entity::Representation(_) => EntityKind::Representation,
            Entity::Artifact(_) => EntityKind::Artifact,
            Entity::App(_) => EntityKind::App,
            Entity::Endpoint(_) => EntityKind::Endpoint,
            Entity::Contract(_) => EntityKind::Contract,
            Entity::Rule(_) => EntityKind::Rule,
        }
    }

    /// Store-managed metadata
    pub fn meta(&self) -> &EntityMeta {
        match self {
            Entity::Catalog(e) => e.meta(),
            Entity::Resource(e) => e.meta(),
            Entity::Representation(e) => e.meta(),
            Entity::Artifact(e) => e.meta(),
            Entity::App(e) => e.meta(),
            Entity::Endpoint(e) => e.meta(),
            Entity::Contract(e) => e.meta(),
            Entity::Rule(e) => e.meta(),
        }
    }

    /// Entity id
    pub fn id(&self) -> EntityId {
        self.meta().id
    }

    /// Reference (kind + id)
    pub fn reference(&self) -> EntityRef {
        EntityRef::new(self.kind(), self.id())
    }
}
