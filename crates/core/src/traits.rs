//! Core traits for entity lookup and snapshot abstraction
//!
//! - [`EntityLookup`]: per-kind access to live entities
//! - [`SnapshotView`]: a versioned, immutable lookup
//! - [`SnapshotSource`]: something that can produce snapshot views
//!
//! The document builder only ever reads entities through [`EntityLookup`].
//! Implementations decide what "live" means (soft-deleted entities must be
//! reported as absent) and how a consistent view is obtained.

use std::sync::Arc;

use crate::contract::{EntityKind, EntityRef};
use crate::entity::{
    App, Artifact, Catalog, Contract, Endpoint, Entity, Record, Representation, Resource, Rule,
};
use crate::types::EntityId;

/// Read access to live entities, one accessor per kind
///
/// Every accessor returns `None` when the id is unknown or the entity has
/// been soft-deleted.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait EntityLookup: Send + Sync {
    /// Live catalog by id
    fn catalog(&self, id: &EntityId) -> Option<Arc<Catalog>>;
    /// Live resource by id
    fn resource(&self, id: &EntityId) -> Option<Arc<Resource>>;
    /// Live representation by id
    fn representation(&self, id: &EntityId) -> Option<Arc<Representation>>;
    /// Live artifact by id
    fn artifact(&self, id: &EntityId) -> Option<Arc<Artifact>>;
    /// Live app by id
    fn app(&self, id: &EntityId) -> Option<Arc<App>>;
    /// Live endpoint by id
    fn endpoint(&self, id: &EntityId) -> Option<Arc<Endpoint>>;
    /// Live contract by id
    fn contract(&self, id: &EntityId) -> Option<Arc<Contract>>;
    /// Live rule by id
    fn rule(&self, id: &EntityId) -> Option<Arc<Rule>>;

    /// Live entity of any kind
    fn entity(&self, reference: &EntityRef) -> Option<Entity> {
        let id = &reference.id;
        match reference.kind {
            EntityKind::Catalog => self.catalog(id).map(Catalog::into_entity),
            EntityKind::Resource => self.resource(id).map(Resource::into_entity),
            EntityKind::Representation => self.representation(id).map(Representation::into_entity),
            EntityKind::Artifact => self.artifact(id).map(Artifact::into_entity),
            EntityKind::App => self.app(id).map(App::into_entity),
            EntityKind::Endpoint => self.endpoint(id).map(Endpoint::into_entity),
            EntityKind::Contract => self.contract(id).map(Contract::into_entity),
            EntityKind::Rule => self.rule(id).map(Rule::into_entity),
        }
    }
}

/// A point-in-time, read-only view of the entity graph
///
/// Writes made to the source after the view was taken are never observed.
pub trait SnapshotView: EntityLookup {
    /// Store version this view observes
    fn version(&self) -> u64;
}

/// A lookup that can hand out point-in-time views of itself
///
/// The snapshot must not observe writes made after it was taken, and taking
/// it must not hold any lock past the call.
pub trait SnapshotSource: EntityLookup {
    /// Snapshot type
    type Snapshot: SnapshotView + 'static;

    /// Capture the current state
    fn snapshot(&self) -> Self::Snapshot;

    /// Version of the state a new snapshot would observe
    fn current_version(&self) -> u64;
}
