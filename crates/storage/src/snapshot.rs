//! StoreSnapshot: point-in-time view of the entity store
//!
//! Taking a snapshot clones the per-kind tables under a brief read lock.
//! Entities themselves are `Arc`-shared, so the clone copies only the
//! table maps; later writes copy-on-write the entities they touch and the
//! snapshot keeps seeing the old values.
//!
//! # Design Notes
//!
//! - **Immutable**: once created, the snapshot never changes
//! - **Thread-safe**: can be shared across threads (Arc-wrapped tables)
//! - **Lock-free reads**: the document builder walks a snapshot without
//!   holding any store lock

use std::sync::Arc;

use dataspace_core::{
    App, Artifact, Catalog, Contract, Endpoint, EntityId, EntityLookup, Representation, Resource,
    Rule, SnapshotView,
};

use crate::table::{TableAccess, Tables};

/// An immutable copy of the store's tables
///
/// # Example
///
/// ```
/// use dataspace_core::{EntityLookup, Rule, RuleDesc};
/// use dataspace_storage::EntityStore;
///
/// let store = EntityStore::new();
/// let snapshot = store.snapshot();
///
/// // Writes after snapshot creation are not visible
/// let rule = store.create::<Rule>(RuleDesc::default());
/// assert!(snapshot.rule(&rule.meta.id).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    /// Store version at which this snapshot was taken
    version: u64,
    tables: Arc<Tables>,
}

impl StoreSnapshot {
    /// Wrap cloned tables
    ///
    /// Called by `EntityStore::snapshot()`, not directly.
    pub(crate) fn new(version: u64, tables: Tables) -> Self {
        Self {
            version,
            tables: Arc::new(tables),
        }
    }

    /// Store version this snapshot observes
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Live entities of one kind, oldest first
    pub fn list<T: TableAccess>(&self) -> Vec<Arc<T>> {
        T::table(&self.tables).list()
    }
}

impl EntityLookup for StoreSnapshot {
    fn catalog(&self, id: &EntityId) -> Option<Arc<Catalog>> {
        self.tables.catalog(id)
    }

    fn resource(&self, id: &EntityId) -> Option<Arc<Resource>> {
        self.tables.resource(id)
    }

    fn representation(&self, id: &EntityId) -> Option<Arc<Representation>> {
        self.tables.representation(id)
    }

    fn artifact(&self, id: &EntityId) -> Option<Arc<Artifact>> {
        self.tables.artifact(id)
    }

    fn app(&self, id: &EntityId) -> Option<Arc<App>> {
        self.tables.app(id)
    }

    fn endpoint(&self, id: &EntityId) -> Option<Arc<Endpoint>> {
        self.tables.endpoint(id)
    }

    fn contract(&self, id: &EntityId) -> Option<Arc<Contract>> {
        self.tables.contract(id)
    }

    fn rule(&self, id: &EntityId) -> Option<Arc<Rule>> {
        self.tables.rule(id)
    }
}

impl SnapshotView for StoreSnapshot {
    fn version(&self) -> u64 {
        self.version
    }
}
