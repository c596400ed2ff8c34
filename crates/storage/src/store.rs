//! EntityStore: in-memory entity store with version management
//!
//! This module implements the per-kind persistence lookup using:
//! - one [`Table`](crate::Table) per entity kind behind a `parking_lot::RwLock`
//! - `AtomicU64` for a monotonically increasing store version
//! - `Arc`-shared entities so snapshots are cheap
//!
//! # Design Notes
//!
//! - **Soft delete**: deleted entities are tombstoned, never removed. Lookups
//!   report them as absent, the direct API reports `Deleted`.
//! - **Both sides of a link**: `link` pushes the owned id on the owner and
//!   the owner id on the owned entity's back-references in one write lock.
//! - **Version bump under the write lock**: a snapshot taken under the read
//!   lock always observes a version matching its data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use dataspace_core::{
    App, Artifact, Catalog, Contract, Endpoint, EntityId, EntityLookup, EntityMeta, EntityRef,
    Representation, Resource, Rule, SnapshotSource, Timestamp,
};

use crate::error::{Result, StoreError};
use crate::snapshot::StoreSnapshot;
use crate::table::{TableAccess, Tables};

/// In-memory store for the eight entity kinds
///
/// Thread-safe through `parking_lot::RwLock` and `AtomicU64`.
#[derive(Debug, Default)]
pub struct EntityStore {
    tables: RwLock<Tables>,
    /// Store-wide version, incremented on every write
    version: AtomicU64,
}

impl EntityStore {
    /// Create an empty store at version 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next store version
    fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Current store version
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Create an entity with a fresh id
    pub fn create<T: TableAccess>(&self, desc: T::Desc) -> Arc<T> {
        let now = Timestamp::now();
        let entity = T::create(EntityMeta::new(EntityId::new(), now), desc);

        let mut tables = self.tables.write();
        let entity = T::table_mut(&mut tables).insert(entity);
        let version = self.next_version();

        debug!(
            target: "dataspace::store",
            entity = %entity.reference(),
            version,
            "created entity"
        );
        entity
    }

    /// Edit an entity's attributes
    ///
    /// Derived attributes are recomputed and the entity version is bumped.
    pub fn update<T: TableAccess>(
        &self,
        id: &EntityId,
        edit: impl FnOnce(&mut T::Desc),
    ) -> Result<Arc<T>> {
        let now = Timestamp::now();
        let mut tables = self.tables.write();
        let table = T::table_mut(&mut tables);

        let record = table.get_mut(id)?;
        edit(record.desc_mut());
        record.refresh();
        record.meta_mut().touch(now);

        let updated = table.get(id)?;
        let version = self.next_version();
        debug!(
            target: "dataspace::store",
            entity = %updated.reference(),
            entity_version = updated.meta().version,
            version,
            "updated entity"
        );
        Ok(updated)
    }

    /// Soft-delete an entity
    ///
    /// The entity disappears from lookups and therefore from every owner's
    /// child list; relation ids are left in place.
    pub fn delete<T: TableAccess>(&self, id: &EntityId) -> Result<()> {
        let now = Timestamp::now();
        let mut tables = self.tables.write();
        T::table_mut(&mut tables).mark_deleted(id, now)?;
        let version = self.next_version();

        debug!(
            target: "dataspace::store",
            entity = %EntityRef::new(T::KIND, *id),
            version,
            "deleted entity"
        );
        Ok(())
    }

    /// Live entity by id
    ///
    /// Distinguishes never-created (`NotFound`) from soft-deleted (`Deleted`).
    pub fn get<T: TableAccess>(&self, id: &EntityId) -> Result<Arc<T>> {
        T::table(&self.tables.read()).get(id)
    }

    /// Live entities of one kind, oldest first
    pub fn list<T: TableAccess>(&self) -> Vec<Arc<T>> {
        T::table(&self.tables.read()).list()
    }

    /// Attach `owned` to `owner`
    ///
    /// Both entities must be live and `owner.kind` must own `owned.kind`.
    /// Linking an already linked pair is a no-op.
    pub fn link(&self, owner: EntityRef, owned: EntityRef) -> Result<()> {
        check_kinds(&owner, &owned)?;
        let now = Timestamp::now();
        let mut tables = self.tables.write();
        tables.require_live(&owner)?;
        tables.require_live(&owned)?;

        if !tables.attach(&owner, &owned)? {
            return Ok(());
        }
        tables.touch(&owner, now)?;
        tables.touch(&owned, now)?;
        let version = self.next_version();

        debug!(target: "dataspace::store", %owner, %owned, version, "linked");
        Ok(())
    }

    /// Detach `owned` from `owner`
    ///
    /// Unlinking a pair that is not linked is a no-op.
    pub fn unlink(&self, owner: EntityRef, owned: EntityRef) -> Result<()> {
        check_kinds(&owner, &owned)?;
        let now = Timestamp::now();
        let mut tables = self.tables.write();
        tables.require_live(&owner)?;
        tables.require_live(&owned)?;

        if !tables.detach(&owner, &owned)? {
            return Ok(());
        }
        tables.touch(&owner, now)?;
        tables.touch(&owned, now)?;
        let version = self.next_version();

        debug!(target: "dataspace::store", %owner, %owned, version, "unlinked");
        Ok(())
    }

    /// Capture the current state
    ///
    /// Holds the read lock only while cloning the table maps.
    pub fn snapshot(&self) -> StoreSnapshot {
        // Read the version under the lock so it matches the cloned data
        let tables = self.tables.read();
        let version = self.current_version();
        let snapshot = StoreSnapshot::new(version, tables.clone());
        drop(tables);

        debug!(target: "dataspace::store", version, "snapshot taken");
        snapshot
    }
}

fn check_kinds(owner: &EntityRef, owned: &EntityRef) -> Result<()> {
    if owner.kind.owns(owned.kind) {
        Ok(())
    } else {
        Err(StoreError::KindMismatch {
            owner: owner.kind,
            owned: owned.kind,
        })
    }
}

impl EntityLookup for EntityStore {
    fn catalog(&self, id: &EntityId) -> Option<Arc<Catalog>> {
        self.tables.read().catalog(id)
    }

    fn resource(&self, id: &EntityId) -> Option<Arc<Resource>> {
        self.tables.read().resource(id)
    }

    fn representation(&self, id: &EntityId) -> Option<Arc<Representation>> {
        self.tables.read().representation(id)
    }

    fn artifact(&self, id: &EntityId) -> Option<Arc<Artifact>> {
        self.tables.read().artifact(id)
    }

    fn app(&self, id: &EntityId) -> Option<Arc<App>> {
        self.tables.read().app(id)
    }

    fn endpoint(&self, id: &EntityId) -> Option<Arc<Endpoint>> {
        self.tables.read().endpoint(id)
    }

    fn contract(&self, id: &EntityId) -> Option<Arc<Contract>> {
        self.tables.read().contract(id)
    }

    fn rule(&self, id: &EntityId) -> Option<Arc<Rule>> {
        self.tables.read().rule(id)
    }
}

impl SnapshotSource for EntityStore {
    type Snapshot = StoreSnapshot;

    fn snapshot(&self) -> StoreSnapshot {
        EntityStore::snapshot(self)
    }

    fn current_version(&self) -> u64 {
        EntityStore::current_version(self)
    }
}
