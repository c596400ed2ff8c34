//! Per-kind entity tables
//!
//! One [`Table`] per entity kind, grouped in [`Tables`]. Entities are held
//! behind `Arc` so snapshots and lookups share them; a write clones the
//! entity only if a snapshot still references it (`Arc::make_mut`).
//!
//! Soft-deleted entities stay in their table with a tombstone flag so the
//! store can report `Deleted` instead of `NotFound`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use dataspace_core::{
    App, Artifact, Catalog, Contract, Endpoint, EntityId, EntityKind, EntityLookup, EntityRef,
    Record, Representation, Resource, Rule, Timestamp,
};

use crate::error::{Result, StoreError};

/// An entity plus its tombstone flag
#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    pub(crate) entity: Arc<T>,
    pub(crate) deleted: bool,
}

/// All entities of one kind
#[derive(Debug, Clone)]
pub struct Table<T> {
    slots: FxHashMap<EntityId, Slot<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            slots: FxHashMap::default(),
        }
    }
}

impl<T: Record> Table<T> {
    /// Insert a freshly created entity
    pub(crate) fn insert(&mut self, entity: T) -> Arc<T> {
        let entity = Arc::new(entity);
        self.slots.insert(
            entity.meta().id,
            Slot {
                entity: Arc::clone(&entity),
                deleted: false,
            },
        );
        entity
    }

    /// Live entity by id
    pub fn live(&self, id: &EntityId) -> Option<Arc<T>> {
        match self.slots.get(id) {
            Some(slot) if !slot.deleted => Some(Arc::clone(&slot.entity)),
            _ => None,
        }
    }

    /// Live entity by id, or why it is unavailable
    pub(crate) fn get(&self, id: &EntityId) -> Result<Arc<T>> {
        let reference = EntityRef::new(T::KIND, *id);
        match self.slots.get(id) {
            None => Err(StoreError::NotFound(reference)),
            Some(slot) if slot.deleted => Err(StoreError::Deleted(reference)),
            Some(slot) => Ok(Arc::clone(&slot.entity)),
        }
    }

    /// Mutable access to a live entity
    pub(crate) fn get_mut(&mut self, id: &EntityId) -> Result<&mut T> {
        let reference = EntityRef::new(T::KIND, *id);
        match self.slots.get_mut(id) {
            None => Err(StoreError::NotFound(reference)),
            Some(slot) if slot.deleted => Err(StoreError::Deleted(reference)),
            Some(slot) => Ok(Arc::make_mut(&mut slot.entity)),
        }
    }

    /// Tombstone a live entity
    pub(crate) fn mark_deleted(&mut self, id: &EntityId, now: Timestamp) -> Result<()> {
        self.get_mut(id)?.meta_mut().touch(now);
        if let Some(slot) = self.slots.get_mut(id) {
            slot.deleted = true;
        }
        Ok(())
    }

    /// Live entities, oldest first
    pub fn list(&self) -> Vec<Arc<T>> {
        let mut live: Vec<Arc<T>> = self
            .slots
            .values()
            .filter(|slot| !slot.deleted)
            .map(|slot| Arc::clone(&slot.entity))
            .collect();
        live.sort_by_key(|e| (e.meta().created, e.meta().id));
        live
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.slots.values().filter(|slot| !slot.deleted).count()
    }

    /// True if there are no live entities
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects the table holding a record type
pub trait TableAccess: Record {
    /// Shared table
    fn table(tables: &Tables) -> &Table<Self>;
    /// Mutable table
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;
}

macro_rules! table_access {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl TableAccess for $ty {
                fn table(tables: &Tables) -> &Table<Self> {
                    &tables.$field
                }

                fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
                    &mut tables.$field
                }
            }
        )*
    };
}

/// Which relation list of an entity to edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Ids of entities this one owns
    Owned,
    /// Back-references to owners
    Owners,
}

/// The eight per-kind tables
#[derive(Debug, Clone, Default)]
pub struct Tables {
    catalogs: Table<Catalog>,
    resources: Table<Resource>,
    representations: Table<Representation>,
    artifacts: Table<Artifact>,
    apps: Table<App>,
    endpoints: Table<Endpoint>,
    contracts: Table<Contract>,
    rules: Table<Rule>,
}

table_access!(
    Catalog => catalogs,
    Resource => resources,
    Representation => representations,
    Artifact => artifacts,
    App => apps,
    Endpoint => endpoints,
    Contract => contracts,
    Rule => rules,
);

impl Tables {
    /// Check that `reference` names a live entity
    pub(crate) fn require_live(&self, reference: &EntityRef) -> Result<()> {
        let id = &reference.id;
        match reference.kind {
            EntityKind::Catalog => self.catalogs.get(id).map(drop),
            EntityKind::Resource => self.resources.get(id).map(drop),
            EntityKind::Representation => self.representations.get(id).map(drop),
            EntityKind::Artifact => self.artifacts.get(id).map(drop),
            EntityKind::App => self.apps.get(id).map(drop),
            EntityKind::Endpoint => self.endpoints.get(id).map(drop),
            EntityKind::Contract => self.contracts.get(id).map(drop),
            EntityKind::Rule => self.rules.get(id).map(drop),
        }
    }

    /// One relation list of a live entity
    ///
    /// `other` is the kind on the far side of the relation.
    pub(crate) fn relation_mut(
        &mut self,
        target: &EntityRef,
        other: EntityKind,
        side: Side,
    ) -> Result<&mut Vec<EntityId>> {
        let id = &target.id;
        match target.kind {
            EntityKind::Catalog => relation_of(&mut self.catalogs, id, other, side),
            EntityKind::Resource => relation_of(&mut self.resources, id, other, side),
            EntityKind::Representation => relation_of(&mut self.representations, id, other, side),
            EntityKind::Artifact => relation_of(&mut self.artifacts, id, other, side),
            EntityKind::App => relation_of(&mut self.apps, id, other, side),
            EntityKind::Endpoint => relation_of(&mut self.endpoints, id, other, side),
            EntityKind::Contract => relation_of(&mut self.contracts, id, other, side),
            EntityKind::Rule => relation_of(&mut self.rules, id, other, side),
        }
    }

    /// Add `owned` to `owner` and the matching back-reference
    ///
    /// Both relation lists are resolved before either is written, so an
    /// error leaves the tables unchanged. Returns `false` if the pair was
    /// already linked.
    pub(crate) fn attach(&mut self, owner: &EntityRef, owned: &EntityRef) -> Result<bool> {
        self.relation_mut(owned, owner.kind, Side::Owners)?;
        let children = self.relation_mut(owner, owned.kind, Side::Owned)?;
        if children.contains(&owned.id) {
            return Ok(false);
        }
        children.push(owned.id);
        let owners = self.relation_mut(owned, owner.kind, Side::Owners)?;
        if !owners.contains(&owner.id) {
            owners.push(owner.id);
        }
        Ok(true)
    }

    /// Remove `owned` from `owner` and the matching back-reference
    ///
    /// Returns `false` if the pair was not linked.
    pub(crate) fn detach(&mut self, owner: &EntityRef, owned: &EntityRef) -> Result<bool> {
        self.relation_mut(owned, owner.kind, Side::Owners)?;
        let children = self.relation_mut(owner, owned.kind, Side::Owned)?;
        let before = children.len();
        children.retain(|id| *id != owned.id);
        if children.len() == before {
            return Ok(false);
        }
        self.relation_mut(owned, owner.kind, Side::Owners)?
            .retain(|id| *id != owner.id);
        Ok(true)
    }

    /// Record a modification of a live entity
    pub(crate) fn touch(&mut self, target: &EntityRef, now: Timestamp) -> Result<()> {
        let id = &target.id;
        let meta = match target.kind {
            EntityKind::Catalog => self.catalogs.get_mut(id)?.meta_mut(),
            EntityKind::Resource => self.resources.get_mut(id)?.meta_mut(),
            EntityKind::Representation => self.representations.get_mut(id)?.meta_mut(),
            EntityKind::Artifact => self.artifacts.get_mut(id)?.meta_mut(),
            EntityKind::App => self.apps.get_mut(id)?.meta_mut(),
            EntityKind::Endpoint => self.endpoints.get_mut(id)?.meta_mut(),
            EntityKind::Contract => self.contracts.get_mut(id)?.meta_mut(),
            EntityKind::Rule => self.rules.get_mut(id)?.meta_mut(),
        };
        meta.touch(now);
        Ok(())
    }
}

fn relation_of<'a, T: Record>(
    table: &'a mut Table<T>,
    id: &EntityId,
    other: EntityKind,
    side: Side,
) -> Result<&'a mut Vec<EntityId>> {
    let mismatch = match side {
        Side::Owned => StoreError::KindMismatch {
            owner: T::KIND,
            owned: other,
        },
        Side::Owners => StoreError::KindMismatch {
            owner: other,
            owned: T::KIND,
        },
    };
    let record = table.get_mut(id)?;
    let list = match side {
        Side::Owned => record.owned_mut(other),
        Side::Owners => record.owners_mut(other),
    };
    list.ok_or(mismatch)
}

impl EntityLookup for Tables {
    fn catalog(&self, id: &EntityId) -> Option<Arc<Catalog>> {
        self.catalogs.live(id)
    }

    fn resource(&self, id: &EntityId) -> Option<Arc<Resource>> {
        self.resources.live(id)
    }

    fn representation(&self, id: &EntityId) -> Option<Arc<Representation>> {
        self.representations.live(id)
    }

    fn artifact(&self, id: &EntityId) -> Option<Arc<Artifact>> {
        self.artifacts.live(id)
    }

    fn app(&self, id: &EntityId) -> Option<Arc<App>> {
        self.apps.live(id)
    }

    fn endpoint(&self, id: &EntityId) -> Option<Arc<Endpoint>> {
        self.endpoints.live(id)
    }

    fn contract(&self, id: &EntityId) -> Option<Arc<Contract>> {
        self.contracts.live(id)
    }

    fn rule(&self, id: &EntityId) -> Option<Arc<Rule>> {
        self.rules.live(id)
    }
}
