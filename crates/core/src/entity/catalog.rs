use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Entity, EntityMeta, Record};
use crate::contract::EntityKind;
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// Catalog attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDesc {
    /// Title
    pub title: String,
    /// Free-text description
    pub description: String,
}

/// A catalog of offered resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Store-managed metadata
    pub meta: EntityMeta,
    /// Attributes
    pub desc: CatalogDesc,
    /// Owned resources (many-to-many)
    pub resources: Vec<EntityId>,
}

impl Record for Catalog {
    type Desc = CatalogDesc;
    const KIND: EntityKind = EntityKind::Catalog;

    fn create(meta: EntityMeta, desc: CatalogDesc) -> Self {
        Catalog {
            meta,
            desc,
            resources: Vec::new(),
        }
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn desc(&self) -> &CatalogDesc {
        &self.desc
    }

    fn desc_mut(&mut self) -> &mut CatalogDesc {
        &mut self.desc
    }

    fn owned_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Resource => Some(&mut self.resources),
            _ => None,
        }
    }

    fn owners_mut(&mut self, _kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        None
    }

    fn lookup(source: &dyn EntityLookup, id: &EntityId) -> Option<Arc<Self>> {
        source.catalog(id)
    }

    fn into_entity(this: Arc<Self>) -> Entity {
        Entity::Catalog(this)
    }
}
