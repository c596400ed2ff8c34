use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Entity, EntityMeta, Record};
use crate::contract::{EntityKind, Timestamp};
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// Contract attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDesc {
    /// Title
    pub title: String,
    /// Consumer party
    pub consumer: Option<Url>,
    /// Provider party
    pub provider: Option<Url>,
    /// Start of validity
    pub start: Option<Timestamp>,
    /// End of validity
    pub end: Option<Timestamp>,
}

/// A usage contract attached to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Store-managed metadata
    pub meta: EntityMeta,
    /// Attributes
    pub desc: ContractDesc,
    /// Owned rules (many-to-many)
    pub rules: Vec<EntityId>,
    /// Back-references to resources offering this contract
    pub resources: Vec<EntityId>,
}

impl Record for Contract {
    type Desc = ContractDesc;
    const KIND: EntityKind = EntityKind::Contract;

    fn create(meta: EntityMeta, desc: ContractDesc) -> Self {
        Contract {
            meta,
            desc,
            rules: Vec::new(),
            resources: Vec::new(),
        }
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn desc(&self) -> &ContractDesc {
        &self.desc
    }

    fn desc_mut(&mut self) -> &mut ContractDesc {
        &mut self.desc
    }

    fn owned_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Rule => Some(&mut self.rules),
            _ => None,
        }
    }

    fn owners_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Resource => Some(&mut self.resources),
            _ => None,
        }
    }

    fn lookup(source: &dyn EntityLookup, id: &EntityId) -> Option<Arc<Self>> {
        source.contract(id)
    }

    fn into_entity(this: Arc<Self>) -> Entity {
        Entity::Contract(this)
    }
}
