use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Entity, EntityMeta, Record};
use crate::contract::EntityKind;
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// Rule attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDesc {
    /// Title
    pub title: String,
    /// Serialized policy, published verbatim
    pub value: String,
}

/// A single usage rule of a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Store-managed metadata
    pub meta: EntityMeta,
    /// Attributes
    pub desc: RuleDesc,
    /// Back-references to contracts containing this rule
    pub contracts: Vec<EntityId>,
}

impl Record for Rule {
    type Desc = RuleDesc;
    const KIND: EntityKind = EntityKind::Rule;

    fn create(meta: EntityMeta, desc: RuleDesc) -> Self {
        Rule {
            meta,
            desc,
            contracts: Vec::new(),
        }
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn desc(&self) -> &RuleDesc {
        &self.desc
    }

    fn desc_mut(&mut self) -> &mut RuleDesc {
        &mut self.desc
    }

    fn owned_mut(&mut self, _kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        None
    }

    fn owners_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Contract => Some(&mut self.contracts),
            _ => None,
        }
    }

    fn lookup(source: &dyn EntityLookup, id: &EntityId) -> Option<Arc<Self>> {
        source.rule(id)
    }

    fn into_entity(this: Arc<Self>) -> Entity {
        Entity::Rule(this)
    }
}
