use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Entity, EntityMeta, Record};
use crate::contract::EntityKind;
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// How a resource is paid for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    /// Not specified; omitted from documents
    #[default]
    Undefined,
    /// Fixed price
    FixedPrice,
    /// Free of charge
    Free,
    /// Price is negotiated
    NegotiationBasis,
}

/// Resource attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDesc {
    /// Title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Search keywords
    pub keywords: Vec<String>,
    /// Publishing party
    pub publisher: Option<Url>,
    /// Owning party
    pub sovereign: Option<Url>,
    /// Language tag as entered by the user (e.g. "EN", "de")
    pub language: String,
    /// License
    pub license: Option<Url>,
    /// Documentation of the resource endpoint
    pub endpoint_documentation: Option<Url>,
    /// Payment method
    pub payment_method: PaymentMethod,
    /// Self-links of sample resources
    pub samples: Vec<Url>,
}

/// An offered resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Store-managed metadata
    pub meta: EntityMeta,
    /// Attributes
    pub desc: ResourceDesc,
    /// Owned representations (many-to-many)
    pub representations: Vec<EntityId>,
    /// Owned contracts (many-to-many)
    pub contracts: Vec<EntityId>,
    /// Back-references to catalogs listing this resource
    pub catalogs: Vec<EntityId>,
}

impl Record for Resource {
    type Desc = ResourceDesc;
    const KIND: EntityKind = EntityKind::Resource;

    fn create(meta: EntityMeta, desc: ResourceDesc) -> Self {
        Resource {
            meta,
            desc,
            representations: Vec::new(),
            contracts: Vec::new(),
            catalogs: Vec::new(),
        }
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn desc(&self) -> &ResourceDesc {
        &self.desc
    }

    fn desc_mut(&mut self) -> &mut ResourceDesc {
        &mut self.desc
    }

    fn owned_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Representation => Some(&mut self.representations),
            EntityKind::Contract => Some(&mut self.contracts),
            _ => None,
        }
    }

    fn owners_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Catalog => Some(&mut self.catalogs),
            _ => None,
        }
    }

    fn lookup(source: &dyn EntityLookup, id: &EntityId) -> Option<Arc<Self>> {
        source.resource(id)
    }

    fn into_entity(this: Arc<Self>) -> Entity {
        Entity::Resource(this)
    }
}
