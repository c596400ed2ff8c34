use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Entity, EntityMeta, Record};
use crate::contract::EntityKind;
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// Representation attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentationDesc {
    /// Title
    pub title: String,
    /// Media type, e.g. "application/json"
    pub media_type: String,
    /// Language tag as entered by the user
    pub language: String,
    /// Representation standard
    pub standard: Option<Url>,
    /// Runtime environment of the app, e.g. "docker"
    pub runtime_environment: Option<String>,
    /// Service distributing the app image
    pub distribution_service: Option<Url>,
}

/// A concrete representation of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representation {
    /// Store-managed metadata
    pub meta: EntityMeta,
    /// Attributes
    pub desc: RepresentationDesc,
    /// Owned artifacts (many-to-many)
    pub artifacts: Vec<EntityId>,
    /// Owned apps (many-to-many)
    pub apps: Vec<EntityId>,
    /// Back-references to resources using this representation
    pub resources: Vec<EntityId>,
}

impl Record for Representation {
    type Desc = RepresentationDesc;
    const KIND: EntityKind = EntityKind::Representation;

    fn create(meta: EntityMeta, desc: RepresentationDesc) -> Self {
        Representation {
            meta,
            desc,
            artifacts: Vec::new(),
            apps: Vec::new(),
            resources: Vec::new(),
        }
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn desc(&self) -> &RepresentationDesc {
        &self.desc
    }

    fn desc_mut(&mut self) -> &mut RepresentationDesc {
        &mut self.desc
    }

    fn owned_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Artifact => Some(&mut self.artifacts),
            EntityKind::App => Some(&mut self.apps),
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
        source.representation(id)
    }

    fn into_entity(this: Arc<Self>) -> Entity {
        Entity::Representation(this)
    }
}
