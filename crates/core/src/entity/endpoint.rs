use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Entity, EntityMeta, Record};
use crate::contract::EntityKind;
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// Role of an app endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndpointType {
    /// Configuration input
    Config,
    /// Data input
    #[default]
    Input,
    /// Data output
    Output,
    /// Health/status
    Status,
    /// Usage-policy enforcement
    UsagePolicy,
}

/// Endpoint attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDesc {
    /// Access location as entered by the user
    pub location: String,
    /// Path relative to the app host
    pub path: String,
    /// Media type accepted or produced
    pub media_type: String,
    /// Port
    pub port: u16,
    /// Protocol, e.g. "HTTP/1.1"
    pub protocol: String,
    /// Role
    pub endpoint_type: EndpointType,
    /// Documentation link
    pub docs: Option<Url>,
    /// Free-text information
    pub info: String,
    /// Language tag of `info`
    pub language: String,
}

/// A network endpoint exposed by an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Store-managed metadata
    pub meta: EntityMeta,
    /// Attributes
    pub desc: EndpointDesc,
    /// Back-references to apps exposing this endpoint
    pub apps: Vec<EntityId>,
}

impl Record for Endpoint {
    type Desc = EndpointDesc;
    const KIND: EntityKind = EntityKind::Endpoint;

    fn create(meta: EntityMeta, desc: EndpointDesc) -> Self {
        Endpoint {
            meta,
            desc,
            apps: Vec::new(),
        }
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn desc(&self) -> &EndpointDesc {
        &self.desc
    }

    fn desc_mut(&mut self) -> &mut EndpointDesc {
        &mut self.desc
    }

    fn owned_mut(&mut self, _kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        None
    }

    fn owners_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::App => Some(&mut self.apps),
            _ => None,
        }
    }

    fn lookup(source: &dyn EntityLookup, id: &EntityId) -> Option<Arc<Self>> {
        source.endpoint(id)
    }

    fn into_entity(this: Arc<Self>) -> Entity {
        Entity::Endpoint(this)
    }
}
