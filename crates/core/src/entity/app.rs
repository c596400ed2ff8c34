use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Entity, EntityMeta, Record};
use crate::contract::EntityKind;
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// Usage-policy pattern an app can enforce
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyPattern {
    /// Unrestricted access
    ProvideAccess,
    /// No access
    ProhibitAccess,
    /// Restricted number of uses
    NTimesUsage,
    /// Restricted usage duration
    DurationUsage,
    /// Usage inside a time interval
    UsageDuringInterval,
    /// Usage until deleted
    UsageUntilDeletion,
    /// Usage is logged
    UsageLogging,
    /// Usage is notified
    UsageNotification,
    /// Usage restricted to a connector
    ConnectorRestrictedUsage,
    /// Usage restricted to a security profile
    SecurityProfileRestrictedUsage,
}

/// App attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDesc {
    /// Title
    pub title: String,
    /// Documentation
    pub docs: String,
    /// Environment variables, e.g. "PORT=8080"
    pub environment_variables: String,
    /// Storage configuration, e.g. "/data"
    pub storage_config: String,
    /// Usage policies the app supports
    pub supported_policies: Vec<PolicyPattern>,
    /// Free-form extra attributes
    pub additional: BTreeMap<String, String>,
    /// Publisher of the app
    pub publisher: Option<Url>,
}

/// A data app attached to a representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Store-managed metadata
    pub meta: EntityMeta,
    /// Attributes
    pub desc: AppDesc,
    /// Owned endpoints (many-to-many)
    pub endpoints: Vec<EntityId>,
    /// Back-references to representations using this app
    pub representations: Vec<EntityId>,
}

impl Record for App {
    type Desc = AppDesc;
    const KIND: EntityKind = EntityKind::App;

    fn create(meta: EntityMeta, desc: AppDesc) -> Self {
        App {
            meta,
            desc,
            endpoints: Vec::new(),
            representations: Vec::new(),
        }
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn desc(&self) -> &AppDesc {
        &self.desc
    }

    fn desc_mut(&mut self) -> &mut AppDesc {
        &mut self.desc
    }

    fn owned_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Endpoint => Some(&mut self.endpoints),
            _ => None,
        }
    }

    fn owners_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Representation => Some(&mut self.representations),
            _ => None,
        }
    }

    fn lookup(source: &dyn EntityLookup, id: &EntityId) -> Option<Arc<Self>> {
        source.app(id)
    }

    fn into_entity(this: Arc<Self>) -> Entity {
        Entity::App(this)
    }
}
