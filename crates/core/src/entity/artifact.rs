use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Entity, EntityMeta, Record};
use crate::contract::EntityKind;
use crate::traits::EntityLookup;
use crate::types::EntityId;

/// Credentials used to fetch remote artifact data
///
/// Never copied into protocol documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Authentication {
    /// HTTP basic auth
    Basic {
        /// User name
        username: String,
        /// Password
        password: String,
    },
    /// API key sent as a header
    ApiKey {
        /// Header name
        key: String,
        /// Header value
        value: String,
    },
}

/// Where an artifact's bytes live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactData {
    /// Bytes stored locally
    Local(Vec<u8>),
    /// Bytes fetched from a remote location on demand
    Remote {
        /// Access URL
        access_url: Url,
        /// Credentials for the access URL
        authentication: Vec<Authentication>,
    },
}

impl Default for ArtifactData {
    fn default() -> Self {
        ArtifactData::Local(Vec::new())
    }
}

impl ArtifactData {
    /// Byte size and CRC32 checksum of local data
    ///
    /// Remote data is opaque until fetched and reports `(0, 0)`.
    pub fn digest(&self) -> (u64, u32) {
        match self {
            ArtifactData::Local(bytes) => (bytes.len() as u64, crc32fast::hash(bytes)),
            ArtifactData::Remote { .. } => (0, 0),
        }
    }
}

/// Artifact attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDesc {
    /// Title, published as the file name
    pub title: String,
    /// Payload location
    pub data: ArtifactData,
    /// Download remote data automatically
    pub automated_download: bool,
}

/// Payload descriptor of a representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Store-managed metadata
    pub meta: EntityMeta,
    /// Attributes
    pub desc: ArtifactDesc,
    /// Payload size in bytes (derived from local data)
    pub byte_size: u64,
    /// CRC32 of the payload (derived from local data)
    pub checksum: u32,
    /// Back-references to representations using this artifact
    pub representations: Vec<EntityId>,
}

impl Record for Artifact {
    type Desc = ArtifactDesc;
    const KIND: EntityKind = EntityKind::Artifact;

    fn create(meta: EntityMeta, desc: ArtifactDesc) -> Self {
        let (byte_size, checksum) = desc.data.digest();
        Artifact {
            meta,
            desc,
            byte_size,
            checksum,
            representations: Vec::new(),
        }
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn desc(&self) -> &ArtifactDesc {
        &self.desc
    }

    fn desc_mut(&mut self) -> &mut ArtifactDesc {
        &mut self.desc
    }

    fn owned_mut(&mut self, _kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        None
    }

    fn owners_mut(&mut self, kind: EntityKind) -> Option<&mut Vec<EntityId>> {
        match kind {
            EntityKind::Representation => Some(&mut self.representations),
            _ => None,
        }
    }

    fn refresh(&mut self) {
        let (byte_size, checksum) = self.desc.data.digest();
        self.byte_size = byte_size;
        self.checksum = checksum;
    }

    fn lookup(source: &dyn EntityLookup, id: &EntityId) -> Option<Arc<Self>> {
        source.artifact(id)
    }

    fn into_entity(this: Arc<Self>) -> Entity {
        Entity::Artifact(this)
    }
}
