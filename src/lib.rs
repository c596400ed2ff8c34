//! Dataspace - federation documents for locally hosted offerings
//!
//! Publishes catalogs of data and app offerings to remote peers. The
//! offering graph lives in an entity store; on request, a depth-bounded,
//! acyclic protocol document is built for one root entity, with every
//! subtree that cannot be published pruned away.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use dataspace::{Catalog, CatalogDesc, EntityResolver, EntityStore, PublishConfig, Record};
//!
//! let store = Arc::new(EntityStore::new());
//! let catalog = store.create::<Catalog>(CatalogDesc::default());
//!
//! let resolver = EntityResolver::new(Arc::clone(&store), &PublishConfig::default()).unwrap();
//! let link = resolver.links().link(&catalog.reference());
//! let document = resolver.document_for(link.as_str()).unwrap();
//! assert!(document.as_catalog().is_some());
//! ```
//!
//! # Architecture
//!
//! - `dataspace-core`: entities, kinds, the document tree, lookup traits
//! - `dataspace-storage`: in-memory entity store with snapshots
//! - `dataspace-engine`: builders, self-links, resolver, configuration

pub use dataspace_core::{
    App, AppDesc, AppEndpointType, Artifact, ArtifactData, ArtifactDesc, Authentication, Catalog,
    CatalogDesc, ConnectorEndpoint, Contract, ContractDesc, Endpoint, EndpointDesc, EndpointType,
    Entity, EntityId, EntityKind, EntityLookup, EntityMeta, EntityRef, Language, Linked, Node,
    PaymentMethod, PaymentModality, PolicyPattern, ProtocolApp, ProtocolArtifact, ProtocolCatalog,
    ProtocolContract, ProtocolEndpoint, ProtocolNode, ProtocolRepresentation, ProtocolResource,
    ProtocolRule, Record, Representation, RepresentationDesc, Resource, ResourceDesc, Rule,
    RuleDesc, SelfLink, SnapshotSource, SnapshotView, Timestamp, TypedLiteral, TypeError,
    UsagePolicyClass,
};
pub use dataspace_engine::{
    BuildSettings, ConfigError, DocumentError, DocumentReport, Elision, ElisionLog,
    EndpointSelection, EntityResolver, NotFound, PublishConfig, SelfLinkService, CONFIG_FILE_NAME,
    DEFAULT_MAX_DEPTH,
};
pub use dataspace_storage::{EntityStore, StoreError, StoreSnapshot};
