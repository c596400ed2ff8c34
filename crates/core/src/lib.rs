//! Core types and traits for the dataspace offering graph
//!
//! This crate defines the foundational types used throughout the system:
//! - EntityId: UUID identity assigned at creation
//! - EntityKind / EntityRef: the closed kind set and (kind, id) addressing
//! - Timestamp: microsecond creation/modification times
//! - Entities: Catalog, Resource, Representation, Artifact, App, Endpoint,
//!   Contract, Rule, and the `Entity` union over them
//! - Document: the protocol document tree (`ProtocolNode`, `Node`, `SelfLink`)
//! - Traits: read access to entities (`EntityLookup`, `SnapshotView`,
//!   `SnapshotSource`)
//! - Error: `TypeError`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod document;
pub mod entity;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{Result, TypeError};
pub use traits::{EntityLookup, SnapshotSource, SnapshotView};
pub use types::EntityId;

pub use contract::{EntityKind, EntityRef, Timestamp};

pub use entity::{
    App, AppDesc, Artifact, ArtifactData, ArtifactDesc, Authentication, Catalog, CatalogDesc,
    Contract, ContractDesc, Endpoint, EndpointDesc, EndpointType, Entity, EntityMeta,
    PaymentMethod, PolicyPattern, Record, Representation, RepresentationDesc, Resource,
    ResourceDesc, Rule, RuleDesc,
};

pub use document::{
    AppEndpointType, ConnectorEndpoint, Language, Linked, Node, PaymentModality, ProtocolApp,
    ProtocolArtifact, ProtocolCatalog, ProtocolContract, ProtocolEndpoint, ProtocolNode,
    ProtocolRepresentation, ProtocolResource, ProtocolRule, SelfLink, TypedLiteral,
    UsagePolicyClass,
};
