//! Full protocol nodes, one per entity kind
//!
//! Child collections hold [`Node`]s so a depth-exhausted child appears as a
//! self-link stub. Every collection has already been pruned: an elided
//! child is simply absent.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use super::vocabulary::{AppEndpointType, Language, PaymentModality, UsagePolicyClass};
use super::{Linked, Node, SelfLink, TypedLiteral};

/// Published catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolCatalog {
    /// Self-link
    pub id: SelfLink,
    /// Title
    pub title: TypedLiteral,
    /// Description
    pub description: TypedLiteral,
    /// Offered resources that survived pruning
    pub offered_resources: Vec<Node<ProtocolResource>>,
}

/// Endpoint under which a resource can be requested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorEndpoint {
    /// Access URL (the resource's self-link)
    pub access_url: SelfLink,
    /// Endpoint documentation
    pub endpoint_documentation: Vec<Url>,
}

/// Published resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolResource {
    /// Self-link
    pub id: SelfLink,
    /// Title
    pub title: TypedLiteral,
    /// Description
    pub description: TypedLiteral,
    /// Keywords
    pub keywords: Vec<TypedLiteral>,
    /// Language
    pub language: Language,
    /// Publisher
    pub publisher: Option<Url>,
    /// Sovereign
    pub sovereign: Option<Url>,
    /// Standard license
    pub standard_license: Option<Url>,
    /// Payment modality; absent when undefined
    pub payment_modality: Option<PaymentModality>,
    /// Entity version
    pub version: String,
    /// Creation time
    pub created: DateTime<Utc>,
    /// Last modification time
    pub modified: DateTime<Utc>,
    /// Resource endpoint
    pub resource_endpoint: ConnectorEndpoint,
    /// Sample resources, by reference
    pub samples: Vec<SelfLink>,
    /// Representations that survived pruning (never empty)
    pub representations: Vec<Node<ProtocolRepresentation>>,
    /// Contract offers (never empty)
    pub contract_offers: Vec<Node<ProtocolContract>>,
}

/// Published representation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolRepresentation {
    /// Self-link
    pub id: SelfLink,
    /// Title
    pub title: TypedLiteral,
    /// Language
    pub language: Language,
    /// Media type
    pub media_type: String,
    /// Representation standard
    pub standard: Option<Url>,
    /// App runtime environment
    pub runtime_environment: Option<String>,
    /// App distribution service
    pub distribution_service: Option<Url>,
    /// Creation time
    pub created: DateTime<Utc>,
    /// Last modification time
    pub modified: DateTime<Utc>,
    /// Artifacts (never empty)
    pub instances: Vec<Node<ProtocolArtifact>>,
    /// Apps that survived pruning (never empty)
    pub apps: Vec<Node<ProtocolApp>>,
}

/// Published artifact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolArtifact {
    /// Self-link
    pub id: SelfLink,
    /// File name
    pub file_name: String,
    /// Payload size in bytes
    pub byte_size: u64,
    /// CRC32 checksum, lowercase hex
    pub checksum: String,
    /// Creation time
    pub created: DateTime<Utc>,
}

/// Published data app
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolApp {
    /// Self-link
    pub id: SelfLink,
    /// Title
    pub title: TypedLiteral,
    /// Documentation
    pub documentation: String,
    /// Environment variables
    pub environment_variables: String,
    /// Storage configuration
    pub storage_configuration: String,
    /// Supported usage policies
    pub supported_usage_policies: Vec<UsagePolicyClass>,
    /// Endpoints (never empty)
    pub endpoints: Vec<Node<ProtocolEndpoint>>,
}

/// Published app endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolEndpoint {
    /// Self-link
    pub id: SelfLink,
    /// Access URL
    pub access_url: Url,
    /// Path
    pub path: String,
    /// Media type
    pub media_type: String,
    /// Port
    pub port: u16,
    /// Protocol
    pub protocol: String,
    /// Role
    pub endpoint_type: AppEndpointType,
    /// Documentation
    pub documentation: Option<Url>,
    /// Information
    pub information: TypedLiteral,
}

/// Published contract offer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolContract {
    /// Self-link
    pub id: SelfLink,
    /// Title
    pub title: TypedLiteral,
    /// Provider
    pub provider: Option<Url>,
    /// Consumer
    pub consumer: Option<Url>,
    /// Start of validity
    pub start: Option<DateTime<Utc>>,
    /// End of validity
    pub end: Option<DateTime<Utc>>,
    /// Rules, attached as-is
    pub rules: Vec<Node<ProtocolRule>>,
}

/// Published rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolRule {
    /// Self-link
    pub id: SelfLink,
    /// Title
    pub title: TypedLiteral,
    /// Serialized policy
    pub value: String,
}

macro_rules! impl_linked {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Linked for $ty {
                fn self_link(&self) -> &SelfLink {
                    &self.id
                }
            }
        )*
    };
}

impl_linked!(
    ProtocolCatalog,
    ProtocolResource,
    ProtocolRepresentation,
    ProtocolArtifact,
    ProtocolApp,
    ProtocolEndpoint,
    ProtocolContract,
    ProtocolRule,
);
