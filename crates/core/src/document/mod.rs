//! Protocol document tree
//!
//! The in-memory tree produced for one root entity, prior to any wire
//! encoding. Values here never alias persisted entities: every field is
//! an owned copy, so two builds from the same state compare equal.
//!
//! ## Shape
//!
//! - [`Node<T>`]: either a [`Node::Stub`] (self-link only, produced when the
//!   depth budget is exhausted) or a [`Node::Full`] protocol node
//! - [`ProtocolNode`]: closed union over the eight kinds, returned at the root
//! - [`SelfLink`]: canonical external identifier of an entity

mod nodes;
mod vocabulary;

pub use nodes::{
    ConnectorEndpoint, ProtocolApp, ProtocolArtifact, ProtocolCatalog, ProtocolContract,
    ProtocolEndpoint, ProtocolRepresentation, ProtocolResource, ProtocolRule,
};
pub use vocabulary::{AppEndpointType, Language, PaymentModality, UsagePolicyClass};

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::contract::EntityKind;

// =============================================================================
// SelfLink
// =============================================================================

/// Canonical, externally addressable identifier of an entity
///
/// A pure function of (kind, id) and the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelfLink(Url);

impl SelfLink {
    /// Wrap an absolute URL
    pub fn new(url: Url) -> Self {
        SelfLink(url)
    }

    /// Borrow the URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// URL as a string slice
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Unwrap into the URL
    pub fn into_url(self) -> Url {
        self.0
    }
}

impl fmt::Display for SelfLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<SelfLink> for Url {
    fn from(link: SelfLink) -> Url {
        link.0
    }
}

// =============================================================================
// Node
// =============================================================================

/// Anything that carries its own self-link
pub trait Linked {
    /// Self-link of this node
    fn self_link(&self) -> &SelfLink;
}

/// A child slot in the document tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node<T> {
    /// Depth budget exhausted; only the self-link is known
    Stub(SelfLink),
    /// Fully materialized node
    Full(T),
}

impl<T: Linked> Node<T> {
    /// Self-link of the node, stub or full
    pub fn self_link(&self) -> &SelfLink {
        match self {
            Node::Stub(link) => link,
            Node::Full(node) => node.self_link(),
        }
    }
}

impl<T> Node<T> {
    /// True for depth-exhausted stubs
    pub fn is_stub(&self) -> bool {
        matches!(self, Node::Stub(_))
    }

    /// The full node, if materialized
    pub fn full(&self) -> Option<&T> {
        match self {
            Node::Stub(_) => None,
            Node::Full(node) => Some(node),
        }
    }
}

// =============================================================================
// TypedLiteral
// =============================================================================

/// A string tagged with its language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypedLiteral {
    /// Text
    pub value: String,
    /// Language of the text
    pub language: Language,
}

impl TypedLiteral {
    /// Tag `value` with `language`
    pub fn new(value: impl Into<String>, language: Language) -> Self {
        TypedLiteral {
            value: value.into(),
            language,
        }
    }
}

// =============================================================================
// ProtocolNode
// =============================================================================

/// Root of a built document, one variant per entity kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "node", rename_all = "lowercase")]
pub enum ProtocolNode {
    /// Catalog document
    Catalog(Node<ProtocolCatalog>),
    /// Resource document
    Resource(Node<ProtocolResource>),
    /// Representation document
    Representation(Node<ProtocolRepresentation>),
    /// Artifact document
    Artifact(Node<ProtocolArtifact>),
    /// App document
    App(Node<ProtocolApp>),
    /// Endpoint document
    Endpoint(Node<ProtocolEndpoint>),
    /// Contract document
    Contract(Node<ProtocolContract>),
    /// Rule document
    Rule(Node<ProtocolRule>),
}

impl ProtocolNode {
    /// Kind of the root entity
    pub fn kind(&self) -> EntityKind {
        match self {
            ProtocolNode::Catalog(_) => EntityKind::Catalog,
            ProtocolNode::Resource(_) => EntityKind::Resource,
            ProtocolNode::Representation(_) => EntityKind::Representation,
            ProtocolNode::Artifact(_) => EntityKind::Artifact,
            ProtocolNode::App(_) => EntityKind::App,
            ProtocolNode::Endpoint(_) => EntityKind::Endpoint,
            ProtocolNode::Contract(_) => EntityKind::Contract,
            ProtocolNode::Rule(_) => EntityKind::Rule,
        }
    }

    /// Self-link of the root
    pub fn self_link(&self) -> &SelfLink {
        match self {
            ProtocolNode::Catalog(n) => n.self_link(),
            ProtocolNode::Resource(n) => n.self_link(),
            ProtocolNode::Representation(n) => n.self_link(),
            ProtocolNode::Artifact(n) => n.self_link(),
            ProtocolNode::App(n) => n.self_link(),
            ProtocolNode::Endpoint(n) => n.self_link(),
            ProtocolNode::Contract(n) => n.self_link(),
            ProtocolNode::Rule(n) => n.self_link(),
        }
    }

    /// True if the root itself is a stub
    pub fn is_stub(&self) -> bool {
        match self {
            ProtocolNode::Catalog(n) => n.is_stub(),
            ProtocolNode::Resource(n) => n.is_stub(),
            ProtocolNode::Representation(n) => n.is_stub(),
            ProtocolNode::Artifact(n) => n.is_stub(),
            ProtocolNode::App(n) => n.is_stub(),
            ProtocolNode::Endpoint(n) => n.is_stub(),
            ProtocolNode::Contract(n) => n.is_stub(),
            ProtocolNode::Rule(n) => n.is_stub(),
        }
    }

    /// The catalog, if this is a catalog document
    pub fn as_catalog(&self) -> Option<&Node<ProtocolCatalog>> {
        match self {
            ProtocolNode::Catalog(n) => Some(n),
            _ => None,
        }
    }

    /// The resource, if this is a resource document
    pub fn as_resource(&self) -> Option<&Node<ProtocolResource>> {
        match self {
            ProtocolNode::Resource(n) => Some(n),
            _ => None,
        }
    }

    /// The app, if this is an app document
    pub fn as_app(&self) -> Option<&Node<ProtocolApp>> {
        match self {
            ProtocolNode::App(n) => Some(n),
            _ => None,
        }
    }
}
