//! Entity kind enumeration
//!
//! The offering graph has exactly eight entity kinds. The set is closed:
//! every `match` on [`EntityKind`] is exhaustive, so adding a kind is a
//! compile-time change across the resolver, the self-link service and
//! every builder.
//!
//! | Kind | Owns | Segment |
//! |------|------|---------|
//! | Catalog | Resources | `catalogs` |
//! | Resource | Representations, Contracts | `resources` |
//! | Representation | Artifacts, Apps | `representations` |
//! | Artifact | - | `artifacts` |
//! | App | Endpoints | `apps` |
//! | Endpoint | - | `endpoints` |
//! | Contract | Rules | `contracts` |
//! | Rule | - | `rules` |

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The eight entity kinds of the offering graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Root collection of offered resources
    Catalog,
    /// An offered data or app resource
    Resource,
    /// A concrete representation of a resource
    Representation,
    /// Payload descriptor of a representation
    Artifact,
    /// A deployable data app
    App,
    /// Network access descriptor of an app
    Endpoint,
    /// A contract offer attached to a resource
    Contract,
    /// A policy clause of a contract
    Rule,
}

impl EntityKind {
    /// All entity kinds (for iteration)
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Catalog,
        EntityKind::Resource,
        EntityKind::Representation,
        EntityKind::Artifact,
        EntityKind::App,
        EntityKind::Endpoint,
        EntityKind::Contract,
        EntityKind::Rule,
    ];

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            EntityKind::Catalog => "Catalog",
            EntityKind::Resource => "Resource",
            EntityKind::Representation => "Representation",
            EntityKind::Artifact => "Artifact",
            EntityKind::App => "App",
            EntityKind::Endpoint => "Endpoint",
            EntityKind::Contract => "Contract",
            EntityKind::Rule => "Rule",
        }
    }

    /// Collection path segment used in self-links
    pub const fn segment(&self) -> &'static str {
        match self {
            EntityKind::Catalog => "catalogs",
            EntityKind::Resource => "resources",
            EntityKind::Representation => "representations",
            EntityKind::Artifact => "artifacts",
            EntityKind::App => "apps",
            EntityKind::Endpoint => "endpoints",
            EntityKind::Contract => "contracts",
            EntityKind::Rule => "rules",
        }
    }

    /// Parse from a collection path segment
    pub fn from_segment(segment: &str) -> Result<Self, TypeError> {
        match segment {
            "catalogs" => Ok(EntityKind::Catalog),
            "resources" => Ok(EntityKind::Resource),
            "representations" => Ok(EntityKind::Representation),
            "artifacts" => Ok(EntityKind::Artifact),
            "apps" => Ok(EntityKind::App),
            "endpoints" => Ok(EntityKind::Endpoint),
            "contracts" => Ok(EntityKind::Contract),
            "rules" => Ok(EntityKind::Rule),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }

    /// Kinds this kind owns, in builder order
    ///
    /// Ownership is the only direction the document builder walks.
    pub const fn owned_kinds(&self) -> &'static [EntityKind] {
        match self {
            EntityKind::Catalog => &[EntityKind::Resource],
            EntityKind::Resource => &[EntityKind::Representation, EntityKind::Contract],
            EntityKind::Representation => &[EntityKind::Artifact, EntityKind::App],
            EntityKind::App => &[EntityKind::Endpoint],
            EntityKind::Contract => &[EntityKind::Rule],
            EntityKind::Artifact | EntityKind::Endpoint | EntityKind::Rule => &[],
        }
    }

    /// Check whether `self` may own entities of kind `owned`
    pub fn owns(&self, owned: EntityKind) -> bool {
        self.owned_kinds().contains(&owned)
    }

    /// Check if this kind never owns anything
    pub const fn is_leaf(&self) -> bool {
        self.owned_kinds().is_empty()
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
