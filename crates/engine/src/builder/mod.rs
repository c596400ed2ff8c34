//! Entity → protocol document builders
//!
//! One [`Builder`] per entity kind. Builders only walk owner → owned:
//!
//! ```text
//! Catalog → Resource → Representation → Artifact
//!                    │                 → App → Endpoint
//!                    → Contract → Rule
//! ```
//!
//! The builder graph is a DAG by construction, so the depth budget alone
//! bounds the walk. Back-references stored on entities are never read here.
//!
//! ## Contract
//!
//! `build(entity, remaining)`:
//! - `remaining == 0`: a [`Node::Stub`] with the self-link, never elided
//! - otherwise children are built with `remaining - 1`, the kind's validity
//!   rule is applied to the surviving children, and the result is either a
//!   [`Node::Full`] or `None` (elided, recorded in the [`ElisionLog`])

mod app;
mod artifact;
mod catalog;
mod contract;
mod endpoint;
mod representation;
mod resource;
mod rule;

use url::Url;

use dataspace_core::{
    Entity, EntityId, EntityKind, EntityLookup, EntityRef, Language, Linked, Node, ProtocolNode,
    Record, SelfLink, TypedLiteral,
};

use crate::config::{EndpointSelection, PublishConfig};
use crate::elision::ElisionLog;
use crate::error::ConfigError;
use crate::links::SelfLinkService;
use crate::mapping;

// =============================================================================
// Settings
// =============================================================================

/// Validated, parsed publishing settings used while building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Language for unknown or missing language tags
    pub default_language: Language,
    /// Endpoint cardinality of published apps
    pub endpoint_selection: EndpointSelection,
    /// Access URL for endpoints whose location does not parse
    pub fallback_access_url: Url,
}

impl BuildSettings {
    /// Parse the relevant fields of `config`
    pub fn from_config(config: &PublishConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            default_language: config.default_language()?,
            endpoint_selection: config.endpoint_selection,
            fallback_access_url: config.fallback_access_url()?,
        })
    }
}

// =============================================================================
// Context
// =============================================================================

/// Everything a builder reads, plus the elision log it writes
///
/// One context per document request. Holds no lock: `lookup` is expected to
/// be a snapshot.
pub struct BuildContext<'a> {
    lookup: &'a dyn EntityLookup,
    links: &'a SelfLinkService,
    settings: &'a BuildSettings,
    log: ElisionLog,
    resolve_samples: bool,
}

impl<'a> BuildContext<'a> {
    /// Context over `lookup` with an empty elision log
    pub fn new(
        lookup: &'a dyn EntityLookup,
        links: &'a SelfLinkService,
        settings: &'a BuildSettings,
    ) -> Self {
        Self {
            lookup,
            links,
            settings,
            log: ElisionLog::new(),
            resolve_samples: true,
        }
    }

    /// Scratch context over the same state that leaves samples unresolved
    ///
    /// Used to check a sample resource without following its own samples.
    pub(crate) fn without_samples(&self) -> BuildContext<'a> {
        BuildContext {
            resolve_samples: false,
            ..BuildContext::new(self.lookup, self.links, self.settings)
        }
    }

    /// Whether resources resolve their sample references
    pub(crate) fn resolves_samples(&self) -> bool {
        self.resolve_samples
    }

    /// Entity lookup
    pub fn lookup(&self) -> &'a dyn EntityLookup {
        self.lookup
    }

    /// Self-link service
    pub fn links(&self) -> &'a SelfLinkService {
        self.links
    }

    /// Publishing settings
    pub fn settings(&self) -> &'a BuildSettings {
        self.settings
    }

    /// Elisions recorded so far
    pub fn log(&self) -> &ElisionLog {
        &self.log
    }

    /// Finish and hand out the elision log
    pub fn into_log(self) -> ElisionLog {
        self.log
    }

    /// Self-link of any entity
    pub fn self_link(&self, reference: &EntityRef) -> SelfLink {
        self.links.link(reference)
    }

    /// Language of a user-entered tag, falling back to the default
    pub fn language(&self, raw: &str) -> Language {
        mapping::language(raw, self.settings.default_language)
    }

    /// Text in the default language
    pub fn literal(&self, value: &str) -> TypedLiteral {
        TypedLiteral::new(value, self.settings.default_language)
    }

    /// Build the live children among `ids` one level below `parent_remaining`
    ///
    /// Missing or deleted ids are skipped. Elided children are dropped.
    pub fn children<T: Builder>(
        &mut self,
        ids: &[EntityId],
        parent_remaining: u32,
    ) -> Vec<Node<T::Output>> {
        let remaining = parent_remaining.saturating_sub(1);
        let mut built = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(child) = T::lookup(self.lookup, id) else {
                continue;
            };
            if let Some(node) = build(child.as_ref(), remaining, self) {
                built.push(node);
            }
        }
        built
    }

    /// Apply a validity rule
    ///
    /// `required` pairs each required child kind with its surviving count.
    /// Returns false, and records the elision, if any count is zero.
    pub fn require(&mut self, entity: EntityRef, required: &[(EntityKind, usize)]) -> bool {
        let missing: Vec<EntityKind> = required
            .iter()
            .filter(|(_, survivors)| *survivors == 0)
            .map(|(kind, _)| *kind)
            .collect();
        if missing.is_empty() {
            true
        } else {
            self.log.record(entity, missing);
            false
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Per-kind document builder
pub trait Builder: Record {
    /// Full protocol node produced for this kind
    type Output: Linked;

    /// Build the full node with `remaining >= 1`, or `None` to elide
    fn build_full(&self, remaining: u32, cx: &mut BuildContext<'_>) -> Option<Self::Output>;
}

/// Build `entity` with a depth budget
///
/// At depth 0 the result is a stub and always present.
pub fn build<T: Builder>(
    entity: &T,
    remaining: u32,
    cx: &mut BuildContext<'_>,
) -> Option<Node<T::Output>> {
    if remaining == 0 {
        return Some(Node::Stub(cx.self_link(&entity.reference())));
    }
    entity.build_full(remaining, cx).map(Node::Full)
}

/// Build any loaded entity, dispatching on its kind
pub fn build_entity(
    entity: &Entity,
    remaining: u32,
    cx: &mut BuildContext<'_>,
) -> Option<ProtocolNode> {
    match entity {
        Entity::Catalog(e) => build(e.as_ref(), remaining, cx).map(ProtocolNode::Catalog),
        Entity::Resource(e) => build(e.as_ref(), remaining, cx).map(ProtocolNode::Resource),
        Entity::Representation(e) => {
            build(e.as_ref(), remaining, cx).map(ProtocolNode::Representation)
        }
        Entity::Artifact(e) => build(e.as_ref(), remaining, cx).map(ProtocolNode::Artifact),
        Entity::App(e) => build(e.as_ref(), remaining, cx).map(ProtocolNode::App),
        Entity::Endpoint(e) => build(e.as_ref(), remaining, cx).map(ProtocolNode::Endpoint),
        Entity::Contract(e) => build(e.as_ref(), remaining, cx).map(ProtocolNode::Contract),
        Entity::Rule(e) => build(e.as_ref(), remaining, cx).map(ProtocolNode::Rule),
    }
}
