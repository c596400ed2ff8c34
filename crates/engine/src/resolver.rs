//! External id → entity → document
//!
//! The resolver is the entry point of the engine:
//!
//! 1. `resolve`: parse the external id (a self-link) into `(kind, id)`
//! 2. `load`: fetch the live entity from a snapshot
//! 3. dispatch to the kind's builder with the configured depth budget
//!
//! Each request builds over its own snapshot, so no lock is held while
//! building and concurrent requests never observe each other.

use std::sync::Arc;

use tracing::{debug, warn};

use dataspace_core::{
    Entity, EntityLookup, EntityRef, ProtocolNode, SelfLink, SnapshotSource, SnapshotView,
};

use crate::builder::{build_entity, BuildContext, BuildSettings};
use crate::config::PublishConfig;
use crate::elision::{Elision, ElisionLog};
use crate::error::{ConfigError, DocumentError, NotFound, Result};
use crate::links::SelfLinkService;

/// A built document plus what was pruned while building it
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    /// Root node
    pub document: ProtocolNode,
    /// Subtrees elided below the root
    pub elisions: ElisionLog,
    /// Store version the document was built from
    pub version: u64,
}

/// Resolves external ids and builds documents over a [`SnapshotSource`]
pub struct EntityResolver<S> {
    source: Arc<S>,
    links: SelfLinkService,
    settings: BuildSettings,
    max_depth: u32,
}

impl<S: SnapshotSource> EntityResolver<S> {
    /// Resolver over `source` with a validated `config`
    pub fn new(source: Arc<S>, config: &PublishConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source,
            links: SelfLinkService::from_config(config)?,
            settings: BuildSettings::from_config(config)?,
            max_depth: config.max_depth,
        })
    }

    /// Underlying entity source
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Self-link service in use
    pub fn links(&self) -> &SelfLinkService {
        &self.links
    }

    /// Default depth budget of [`document_for`](Self::document_for)
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Parse an external id into `(kind, id)`
    pub fn resolve(&self, external_id: &str) -> std::result::Result<EntityRef, NotFound> {
        self.links.resolve_str(external_id)
    }

    /// Load the live entity behind a reference
    pub fn load(&self, reference: EntityRef) -> std::result::Result<Entity, NotFound> {
        load_from(self.source.as_ref(), reference)
    }

    /// Canonical self-link of a loaded entity
    pub fn self_link(&self, entity: &Entity) -> SelfLink {
        self.links.link(&entity.reference())
    }

    /// Build `entity` with an explicit depth budget against the current state
    ///
    /// `None` means the entity is elided at this depth.
    pub fn build(&self, entity: &Entity, depth: u32) -> Option<ProtocolNode> {
        let snapshot = self.source.snapshot();
        let mut cx = BuildContext::new(&snapshot, &self.links, &self.settings);
        build_entity(entity, depth, &mut cx)
    }

    /// Document for an external id at the configured depth
    ///
    /// # Errors
    ///
    /// - [`DocumentError::NotFound`] if the id does not resolve to a live entity
    /// - [`DocumentError::InvalidResource`] if the root itself is elided
    pub fn document_for(&self, external_id: &str) -> Result<ProtocolNode> {
        self.document_with_report(external_id)
            .map(|report| report.document)
    }

    /// Like [`document_for`](Self::document_for), with a given depth budget
    pub fn document_at_depth(&self, external_id: &str, depth: u32) -> Result<ProtocolNode> {
        self.report(external_id, depth).map(|report| report.document)
    }

    /// Document plus the elision log and the store version it was built from
    pub fn document_with_report(&self, external_id: &str) -> Result<DocumentReport> {
        self.report(external_id, self.max_depth)
    }

    fn report(&self, external_id: &str, depth: u32) -> Result<DocumentReport> {
        let reference = self.resolve(external_id).map_err(|e| {
            debug!(target: "dataspace::resolver", external_id, error = %e, "Unresolvable id");
            e
        })?;

        let snapshot = self.source.snapshot();
        let version = snapshot.version();
        let entity = load_from(&snapshot, reference).map_err(|e| {
            debug!(target: "dataspace::resolver", %reference, error = %e, "No live entity");
            e
        })?;

        let mut cx = BuildContext::new(&snapshot, &self.links, &self.settings);
        let Some(document) = build_entity(&entity, depth, &mut cx) else {
            let elision = cx
                .into_log()
                .find(&reference)
                .cloned()
                .unwrap_or_else(|| Elision {
                    entity: reference,
                    missing: Vec::new(),
                });
            warn!(
                target: "dataspace::resolver",
                %elision,
                "Requested root cannot be represented"
            );
            return Err(DocumentError::InvalidResource(elision));
        };
        let elisions = cx.into_log();

        debug!(
            target: "dataspace::resolver",
            %reference,
            depth,
            version,
            elided = elisions.len(),
            "Built document"
        );
        Ok(DocumentReport {
            document,
            elisions,
            version,
        })
    }
}

fn load_from(
    lookup: &dyn EntityLookup,
    reference: EntityRef,
) -> std::result::Result<Entity, NotFound> {
    lookup
        .entity(&reference)
        .ok_or(NotFound::Entity(reference))
}
