//! Self-link service
//!
//! Maps `(kind, id)` to the canonical external URL of an entity and back:
//!
//! ```text
//! <base_url>/api/<segment>/<uuid>
//! ```
//!
//! The mapping is a pure function of kind, id and the configured base, and
//! `resolve(link(r)) == r` for every reference.

use url::Url;

use dataspace_core::{EntityId, EntityKind, EntityRef, SelfLink};

use crate::config::PublishConfig;
use crate::error::{ConfigError, NotFound};

/// Path segment between the base and the kind segment
pub const API_SEGMENT: &str = "api";

/// Builds and parses self-links under one base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfLinkService {
    base: Url,
    /// Base path without trailing slash, followed by `/api`
    prefix: String,
}

impl SelfLinkService {
    /// Service for the validated `base_url` of `config`
    pub fn from_config(config: &PublishConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.base_url()?))
    }

    /// Service for an absolute http(s) base
    ///
    /// Query and fragment of `base` are dropped.
    pub fn new(mut base: Url) -> Self {
        base.set_query(None);
        base.set_fragment(None);
        let prefix = format!("{}/{}", base.path().trim_end_matches('/'), API_SEGMENT);
        Self { base, prefix }
    }

    /// Configured base URL
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Canonical self-link of an entity
    pub fn link(&self, reference: &EntityRef) -> SelfLink {
        let mut url = self.base.clone();
        url.set_path(&format!(
            "{}/{}/{}",
            self.prefix,
            reference.kind.segment(),
            reference.id
        ));
        SelfLink::new(url)
    }

    /// Recover `(kind, id)` from a self-link
    ///
    /// Only links under this service's base resolve. The id must be the
    /// lowercase hyphenated form [`link`](Self::link) writes. A trailing
    /// slash is tolerated; anything else after the id is not.
    pub fn resolve(&self, url: &Url) -> Result<EntityRef, NotFound> {
        let unknown = || NotFound::Link(url.to_string());
        if url.origin() != self.base.origin() || url.query().is_some() {
            return Err(unknown());
        }

        let rest = url
            .path()
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(unknown)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut parts = rest.split('/');
        let (Some(segment), Some(id), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(unknown());
        };
        let kind = EntityKind::from_segment(segment).map_err(|_| unknown())?;
        let parsed: EntityId = id.parse().map_err(|_| unknown())?;
        // Canonical spelling only
        if parsed.to_string() != id {
            return Err(unknown());
        }
        Ok(EntityRef::new(kind, parsed))
    }

    /// Parse then [`resolve`](Self::resolve) an external id
    pub fn resolve_str(&self, external_id: &str) -> Result<EntityRef, NotFound> {
        let url = Url::parse(external_id.trim())
            .map_err(|_| NotFound::Link(external_id.to_string()))?;
        self.resolve(&url)
    }
}
