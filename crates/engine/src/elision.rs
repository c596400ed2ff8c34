//! Elision diagnostics
//!
//! Pruning is silent in the document itself. To answer "why is this
//! resource missing from the catalog", every elision is recorded here with
//! the child kinds that had no survivors, and logged under
//! `dataspace::builder`.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use dataspace_core::{EntityKind, EntityRef};

/// One pruned subtree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Elision {
    /// Root of the pruned subtree
    pub entity: EntityRef,
    /// Required child kinds with no surviving children
    pub missing: Vec<EntityKind>,
}

impl fmt::Display for Elision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} elided: no surviving", self.entity)?;
        for (i, kind) in self.missing.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, kind)?;
        }
        Ok(())
    }
}

/// Elisions recorded during one build, in the order they happened
///
/// Children are built before their parents, so a cascade appears
/// bottom-up: an App, then the Representation it emptied, then the
/// Resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElisionLog {
    entries: Vec<Elision>,
}

impl ElisionLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `entity` was pruned for lack of `missing` children
    pub fn record(&mut self, entity: EntityRef, missing: Vec<EntityKind>) {
        let elision = Elision { entity, missing };
        debug!(target: "dataspace::builder", %elision, "Elided node");
        self.entries.push(elision);
    }

    /// All recorded elisions
    pub fn entries(&self) -> &[Elision] {
        &self.entries
    }

    /// The elision of `entity`, if it was pruned
    pub fn find(&self, entity: &EntityRef) -> Option<&Elision> {
        self.entries.iter().find(|e| e.entity == *entity)
    }

    /// True if `entity` was pruned
    pub fn contains(&self, entity: &EntityRef) -> bool {
        self.find(entity).is_some()
    }

    /// Number of elisions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was pruned
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
