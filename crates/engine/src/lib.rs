//! Document engine for the offering graph
//!
//! This crate turns live entities into protocol documents:
//! - Builder: one builder per entity kind, depth-bounded, with pruning of
//!   subtrees that cannot be published
//! - Elision: the log of pruned subtrees for a single build
//! - Links: self-link generation and parsing under the configured base URL
//! - Mapping: entity attributes onto protocol vocabularies
//! - Resolver: external id → entity → document, the entry point for callers
//! - Config: `dataspace.toml`
//!
//! The engine only reads entities through `dataspace_core::EntityLookup`
//! and never writes them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod config;
pub mod elision;
pub mod error;
pub mod links;
pub mod mapping;
pub mod resolver;

pub use builder::{build, build_entity, BuildContext, BuildSettings, Builder};
pub use config::{EndpointSelection, PublishConfig, CONFIG_FILE_NAME, DEFAULT_MAX_DEPTH};
pub use elision::{Elision, ElisionLog};
pub use error::{ConfigError, DocumentError, NotFound, Result};
pub use links::SelfLinkService;
pub use resolver::{DocumentReport, EntityResolver};
