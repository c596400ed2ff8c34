//! Document Builder Tests
//!
//! End-to-end tests over a real entity store:
//! - Scenarios: pruning cascades through catalog, resource, representation, app
//! - Pruning: per-kind validity rules and their properties
//! - Depth: stubs, depth bound, idempotence
//! - Resolver: external ids, NotFound vs InvalidResource, self-link round trip
//! - Lifecycle: soft delete and updates between builds
//! - Config: endpoint selection, fallbacks, config files

#[path = "../common/mod.rs"]
mod common;

mod config;
mod depth;
mod lifecycle;
mod pruning;
mod scenarios;
