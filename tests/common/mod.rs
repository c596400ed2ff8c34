//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::{Arc, Once};

pub use dataspace::{
    App, AppDesc, Artifact, ArtifactData, ArtifactDesc, Catalog, CatalogDesc, Contract,
    ContractDesc, DocumentError, Endpoint, EndpointDesc, EndpointSelection, EntityKind,
    EntityResolver, EntityStore, Node, ProtocolCatalog, ProtocolNode, PublishConfig, Record,
    Representation, RepresentationDesc, Resource, ResourceDesc, Rule, RuleDesc, SelfLink,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output to the test harness, once per process.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Graph - entity store plus resolver
// ============================================================================

/// An entity store with a resolver over it.
pub struct Graph {
    pub store: Arc<EntityStore>,
    pub resolver: EntityResolver<EntityStore>,
}

impl Graph {
    /// Empty graph with the default publishing config.
    pub fn new() -> Self {
        Self::with_config(&PublishConfig::default())
    }

    /// Empty graph with a custom publishing config.
    pub fn with_config(config: &PublishConfig) -> Self {
        init_tracing();
        let store = Arc::new(EntityStore::new());
        let resolver =
            EntityResolver::new(Arc::clone(&store), config).expect("test config is valid");
        Graph { store, resolver }
    }

    /// Link `owner` → `owned`.
    pub fn link(&self, owner: &impl Record, owned: &impl Record) {
        self.store
            .link(owner.reference(), owned.reference())
            .expect("link between live entities of compatible kinds");
    }

    /// Self-link of an entity.
    pub fn self_link(&self, entity: &impl Record) -> SelfLink {
        self.resolver.links().link(&entity.reference())
    }

    /// Document for an entity at the configured depth.
    pub fn document(&self, entity: &impl Record) -> Result<ProtocolNode, DocumentError> {
        self.resolver.document_for(self.self_link(entity).as_str())
    }

    /// Full catalog document; panics if the catalog is a stub.
    pub fn catalog_document(&self, catalog: &Catalog) -> ProtocolCatalog {
        match self.document(catalog).expect("catalogs are never elided") {
            ProtocolNode::Catalog(Node::Full(catalog)) => catalog,
            other => panic!("expected a full catalog, got {:?}", other),
        }
    }

    // ------------------------------------------------------------------------
    // Entity builders
    // ------------------------------------------------------------------------

    pub fn catalog(&self, title: &str) -> Arc<Catalog> {
        self.store.create::<Catalog>(CatalogDesc {
            title: title.to_string(),
            description: format!("{} catalog", title),
        })
    }

    pub fn resource(&self, title: &str) -> Arc<Resource> {
        self.store.create::<Resource>(ResourceDesc {
            title: title.to_string(),
            language: "EN".to_string(),
            ..ResourceDesc::default()
        })
    }

    pub fn representation(&self) -> Arc<Representation> {
        self.store.create::<Representation>(RepresentationDesc {
            title: "csv".to_string(),
            media_type: "text/csv".to_string(),
            ..RepresentationDesc::default()
        })
    }

    pub fn artifact(&self, payload: &[u8]) -> Arc<Artifact> {
        self.store.create::<Artifact>(ArtifactDesc {
            title: "data.csv".to_string(),
            data: ArtifactData::Local(payload.to_vec()),
            automated_download: false,
        })
    }

    pub fn endpoint(&self, location: &str) -> Arc<Endpoint> {
        self.store.create::<Endpoint>(EndpointDesc {
            location: location.to_string(),
            port: 8080,
            protocol: "HTTP/1.1".to_string(),
            ..EndpointDesc::default()
        })
    }

    pub fn contract(&self) -> Arc<Contract> {
        self.store.create::<Contract>(ContractDesc {
            title: "default".to_string(),
            ..ContractDesc::default()
        })
    }

    pub fn rule(&self) -> Arc<Rule> {
        self.store.create::<Rule>(RuleDesc {
            title: "allow".to_string(),
            value: "{}".to_string(),
        })
    }

    /// App linked to `endpoints` fresh endpoints.
    pub fn app(&self, endpoints: usize) -> Arc<App> {
        let app = self.store.create::<App>(AppDesc {
            title: "app".to_string(),
            ..AppDesc::default()
        });
        for i in 0..endpoints {
            let endpoint = self.endpoint(&format!("http://app.local:8080/e{}", i));
            self.link(app.as_ref(), endpoint.as_ref());
        }
        app
    }

    /// Representation with `artifacts` artifacts and one app per entry of
    /// `app_endpoints`, each with that many endpoints.
    pub fn representation_with(
        &self,
        artifacts: usize,
        app_endpoints: &[usize],
    ) -> Arc<Representation> {
        let rep = self.representation();
        for i in 0..artifacts {
            let artifact = self.artifact(format!("payload {}", i).as_bytes());
            self.link(rep.as_ref(), artifact.as_ref());
        }
        for &endpoints in app_endpoints {
            let app = self.app(endpoints);
            self.link(rep.as_ref(), app.as_ref());
        }
        rep
    }

    /// Representation that passes its validity rule at any depth.
    pub fn valid_representation(&self) -> Arc<Representation> {
        self.representation_with(1, &[1])
    }

    /// Resource with the given representations and `contracts` contracts.
    pub fn resource_with(
        &self,
        title: &str,
        representations: &[Arc<Representation>],
        contracts: usize,
    ) -> Arc<Resource> {
        let resource = self.resource(title);
        for rep in representations {
            self.link(resource.as_ref(), rep.as_ref());
        }
        for _ in 0..contracts {
            let contract = self.contract();
            let rule = self.rule();
            self.link(contract.as_ref(), rule.as_ref());
            self.link(resource.as_ref(), contract.as_ref());
        }
        resource
    }

    /// Resource that passes its validity rule at any depth.
    pub fn valid_resource(&self, title: &str) -> Arc<Resource> {
        let rep = self.valid_representation();
        self.resource_with(title, &[rep], 1)
    }
}

/// Titles of the full resources in a catalog document.
pub fn resource_titles(catalog: &ProtocolCatalog) -> Vec<String> {
    catalog
        .offered_resources
        .iter()
        .filter_map(|node| node.full())
        .map(|resource| resource.title.value.clone())
        .collect()
}
