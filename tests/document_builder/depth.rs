//! Depth budget, stubs, and idempotence

use crate::common::*;

fn populated_catalog(g: &Graph, resources: usize) -> std::sync::Arc<Catalog> {
    let catalog = g.catalog("main");
    for i in 0..resources {
        let resource = g.valid_resource(&format!("r{}", i));
        g.link(catalog.as_ref(), resource.as_ref());
    }
    catalog
}

/// Deepest level of materialized nodes below a catalog document.
fn catalog_depth(doc: &ProtocolCatalog) -> usize {
    let mut deepest = 1;
    for resource in doc.offered_resources.iter().filter_map(Node::full) {
        deepest = deepest.max(2);
        for contract in resource.contract_offers.iter().filter_map(Node::full) {
            deepest = deepest.max(3);
            if contract.rules.iter().any(|r| !r.is_stub()) {
                deepest = deepest.max(4);
            }
        }
        for rep in resource.representations.iter().filter_map(Node::full) {
            deepest = deepest.max(3);
            if rep.instances.iter().any(|a| !a.is_stub()) {
                deepest = deepest.max(4);
            }
            for app in rep.apps.iter().filter_map(Node::full) {
                deepest = deepest.max(4);
                if app.endpoints.iter().any(|e| !e.is_stub()) {
                    deepest = deepest.max(5);
                }
            }
        }
    }
    deepest
}

#[test]
fn depth_zero_catalog_is_a_stub() {
    let config = PublishConfig {
        max_depth: 0,
        ..PublishConfig::default()
    };
    let g = Graph::with_config(&config);
    for size in [0, 1, 25] {
        let catalog = populated_catalog(&g, size);
        let doc = g.document(catalog.as_ref()).unwrap();
        assert!(doc.is_stub());
        assert_eq!(doc.self_link(), &g.self_link(catalog.as_ref()));
    }
}

#[test]
fn depth_zero_never_elides_an_invalid_root() {
    let g = Graph::new();
    let app = g.app(0);
    let link = g.self_link(app.as_ref());

    let doc = g.resolver.document_at_depth(link.as_str(), 0).unwrap();
    assert!(doc.is_stub());
    assert!(g.resolver.document_at_depth(link.as_str(), 1).is_err());
}

#[test]
fn depth_one_lists_resource_stubs() {
    let g = Graph::new();
    let catalog = populated_catalog(&g, 3);
    let link = g.self_link(catalog.as_ref());

    let doc = g.resolver.document_at_depth(link.as_str(), 1).unwrap();
    let catalog_doc = doc.as_catalog().and_then(Node::full).unwrap();
    assert_eq!(catalog_doc.offered_resources.len(), 3);
    assert!(catalog_doc.offered_resources.iter().all(Node::is_stub));
}

#[test]
fn stubs_count_as_survivors() {
    // The resource's representations are invalid, but only one level below
    // the budget, so they appear as stubs and the resource survives.
    let g = Graph::new();
    let rep = g.representation_with(0, &[]);
    let resource = g.resource_with("r", &[rep], 1);
    let link = g.self_link(resource.as_ref());

    let doc = g.resolver.document_at_depth(link.as_str(), 1).unwrap();
    let resource_doc = doc.as_resource().and_then(Node::full).unwrap();
    assert!(resource_doc.representations[0].is_stub());

    assert!(g
        .resolver
        .document_at_depth(link.as_str(), 2)
        .unwrap_err()
        .is_invalid_resource());
}

#[test]
fn materialized_depth_never_exceeds_budget() {
    let g = Graph::new();
    let catalog = populated_catalog(&g, 2);
    let link = g.self_link(catalog.as_ref());

    for budget in 1..=6u32 {
        let doc = g.resolver.document_at_depth(link.as_str(), budget).unwrap();
        let catalog_doc = doc.as_catalog().and_then(Node::full).unwrap();
        let depth = catalog_depth(catalog_doc);
        assert!(
            depth <= budget as usize,
            "budget {} produced depth {}",
            budget,
            depth
        );
        assert_eq!(depth, (budget as usize).min(5));
    }
}

#[test]
fn builds_from_unchanged_state_are_equal() {
    let g = Graph::new();
    let catalog = populated_catalog(&g, 4);

    let first = g.document(catalog.as_ref()).unwrap();
    let second = g.document(catalog.as_ref()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn self_links_do_not_depend_on_path() {
    // One representation reachable through two resources is published with
    // the same id under both.
    let g = Graph::new();
    let catalog = g.catalog("main");
    let shared = g.valid_representation();
    let a = g.resource_with("a", &[shared.clone()], 1);
    let b = g.resource_with("b", &[shared.clone()], 1);
    g.link(catalog.as_ref(), a.as_ref());
    g.link(catalog.as_ref(), b.as_ref());

    let doc = g.catalog_document(&catalog);
    let expected = g.self_link(shared.as_ref());
    for resource in doc.offered_resources.iter().filter_map(Node::full) {
        assert_eq!(resource.representations[0].self_link(), &expected);
    }
    assert_eq!(doc.offered_resources.len(), 2);
}
