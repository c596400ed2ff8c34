//! Reference scenarios for pruning and root elision

use crate::common::*;

// ============================================================================
// Scenario A: one representation loses its only app
// ============================================================================

#[test]
fn scenario_a_invalid_representation_is_dropped() {
    let g = Graph::new();
    let catalog = g.catalog("main");
    let rep1 = g.valid_representation();
    let rep2 = g.representation_with(1, &[0]);
    let resource = g.resource_with("weather", &[rep1.clone(), rep2.clone()], 1);
    g.link(catalog.as_ref(), resource.as_ref());

    let doc = g.catalog_document(&catalog);
    assert_eq!(doc.offered_resources.len(), 1);

    let resource_doc = doc.offered_resources[0].full().expect("within depth budget");
    assert_eq!(resource_doc.id, g.self_link(resource.as_ref()));
    assert_eq!(resource_doc.representations.len(), 1);
    assert_eq!(
        resource_doc.representations[0].self_link(),
        &g.self_link(rep1.as_ref())
    );
}

// ============================================================================
// Scenario B: valid representations, no contract
// ============================================================================

#[test]
fn scenario_b_resource_without_contract_is_omitted() {
    let g = Graph::new();
    let catalog = g.catalog("main");
    let reps = [g.valid_representation(), g.valid_representation()];
    let resource = g.resource_with("uncontracted", &reps, 0);
    let kept = g.valid_resource("kept");
    g.link(catalog.as_ref(), resource.as_ref());
    g.link(catalog.as_ref(), kept.as_ref());

    let doc = g.catalog_document(&catalog);
    assert_eq!(resource_titles(&doc), vec!["kept".to_string()]);
    assert!(doc
        .offered_resources
        .iter()
        .all(|node| node.self_link() != &g.self_link(resource.as_ref())));
}

// ============================================================================
// Scenario C: direct lookup of the Scenario B resource
// ============================================================================

#[test]
fn scenario_c_direct_lookup_is_invalid_resource() {
    let g = Graph::new();
    let reps = [g.valid_representation(), g.valid_representation()];
    let resource = g.resource_with("uncontracted", &reps, 0);

    let err = g.document(resource.as_ref()).unwrap_err();
    assert!(err.is_invalid_resource());
    let elision = err.elision().unwrap();
    assert_eq!(elision.entity, resource.reference());
    assert_eq!(elision.missing, vec![EntityKind::Contract]);
    assert!(!err.is_not_found());
}

// ============================================================================
// Scenario D: app with two valid endpoints
// ============================================================================

#[test]
fn scenario_d_app_publishes_all_endpoints_by_default() {
    let g = Graph::new();
    let app = g.app(2);

    let doc = g.document(app.as_ref()).unwrap();
    let app_doc = doc.as_app().and_then(Node::full).expect("full app");
    assert_eq!(app_doc.endpoints.len(), 2);

    let mut published: Vec<_> = app_doc
        .endpoints
        .iter()
        .map(|e| e.self_link().clone())
        .collect();
    let stored = g.store.get::<App>(&app.meta.id).unwrap();
    let mut expected: Vec<_> = stored
        .endpoints
        .iter()
        .map(|id| g.resolver.links().link(&dataspace::EntityRef::endpoint(*id)))
        .collect();
    published.sort();
    expected.sort();
    assert_eq!(published, expected);
}

#[test]
fn scenario_d_first_selection_publishes_one_endpoint() {
    let config = PublishConfig {
        endpoint_selection: EndpointSelection::First,
        ..PublishConfig::default()
    };
    let g = Graph::with_config(&config);
    let app = g.app(2);
    let stored = g.store.get::<App>(&app.meta.id).unwrap();

    let doc = g.document(app.as_ref()).unwrap();
    let app_doc = doc.as_app().and_then(Node::full).expect("full app");
    assert_eq!(app_doc.endpoints.len(), 1);
    assert_eq!(
        app_doc.endpoints[0].self_link(),
        &g.resolver
            .links()
            .link(&dataspace::EntityRef::endpoint(stored.endpoints[0]))
    );
}

// ============================================================================
// Cascade
// ============================================================================

#[test]
fn empty_app_cascades_to_catalog() {
    let g = Graph::new();
    let catalog = g.catalog("main");
    let rep = g.representation_with(2, &[0, 0]);
    let resource = g.resource_with("doomed", &[rep.clone()], 1);
    g.link(catalog.as_ref(), resource.as_ref());

    let report = g
        .resolver
        .document_with_report(g.self_link(catalog.as_ref()).as_str())
        .unwrap();

    let doc = report.document.as_catalog().and_then(Node::full).unwrap();
    assert!(doc.offered_resources.is_empty());

    // Children are recorded before their parents
    let kinds: Vec<EntityKind> = report
        .elisions
        .entries()
        .iter()
        .map(|e| e.entity.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::App,
            EntityKind::App,
            EntityKind::Representation,
            EntityKind::Resource
        ]
    );
    assert_eq!(
        report.elisions.find(&rep.reference()).unwrap().missing,
        vec![EntityKind::App]
    );
    assert_eq!(
        report.elisions.find(&resource.reference()).unwrap().missing,
        vec![EntityKind::Representation]
    );
}
