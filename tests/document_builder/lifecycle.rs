//! Soft delete, updates, and unlinking between builds

use crate::common::*;

#[test]
fn deleting_the_last_endpoint_prunes_up_to_the_catalog() {
    let g = Graph::new();
    let catalog = g.catalog("main");
    let resource = g.valid_resource("r");
    g.link(catalog.as_ref(), resource.as_ref());
    assert_eq!(g.catalog_document(&catalog).offered_resources.len(), 1);

    let endpoints: Vec<_> = g.store.list::<Endpoint>();
    assert_eq!(endpoints.len(), 1);
    g.store.delete::<Endpoint>(&endpoints[0].meta.id).unwrap();

    assert!(g.catalog_document(&catalog).offered_resources.is_empty());
    assert!(g.document(resource.as_ref()).unwrap_err().is_invalid_resource());
}

#[test]
fn deleted_root_is_not_found() {
    let g = Graph::new();
    let resource = g.valid_resource("r");
    assert!(g.document(resource.as_ref()).is_ok());

    g.store.delete::<Resource>(&resource.meta.id).unwrap();
    let err = g.document(resource.as_ref()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn deleted_child_disappears_from_parent() {
    let g = Graph::new();
    let contract = g.contract();
    let kept = g.rule();
    let dropped = g.rule();
    g.link(contract.as_ref(), kept.as_ref());
    g.link(contract.as_ref(), dropped.as_ref());
    g.store.delete::<Rule>(&dropped.meta.id).unwrap();

    let doc = g.document(contract.as_ref()).unwrap();
    let ProtocolNode::Contract(Node::Full(contract_doc)) = doc else {
        panic!("expected a full contract");
    };
    assert_eq!(contract_doc.rules.len(), 1);
    assert_eq!(contract_doc.rules[0].self_link(), &g.self_link(kept.as_ref()));
}

#[test]
fn unlinking_the_only_contract_elides_the_resource() {
    let g = Graph::new();
    let resource = g.valid_resource("r");
    let contract = g.store.list::<Contract>().remove(0);

    g.store
        .unlink(resource.reference(), contract.reference())
        .unwrap();
    assert!(g.document(resource.as_ref()).unwrap_err().is_invalid_resource());

    g.store
        .link(resource.reference(), contract.reference())
        .unwrap();
    assert!(g.document(resource.as_ref()).is_ok());
}

#[test]
fn updates_show_up_in_the_next_build() {
    let g = Graph::new();
    let resource = g.valid_resource("before");
    let before = g.document(resource.as_ref()).unwrap();

    g.store
        .update::<Resource>(&resource.meta.id, |desc| desc.title = "after".into())
        .unwrap();
    let after = g.document(resource.as_ref()).unwrap();

    let title = |doc: &ProtocolNode| {
        doc.as_resource()
            .and_then(Node::full)
            .map(|r| r.title.value.clone())
    };
    assert_eq!(title(&before).as_deref(), Some("before"));
    assert_eq!(title(&after).as_deref(), Some("after"));

    let version = |doc: &ProtocolNode| {
        doc.as_resource()
            .and_then(Node::full)
            .map(|r| r.version.clone())
    };
    assert_ne!(version(&before), version(&after));
}

#[test]
fn report_version_tracks_store_writes() {
    let g = Graph::new();
    let catalog = g.catalog("main");
    let link = g.self_link(catalog.as_ref());

    let first = g.resolver.document_with_report(link.as_str()).unwrap();
    g.rule();
    let second = g.resolver.document_with_report(link.as_str()).unwrap();

    assert!(second.version > first.version);
    assert_eq!(first.document, second.document);
}

#[test]
fn back_references_are_not_followed() {
    // Building an endpoint never walks back up to its app.
    let g = Graph::new();
    let app = g.app(1);
    let endpoint_id = g.store.get::<App>(&app.meta.id).unwrap().endpoints[0];
    let endpoint = g.store.get::<Endpoint>(&endpoint_id).unwrap();
    assert_eq!(endpoint.apps, vec![app.meta.id]);

    let doc = g.document(endpoint.as_ref()).unwrap();
    assert_eq!(doc.kind(), EntityKind::Endpoint);
    assert!(!doc.is_stub());
}
