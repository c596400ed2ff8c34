//! Validity rules and pruning properties

use std::sync::Arc;

use proptest::prelude::*;

use crate::common::*;

// ============================================================================
// Per-kind rules
// ============================================================================

#[test]
fn representation_without_artifacts_is_pruned() {
    let g = Graph::new();
    let rep = g.representation_with(0, &[1]);
    let resource = g.resource_with("r", &[rep], 1);

    assert!(g.document(resource.as_ref()).unwrap_err().is_invalid_resource());
}

#[test]
fn representation_keeps_only_valid_apps() {
    let g = Graph::new();
    let rep = g.representation_with(1, &[0, 2, 0]);

    let doc = g.document(rep.as_ref()).unwrap();
    let ProtocolNode::Representation(Node::Full(rep_doc)) = doc else {
        panic!("expected a full representation");
    };
    assert_eq!(rep_doc.apps.len(), 1);
    assert_eq!(rep_doc.instances.len(), 1);
}

#[test]
fn contract_without_rules_is_never_pruned() {
    let g = Graph::new();
    let contract = g.contract();

    let doc = g.document(contract.as_ref()).unwrap();
    let ProtocolNode::Contract(Node::Full(contract_doc)) = doc else {
        panic!("expected a full contract");
    };
    assert!(contract_doc.rules.is_empty());
}

#[test]
fn leaves_are_never_pruned() {
    let g = Graph::new();
    let artifact = g.artifact(b"");
    let endpoint = g.endpoint("");
    let rule = g.rule();

    assert!(g.document(artifact.as_ref()).is_ok());
    assert!(g.document(endpoint.as_ref()).is_ok());
    assert!(g.document(rule.as_ref()).is_ok());
}

#[test]
fn empty_catalog_is_emitted() {
    let g = Graph::new();
    let catalog = g.catalog("empty");

    let doc = g.catalog_document(&catalog);
    assert!(doc.offered_resources.is_empty());
    assert_eq!(doc.title.value, "empty");
}

#[test]
fn shared_representation_is_judged_per_build_not_per_parent() {
    let g = Graph::new();
    let catalog = g.catalog("main");
    let shared = g.valid_representation();
    let a = g.resource_with("a", &[shared.clone()], 1);
    let b = g.resource_with("b", &[shared], 0);
    g.link(catalog.as_ref(), a.as_ref());
    g.link(catalog.as_ref(), b.as_ref());

    let doc = g.catalog_document(&catalog);
    assert_eq!(resource_titles(&doc), vec!["a".to_string()]);
}

// ============================================================================
// Properties
// ============================================================================

/// Shape of one representation: artifact count and per-app endpoint counts.
#[derive(Debug, Clone)]
struct RepShape {
    artifacts: usize,
    apps: Vec<usize>,
}

impl RepShape {
    fn is_valid(&self) -> bool {
        self.artifacts > 0 && self.apps.iter().any(|&endpoints| endpoints > 0)
    }
}

/// Shape of one resource.
#[derive(Debug, Clone)]
struct ResourceShape {
    representations: Vec<RepShape>,
    contracts: usize,
}

impl ResourceShape {
    fn is_valid(&self) -> bool {
        self.contracts > 0 && self.representations.iter().any(RepShape::is_valid)
    }
}

fn rep_shape() -> impl Strategy<Value = RepShape> {
    (0usize..3, prop::collection::vec(0usize..3, 0..3))
        .prop_map(|(artifacts, apps)| RepShape { artifacts, apps })
}

fn resource_shape() -> impl Strategy<Value = ResourceShape> {
    (prop::collection::vec(rep_shape(), 0..3), 0usize..3).prop_map(
        |(representations, contracts)| ResourceShape {
            representations,
            contracts,
        },
    )
}

fn materialize(g: &Graph, title: &str, shape: &ResourceShape) -> Arc<Resource> {
    let reps: Vec<_> = shape
        .representations
        .iter()
        .map(|rep| g.representation_with(rep.artifacts, &rep.apps))
        .collect();
    g.resource_with(title, &reps, shape.contracts)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn catalog_lists_exactly_the_valid_resources(
        shapes in prop::collection::vec(resource_shape(), 0..6)
    ) {
        let g = Graph::new();
        let catalog = g.catalog("main");
        let mut expected = Vec::new();
        for (i, shape) in shapes.iter().enumerate() {
            let title = format!("r{}", i);
            let resource = materialize(&g, &title, shape);
            g.link(catalog.as_ref(), resource.as_ref());
            if shape.is_valid() {
                expected.push(title);
            }
        }

        let doc = g.catalog_document(&catalog);
        prop_assert!(doc.offered_resources.len() <= shapes.len());
        prop_assert_eq!(resource_titles(&doc), expected);
    }

    #[test]
    fn published_resources_are_well_formed(shape in resource_shape()) {
        let g = Graph::new();
        let resource = materialize(&g, "r", &shape);

        match g.document(resource.as_ref()) {
            Ok(ProtocolNode::Resource(Node::Full(doc))) => {
                prop_assert!(shape.is_valid());
                prop_assert!(!doc.contract_offers.is_empty());
                prop_assert!(!doc.representations.is_empty());
                for rep in doc.representations.iter().filter_map(Node::full) {
                    prop_assert!(!rep.instances.is_empty());
                    prop_assert!(!rep.apps.is_empty());
                    for app in rep.apps.iter().filter_map(Node::full) {
                        prop_assert!(!app.endpoints.is_empty());
                    }
                }
            }
            Ok(other) => prop_assert!(false, "unexpected document {:?}", other),
            Err(err) => {
                prop_assert!(!shape.is_valid());
                prop_assert!(err.is_invalid_resource());
                prop_assert_eq!(err.elision().map(|e| e.entity), Some(resource.reference()));
            }
        }
    }

    #[test]
    fn app_survives_iff_it_has_endpoints(endpoints in 0usize..4) {
        let g = Graph::new();
        let app = g.app(endpoints);

        match g.document(app.as_ref()) {
            Ok(doc) => {
                let app_doc = doc.as_app().and_then(Node::full).cloned();
                prop_assert_eq!(app_doc.map(|a| a.endpoints.len()), Some(endpoints));
            }
            Err(err) => {
                prop_assert_eq!(endpoints, 0);
                prop_assert!(err.is_invalid_resource());
            }
        }
    }
}
