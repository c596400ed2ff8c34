//! Publishing configuration as seen through documents

use tempfile::TempDir;

use dataspace::{AppEndpointType, ConfigError, Language, CONFIG_FILE_NAME};

use crate::common::*;

#[test]
fn config_file_drives_the_resolver() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "base_url = \"https://peer.example\"\nmax_depth = 1\nendpoint_selection = \"first\"\n",
    )
    .unwrap();

    let config = PublishConfig::from_file(&path).unwrap();
    let g = Graph::with_config(&config);
    let catalog = g.catalog("main");
    let resource = g.valid_resource("r");
    g.link(catalog.as_ref(), resource.as_ref());

    assert!(g.self_link(catalog.as_ref()).as_str().starts_with("https://peer.example/api/"));
    let doc = g.catalog_document(&catalog);
    assert!(doc.offered_resources[0].is_stub());
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = PublishConfig {
        base_url: "not a url".into(),
        ..PublishConfig::default()
    };
    let store = std::sync::Arc::new(EntityStore::new());
    assert!(matches!(
        EntityResolver::new(store, &config),
        Err(ConfigError::InvalidUrl { field: "base_url", .. })
    ));
}

#[test]
fn unknown_languages_fall_back_to_default() {
    let config = PublishConfig {
        default_language: "de".into(),
        ..PublishConfig::default()
    };
    let g = Graph::with_config(&config);
    let resource = g.valid_resource("r");
    g.store
        .update::<Resource>(&resource.meta.id, |desc| desc.language = "klingon".into())
        .unwrap();

    let doc = g.document(resource.as_ref()).unwrap();
    let resource_doc = doc.as_resource().and_then(Node::full).unwrap();
    assert_eq!(resource_doc.language, Language::De);
    assert_eq!(resource_doc.title.language, Language::De);
}

#[test]
fn unparsable_endpoint_location_uses_fallback() {
    let config = PublishConfig {
        fallback_access_url: "https://fallback.example/".into(),
        ..PublishConfig::default()
    };
    let g = Graph::with_config(&config);
    let endpoint = g.endpoint("app.local/in");

    let doc = g.document(endpoint.as_ref()).unwrap();
    let ProtocolNode::Endpoint(Node::Full(endpoint_doc)) = doc else {
        panic!("expected a full endpoint");
    };
    assert_eq!(endpoint_doc.access_url.as_str(), "https://fallback.example/");
    assert_eq!(endpoint_doc.endpoint_type, AppEndpointType::InputEndpoint);
}
