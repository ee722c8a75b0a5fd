//! Route manifest import tests

use serde_json::json;
use studio_sync_sdk::import::{load_manifest, parse_manifest};
use studio_sync_sdk::models::RouteKind;
use tempfile::tempdir;

#[test]
fn test_json_manifest_with_schemas() {
    let content = json!({
        "routes": [
            {
                "kind": "api",
                "unique_id": "score_post",
                "path": "/score",
                "name": "score",
                "summary": "Score a document",
                "body_schema": {"properties": {"doc": {"type": "string"}}}
            },
            {"kind": "static", "unique_id": "assets", "path": "/assets", "name": "assets"}
        ]
    })
    .to_string();

    let routes = parse_manifest(&content).unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].kind, RouteKind::Api);
    assert_eq!(routes[0].summary.as_deref(), Some("Score a document"));
    assert!(routes[0].body_schema.is_some());
    assert_eq!(routes[1].kind, RouteKind::Static);
}

#[test]
fn test_yaml_manifest() {
    let content = r#"
routes:
  - kind: api
    unique_id: score_post
    path: /score
    name: score
    body_schema:
      properties:
        doc:
          type: string
          title: Document
"#;
    let routes = parse_manifest(content).unwrap();
    assert_eq!(routes.len(), 1);
    let schema = routes[0].body_schema.as_ref().unwrap();
    assert_eq!(schema["properties"]["doc"]["title"], "Document");
}

#[test]
fn test_bare_array_manifest() {
    let content = r#"[{"kind": "api", "unique_id": "u", "path": "/u", "name": "u"}]"#;
    let routes = parse_manifest(content).unwrap();
    assert_eq!(routes.len(), 1);
}

#[test]
fn test_load_manifest_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("routes.json");
    std::fs::write(
        &path,
        r#"{"routes": [{"kind": "api", "unique_id": "u", "path": "/u", "name": "u"}]}"#,
    )
    .unwrap();

    let routes = load_manifest(&path).unwrap();
    assert_eq!(routes[0].unique_id, "u");
}

#[test]
fn test_load_manifest_missing_file() {
    let result = load_manifest(std::path::Path::new("/nonexistent/routes.json"));
    assert!(result.is_err());
}

#[test]
fn test_invalid_route_entry() {
    // Missing required fields.
    let result = parse_manifest(r#"[{"kind": "api"}]"#);
    assert!(result.is_err());
}
