//! Converter integration tests

use serde_json::json;
use studio_sync_sdk::convert::{join_api_path, routes_to_transformations};
use studio_sync_sdk::models::{Route, RouteKind};

fn sample_routes() -> Vec<Route> {
    vec![
        Route::api("summarise_post", "/summarise", "summarise")
            .with_summary("Summarise text")
            .with_description("Summarises the given text.")
            .with_body_schema(json!({
                "title": "SummariseRequest",
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "title": "Text",
                        "description": "Text to summarise",
                        "frontend": {"widget": "long_text"}
                    },
                    "max_words": {"type": "integer"}
                },
                "required": ["text"]
            }))
            .with_response_schema(json!({
                "title": "SummariseResponse",
                "type": "object",
                "properties": {"summary": {"type": "string", "title": "Summary"}}
            })),
        Route {
            kind: RouteKind::Static,
            ..Route::api("assets", "/assets", "assets")
        },
        Route::api("health_get", "/health", "health"),
    ]
}

#[test]
fn test_full_pipeline() {
    let routes = sample_routes();
    let (tfs, ids) = routes_to_transformations(&routes, "https://app.example.com/", "-prod");

    // Static route skipped from both lists, order preserved.
    assert_eq!(ids, vec!["summarise_post-prod", "health_get-prod"]);
    assert_eq!(tfs.len(), 2);

    let summarise = &tfs[0];
    assert_eq!(summarise.id, "summarise_post");
    assert_eq!(summarise.transformation_id, "summarise_post-prod");
    assert_eq!(summarise.name, "Summarise text");
    assert_eq!(summarise.description, "Summarises the given text.");
    assert_eq!(summarise.studio_api_path, "https://app.example.com/summarise");
    assert_eq!(summarise.execution_type, "studio-api");

    // Input schema properties migrated in place.
    let text = &summarise.input_schema["properties"]["text"];
    assert_eq!(
        text["metadata"],
        json!({
            "widget": "long_text",
            "title": "Text",
            "description": "Text to summarise"
        })
    );
    assert!(text.get("frontend").is_none());
    assert!(text.get("title").is_none());
    assert!(text.get("description").is_none());
    assert_eq!(text["type"], "string");

    // Properties without vendor keys gain nothing.
    let max_words = &summarise.input_schema["properties"]["max_words"];
    assert!(max_words.get("metadata").is_none());

    // Schema-level keys stay put; only property-level ones migrate.
    assert_eq!(summarise.input_schema["title"], "SummariseRequest");
    assert_eq!(summarise.input_schema["required"], json!(["text"]));

    // Output schema passes through untouched.
    assert_eq!(
        summarise.output_schema["properties"]["summary"]["title"],
        "Summary"
    );

    // Route without schemas degrades to empty mappings.
    let health = &tfs[1];
    assert_eq!(health.input_schema, json!({}));
    assert_eq!(health.output_schema, json!({}));
    assert_eq!(health.name, "health");
}

#[test]
fn test_url_joining_is_slash_normalized() {
    assert_eq!(join_api_path("https://x/", "/foo"), "https://x/foo");

    let routes = vec![Route::api("a", "foo", "a")];
    let (tfs, _) = routes_to_transformations(&routes, "https://x", "");
    assert_eq!(tfs[0].studio_api_path, "https://x/foo");
}

#[test]
fn test_empty_suffix_keeps_ids_identical() {
    let routes = vec![Route::api("a", "/a", "a")];
    let (tfs, ids) = routes_to_transformations(&routes, "https://x", "");
    assert_eq!(tfs[0].id, tfs[0].transformation_id);
    assert_eq!(ids[0], "a");
}

#[test]
fn test_no_api_routes_yields_empty_lists() {
    let routes = vec![Route {
        kind: RouteKind::Mount,
        ..Route::api("m", "/m", "m")
    }];
    let (tfs, ids) = routes_to_transformations(&routes, "https://x", "");
    assert!(tfs.is_empty());
    assert!(ids.is_empty());
}
