//! Route to transformation converter
//!
//! Provides functionality to convert web-framework route definitions into
//! studio transformation records ready for upload or export.

use crate::models::{EXECUTION_TYPE, Route, RouteKind, Transformation};
use serde_json::{Map, Value, json};

/// Convert a sequence of routes into transformation records.
///
/// Only routes of kind [`RouteKind::Api`] are converted; everything else is
/// silently skipped. Output order matches input order.
///
/// # Arguments
///
/// * `routes` - Routes to convert
/// * `base_url` - Publicly reachable base URL of the serving application
/// * `id_suffix` - Optional suffix appended to each `transformation_id`
///   (pass `""` for none), useful for separating deployments
///
/// # Returns
///
/// A tuple of the transformation records and their `transformation_id`s,
/// in route order.
///
/// # Example
///
/// ```rust
/// use studio_sync_sdk::convert::routes_to_transformations;
/// use studio_sync_sdk::models::Route;
///
/// let routes = vec![Route::api("score_post", "/score", "Score")];
/// let (tfs, ids) = routes_to_transformations(&routes, "https://app.example.com/", "-dev");
/// assert_eq!(ids, vec!["score_post-dev"]);
/// assert_eq!(tfs[0].studio_api_path, "https://app.example.com/score");
/// ```
pub fn routes_to_transformations(
    routes: &[Route],
    base_url: &str,
    id_suffix: &str,
) -> (Vec<Transformation>, Vec<String>) {
    let mut transformations = Vec::new();
    let mut ids = Vec::new();

    for route in routes.iter().filter(|r| r.kind == RouteKind::Api) {
        let transformation_id = format!("{}{}", route.unique_id, id_suffix);
        ids.push(transformation_id.clone());

        // Missing schemas degrade to empty mappings, never to an error.
        let mut input_schema = route.body_schema.clone().unwrap_or_else(|| json!({}));
        migrate_property_metadata(&mut input_schema);
        let output_schema = route.response_schema.clone().unwrap_or_else(|| json!({}));

        transformations.push(Transformation {
            id: route.unique_id.clone(),
            transformation_id,
            name: route.display_name().to_string(),
            description: route.description.clone(),
            studio_api_path: join_api_path(base_url, &route.path),
            execution_type: EXECUTION_TYPE.to_string(),
            input_schema,
            output_schema,
        });
    }

    (transformations, ids)
}

/// Join a base URL and a route path with exactly one separating slash.
///
/// Strips one trailing slash from the base and one leading slash from the
/// path before concatenation.
pub fn join_api_path(base_url: &str, route_path: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let path = route_path.strip_prefix('/').unwrap_or(route_path);
    format!("{}/{}", base, path)
}

/// Migrate vendor property metadata in an input schema, in place.
///
/// For each entry under the schema's top-level `"properties"` object:
/// - a `"frontend"` key is renamed to `"metadata"`;
/// - `"title"` and `"description"` keys are folded into the `"metadata"`
///   sub-mapping (created on demand) and removed from the property's top
///   level.
///
/// Schemas without a `"properties"` object are left untouched. Output
/// schemas are never migrated.
pub fn migrate_property_metadata(schema: &mut Value) {
    let Some(properties) = schema
        .get_mut("properties")
        .and_then(Value::as_object_mut)
    else {
        return;
    };

    for property in properties.values_mut() {
        let Some(property) = property.as_object_mut() else {
            continue;
        };

        if let Some(frontend) = property.remove("frontend") {
            property.insert("metadata".to_string(), frontend);
        }

        for key in ["title", "description"] {
            if let Some(value) = property.remove(key)
                && let Some(metadata) = property
                    .entry("metadata")
                    .or_insert_with(|| Value::Object(Map::new()))
                    .as_object_mut()
            {
                metadata.insert(key.to_string(), value);
            }
        }
    }
}
