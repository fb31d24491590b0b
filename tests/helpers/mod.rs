#![allow(dead_code)]

use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use starwars_graph::core::Character;
use starwars_graph::{app, build_schema, CharacterResolver, CharacterStore, HttpUpstream};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn character(id: i32, name: &str, films: Vec<String>, homeworld: Option<String>) -> Character {
    Character {
        id,
        name: name.to_string(),
        height: None,
        films,
        homeworld,
    }
}

/// Router over a fresh store seeded with `seed`, fetching nested fields over HTTP.
pub fn router_with_seed(seed: Vec<Character>) -> (Router, Arc<CharacterStore>) {
    let store = Arc::new(CharacterStore::new(seed));
    let upstream = HttpUpstream::new(Duration::from_secs(5), "starwars-graph-test").unwrap();
    let resolver = CharacterResolver::new(store.clone(), Arc::new(upstream), 5);
    let router = app(build_schema(resolver), GRAPHQL_PATH, true);
    (router, store)
}

pub async fn run_graphql_query(app: &Router, query: &str, variables: Value) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri(GRAPHQL_PATH)
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"query": query, "variables": variables}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK, "{:#?}", body);

    serde_json::from_slice(&body).unwrap()
}

pub fn error_code(value: &Value, index: usize) -> Option<&str> {
    value["errors"][index]["extensions"]["code"].as_str()
}
