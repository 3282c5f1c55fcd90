// Shared helpers for inbound HTTP tests.

use std::sync::Arc;

use axum::{body::Body, response::Response};
use http_body_util::BodyExt;

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::events::make_seeded_events;

pub fn make_empty_state() -> AppState {
    AppState::new(Arc::new(InMemoryEventStore::new()))
}

pub fn make_seeded_state() -> AppState {
    AppState::new(Arc::new(InMemoryEventStore::with_events(make_seeded_events())))
}

pub fn make_offline_state() -> AppState {
    let mut event_store = InMemoryEventStore::with_events(make_seeded_events());
    event_store.toggle_offline();
    AppState::new(Arc::new(event_store))
}

pub fn json_request(method: &str, uri: &str, body: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends `body` with no content-type header, the way plain HTTP clients often do.
pub fn raw_request(method: &str, uri: &str, body: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collects the body and strips trailing whitespace.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec())
        .unwrap()
        .trim_end()
        .to_string()
}
