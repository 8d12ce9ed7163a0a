//! Helpers shared across integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
};
use holocron::server::model::app::AppState;
use holocron_test_utils::TestContext;

/// Extension trait for TestContext to build the application state
pub trait TestContextExt {
    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Builds a request with a JSON body
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Reads a response body as text
pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
