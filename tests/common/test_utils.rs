use super::mocks::MockGenerationClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, Response, StatusCode},
};
use restaurant_details::{
    config::{Config, GeminiConfig},
    server::{self, AppState},
};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config.gemini = GeminiConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        ..GeminiConfig::default()
    };
    config
}

/// Router backed by `client`, with the given key injected
pub fn create_test_app(client: Arc<MockGenerationClient>, api_key: Option<&str>) -> Router {
    let state = AppState::new(api_key.map(str::to_string), client);
    server::router(state, "/")
}

pub fn post_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn request_with_method(method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

/// Splits a response into status, headers and body text
pub async fn read_response(response: Response<Body>) -> (StatusCode, HeaderMap, String) {
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn content_type(headers: &HeaderMap) -> &str {
    headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  path: "/.netlify/functions/getDetails"
  logs:
    level: "debug"

gemini:
  base_url: "http://localhost:4000"
  model: "gemini-2.0-flash"
  api_key: "yaml-api-key"
  timeout_secs: 20
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
