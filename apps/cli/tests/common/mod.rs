//! Common test utilities for integration tests.
//!
//! `MockServer` stands in for both remote services on one local port:
//! - `POST /v1beta/models/{model}:generateContent` answers from canned word infos
//! - `GET /chinese/{character}` serves canned stroke-order pages

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};

use flashcard_core::WordInfo;
use mandarin_flashcards::services::gemini::GeminiClient;
use mandarin_flashcards::services::stroke_order::StrokeOrderClient;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_MODEL: &str = "gemini-test";

#[derive(Default)]
struct MockState {
    answers: HashMap<String, WordInfo>,
    pages: HashMap<String, (StatusCode, String)>,
    requests: Mutex<Vec<String>>,
    delay: Duration,
}

/// Builder for the canned responses.
#[derive(Default)]
pub struct MockServerBuilder {
    state: MockState,
}

impl MockServerBuilder {
    pub fn word(mut self, word: &str, info: WordInfo) -> Self {
        self.state.answers.insert(word.to_string(), info);
        self
    }

    /// Character page with a stroke image at the expected position.
    pub fn stroke_page(mut self, character: &str, src: &str) -> Self {
        self.state.pages.insert(
            page_path(character),
            (StatusCode::OK, fixtures::character_page(src)),
        );
        self
    }

    /// Character page whose layout has no image at the expected position.
    pub fn blank_page(mut self, character: &str) -> Self {
        self.state.pages.insert(
            page_path(character),
            (StatusCode::OK, "<html><body><p>no diagram</p></body></html>".to_string()),
        );
        self
    }

    pub fn failing_page(mut self, character: &str, status: StatusCode) -> Self {
        self.state
            .pages
            .insert(page_path(character), (status, String::new()));
        self
    }

    /// Hold every word-info answer back for `delay`.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.state.delay = delay;
        self
    }

    pub async fn start(self) -> MockServer {
        let state = Arc::new(self.state);
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("mock server address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server failed");
        });

        MockServer {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

/// Running mock of the word-info and stroke-order services.
pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    pub fn builder() -> MockServerBuilder {
        MockServerBuilder::default()
    }

    pub fn gemini_client(&self) -> GeminiClient {
        self.gemini_client_with_key(TEST_API_KEY)
    }

    pub fn gemini_client_with_key(&self, key: &str) -> GeminiClient {
        GeminiClient::new(local_client(), &self.base_url, TEST_MODEL, key, "English")
    }

    /// Word-info client whose requests give up after `timeout`.
    pub fn gemini_client_with_timeout(&self, timeout: Duration) -> GeminiClient {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        GeminiClient::new(client, &self.base_url, TEST_MODEL, TEST_API_KEY, "English")
    }

    pub fn stroke_client(&self) -> StrokeOrderClient {
        StrokeOrderClient::new(local_client(), &self.base_url)
    }

    /// Number of requests made for a character page.
    pub fn page_requests(&self, character: &str) -> usize {
        let path = page_path(character);
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|p| **p == path)
            .count()
    }
}

/// HTTP client that never routes through a system proxy.
fn local_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client")
}

/// Percent-encoded request path for a character page.
pub fn page_path(character: &str) -> String {
    reqwest::Url::parse(&format!("http://localhost/chinese/{}", character))
        .unwrap()
        .path()
        .to_string()
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(path.clone());

    if method == Method::POST && path == format!("/v1beta/models/{}:generateContent", TEST_MODEL) {
        tokio::time::sleep(state.delay).await;
        return generate_content(&state, &headers, &body);
    }

    match state.pages.get(&path) {
        Some((status, page)) if method == Method::GET => (*status, page.clone()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn generate_content(state: &MockState, headers: &HeaderMap, body: &str) -> Response {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if key != TEST_API_KEY {
        return (StatusCode::FORBIDDEN, "API key not valid").into_response();
    }

    let request: Value = serde_json::from_str(body).unwrap_or_default();
    if request["generationConfig"]["responseMimeType"] != "application/json" {
        return (StatusCode::BAD_REQUEST, "missing response schema").into_response();
    }

    let prompt = request["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    let word = prompt.split('"').nth(1).unwrap_or_default();

    match state.answers.get(word) {
        Some(info) => Json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": serde_json::to_string(info).unwrap() }]
                }
            }]
        }))
        .into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response(),
    }
}
