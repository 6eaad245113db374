//! Shared fixtures for API tests
//!
//! Builds the full application against an in-memory store and a wiremock
//! completion server, and provides request helpers that drive the router
//! directly (no listening socket needed).

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use personabot::completion::OpenAiClient;
use personabot::routes::create_router;
use personabot::server::state::AppState;
use personabot::store::SqliteStore;

/// A fully wired application plus handles to its collaborators.
pub struct TestApp {
    pub router: Router,
    pub store: SqliteStore,
    pub completion_server: MockServer,
}

/// Build the application with an in-memory store and a mock completion API.
pub async fn spawn_app() -> TestApp {
    let store = SqliteStore::in_memory().await.expect("in-memory store");
    let completion_server = MockServer::start().await;
    let completion = OpenAiClient::new("test-key", format!("{}/v1", completion_server.uri()));

    let router = create_router(AppState {
        store: store.clone(),
        completion,
    });

    TestApp {
        router,
        store,
        completion_server,
    }
}

impl TestApp {
    /// Mount a completion mock that always replies with `content`.
    pub async fn mock_completion_reply(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 0,
                "model": "gpt-4",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }]
            })))
            .mount(&self.completion_server)
            .await;
    }

    /// Mount a completion mock that fails with the given status.
    pub async fn mock_completion_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.completion_server)
            .await;
    }

    /// Bodies sent to the completion API so far, parsed as JSON.
    pub async fn completion_requests(&self) -> Vec<Value> {
        self.completion_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("completion request body"))
            .collect()
    }

    /// Drive one request through the router. The body is JSON when given;
    /// the response body parses as JSON when possible, otherwise it is
    /// returned as a string value.
    pub async fn request(
        &self,
        http_method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(http_method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, value)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            "POST",
            "/api/users",
            None,
            Some(json!({ "name": name, "email": email, "password": password })),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            "POST",
            "/api/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await
    }

    pub async fn chat(&self, token: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", "/api/chatbot", Some(token), Some(body)).await
    }

    /// Register + login, returning the bearer token.
    pub async fn registered_user_token(&self, email: &str, password: &str) -> String {
        let (status, _) = self.register("Test User", email, password).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self.login(email, password).await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().expect("login token").to_string()
    }
}
