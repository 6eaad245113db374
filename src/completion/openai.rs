/**
 * OpenAI Completion Client
 *
 * Speaks the OpenAI chat-completions REST shape over reqwest. The base URL
 * is configurable so tests can point the client at a mock server.
 */

use serde::{Deserialize, Serialize};

use super::{build_messages, ChatMessage, CompletionBackend, CompletionError};

/// Production endpoint prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed model identifier for every completion request.
const MODEL: &str = "gpt-4";
const TEMPERATURE: f32 = 1.0;
const MAX_TOKENS: u32 = 256;

/// Request body for `POST {base}/chat/completions`.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// A single choice in the completion response.
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Response body; only the fields this client reads.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

/// Client for the external chat-completion API.
#[derive(Clone, Debug)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client against `base_url` (no trailing slash).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl CompletionBackend for OpenAiClient {
    async fn complete(
        &self,
        system_role: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, CompletionError> {
        let messages = build_messages(system_role, history, message);
        let request = ChatCompletionRequest {
            model: MODEL,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!(
            message_count = messages.len(),
            "sending completion request"
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::new(format!("request error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::new(format!("upstream returned {status}")));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::new(format!("malformed response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::new("no choices in response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hello")))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("test-key", format!("{}/v1", server.uri()));
        let reply = client.complete("persona", &[], "hi").await.unwrap();
        assert_eq!(reply, "hello");
    }

    #[tokio::test]
    async fn test_complete_sends_fixed_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("test-key", format!("{}/v1", server.uri()));
        client.complete("persona", &[], "hi").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["temperature"], 1.0);
        assert_eq!(body["max_tokens"], 256);
        assert_eq!(body["messages"][0]["role"], "system");
        let auth = requests[0].headers.get("authorization").unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer test-key");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_opaque() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("test-key", format!("{}/v1", server.uri()));
        let err = client.complete("persona", &[], "hi").await.unwrap_err();
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("test-key", format!("{}/v1", server.uri()));
        assert!(client.complete("persona", &[], "hi").await.is_err());
    }
}
