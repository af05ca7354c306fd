//! LLM Service - Ollama generation proxy
//!
//! Forwards a prompt to the Ollama `/api/generate` endpoint with streaming
//! disabled and JSON output requested, then normalizes the answer.
//!
//! # Payload contract
//!
//! Ollama wraps the model output in an envelope:
//!
//! ```json
//! { "model": "llama3", "response": "{\"a\": 1}", "done": true }
//! ```
//!
//! The `response` value is itself a JSON document encoded as a string.
//! [`parse_generation`] unwraps both layers and reports any failure as a
//! [`FormatError`]; [`render_json`] re-serializes the result with two-space
//! indentation and sorted keys so upstream whitespace and key order do not
//! leak to callers.

use crate::services::error::{FormatError, LlmError};
use serde::Serialize;
use serde_json::Value;

/// Appended to every prompt so the model answers in JSON
pub const JSON_INSTRUCTION: &str = "\nRespond using JSON.";

/// Default model when `OLLAMA_MODEL` is not set
pub const DEFAULT_MODEL: &str = "llama3";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    format: &'a str,
}

/// Client for the inference endpoint
#[derive(Clone)]
pub struct LlmService {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl LlmService {
    /// Create a client for the Ollama server at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("itemsync/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }

    /// Generate a JSON answer for `prompt` and return it pretty-printed
    ///
    /// # Errors
    ///
    /// - [`LlmError::UpstreamRejected`] with the upstream status and body when
    ///   the endpoint does not answer with a success status
    /// - [`LlmError::MalformedPayload`] when the envelope or its inner
    ///   `response` document is not valid JSON
    /// - [`LlmError::Transport`] when no response was received
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: format!("{}{}", prompt, JSON_INSTRUCTION),
            stream: false,
            format: "json",
        };

        tracing::debug!("Sending generation request to {}", self.generate_url());

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("LLM endpoint returned {}", status);
            return Err(LlmError::UpstreamRejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = parse_generation(&body)?;
        Ok(render_json(&parsed)?)
    }
}

/// Unwrap an Ollama envelope into the JSON document in its `response` field
pub fn parse_generation(body: &str) -> Result<Value, FormatError> {
    let envelope: Value =
        serde_json::from_str(body).map_err(|e| FormatError::InvalidEnvelope(e.to_string()))?;

    let inner = match envelope.get("response") {
        None => return Err(FormatError::MissingResponse),
        Some(Value::String(s)) => s,
        Some(_) => return Err(FormatError::ResponseNotString),
    };

    serde_json::from_str(inner).map_err(|e| FormatError::InvalidResponseJson(e.to_string()))
}

/// Serialize with two-space indentation and object keys in sorted order
pub fn render_json(value: &Value) -> Result<String, FormatError> {
    serde_json::to_string_pretty(&sort_keys(value.clone()))
        .map_err(|e| FormatError::InvalidResponseJson(e.to_string()))
}

// Rebuilt bottom-up so the order holds even when serde_json preserves insertion order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sort_keys(v))).collect())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
