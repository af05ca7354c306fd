//! HTTP error handling
//!
//! Every endpoint fails with an [`HttpError`], serialized as
//! `{"message", "code", "details"?}`. The status code is derived from the
//! machine-readable `code`, except for upstream rejections, which carry the
//! inference endpoint's own status through unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use itemsync_core::services::{ItemServiceError, LlmError};
use serde::{Deserialize, Serialize};

/// Fixed message for unusable LLM payloads
pub const MALFORMED_PAYLOAD_MESSAGE: &str = "Failed to parse JSON response from LLM";

/// HTTP error response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Optional detailed error information for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Status forced by the error source instead of the code mapping
    #[serde(skip)]
    status: Option<StatusCode>,
}

impl HttpError {
    /// Create a new HTTP error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
            status: None,
        }
    }

    /// Create a new HTTP error with details
    pub fn with_details(
        message: impl Into<String>,
        code: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: Some(details.into()),
            status: None,
        }
    }

    /// Relay an upstream failure with its status and body
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self {
            message: body.into(),
            code: "UPSTREAM_REJECTED".to_string(),
            details: None,
            status: Some(StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)),
        }
    }

    /// Status this error is sent with
    pub fn status(&self) -> StatusCode {
        if let Some(status) = self.status {
            return status;
        }

        match self.code.as_str() {
            "ITEM_NOT_FOUND" => StatusCode::NOT_FOUND,
            "INVALID_INPUT" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<ItemServiceError> for HttpError {
    fn from(err: ItemServiceError) -> Self {
        match err {
            ItemServiceError::ItemNotFound { .. } | ItemServiceError::GraphItemNotFound { .. } => {
                HttpError::with_details("Item not found", "ITEM_NOT_FOUND", err.to_string())
            }
            ItemServiceError::DatabaseError(e) => {
                tracing::error!("❌ Store operation failed: {}", e);
                HttpError::with_details("Database operation failed", "DATABASE_ERROR", e.to_string())
            }
        }
    }
}

impl From<LlmError> for HttpError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::UpstreamRejected { status, body } => HttpError::upstream(status, body),
            LlmError::MalformedPayload(e) => HttpError::with_details(
                MALFORMED_PAYLOAD_MESSAGE,
                "MALFORMED_UPSTREAM_PAYLOAD",
                e.to_string(),
            ),
            LlmError::Transport(e) => {
                tracing::error!("❌ LLM request failed: {}", e);
                HttpError::with_details("LLM request failed", "LLM_REQUEST_FAILED", e.to_string())
            }
        }
    }
}
