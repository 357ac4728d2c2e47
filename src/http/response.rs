//! JSON response envelope.
//!
//! Every body this service writes is an [`ApiResponse`]. Serialization
//! failures are logged and degrade to a bare status code.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `{"message": ..., "error": ...}`; `error` is empty on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub message: String,
    pub error: String,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            message: "success".to_string(),
            error: String::new(),
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: error.into(),
        }
    }

    /// Serialize with the given status.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to marshal api response");
                status.into_response()
            }
        }
    }
}
