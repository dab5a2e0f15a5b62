// Per-request failures and their HTTP mapping.

use crate::extract::ParseError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Failed to render prompt: {0:#}")]
    Render(anyhow::Error),

    #[error("Upstream API error: {0:#}")]
    Upstream(anyhow::Error),

    #[error("Empty response from upstream")]
    EmptyReply,

    #[error("Error parsing response: {0}")]
    Parse(#[from] ParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        // Every per-request failure is reported the same way.
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let body = json!({ "detail": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
