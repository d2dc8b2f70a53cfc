// API error taxonomy.
//
// Every handler returns `Result<_, ApiError>`; the IntoResponse impl
// serializes the uniform `{ "error", "details" }` body clients expect.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// An internal or upstream failure, carrying the client-facing message.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The model replied but its output was not parseable JSON.
    #[error("Failed to parse summary")]
    SummaryParse { raw: String },

    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

impl ApiError {
    pub fn upstream(message: &'static str, source: anyhow::Error) -> Self {
        ApiError::Upstream { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            ApiError::Upstream { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message, "details": source.to_string() }),
                )
            }
            ApiError::SummaryParse { raw } => {
                tracing::error!(raw = %raw, "Failed to parse summary response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to parse summary", "details": raw }),
                )
            }
            ApiError::NotConfigured(feature) => {
                tracing::error!("{feature} is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("{feature} is not configured") }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
