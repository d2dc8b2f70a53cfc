// Summarization proxy: builds the fixed analysis prompt over the supplied
// search results, calls the model, and extracts the JSON payload from the
// response.

use axum::extract::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domains::insights::{build_summary_prompt, extract_json_payload, SummaryInput};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub search_results: Vec<SummaryInput>,
}

pub async fn summarize_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if request.search_results.is_empty() {
        return Err(ApiError::BadRequest(
            "Invalid or empty search_results".to_string(),
        ));
    }

    if !state.deps.completion.is_configured() {
        return Err(ApiError::NotConfigured("Summarization"));
    }

    let prompt = build_summary_prompt(&request.search_results);
    let text = state
        .deps
        .completion
        .complete(&prompt)
        .await
        .map_err(|e| ApiError::upstream("Failed to generate summary", e))?;

    let summary = extract_json_payload(&text).map_err(|e| ApiError::SummaryParse { raw: e.raw })?;

    Ok(Json(json!({ "summary": summary })))
}
