// Knowledge base: list and create entries, plus document upload.
//
// Uploads are stored on local disk under the configured upload directory.

use axum::extract::{Extension, Multipart};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::domains::knowledge_base::KnowledgeBaseEntry;
use crate::server::app::AppState;
use crate::server::error::ApiError;

const LIST_LIMIT: i64 = 100;
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Request body cap for the upload route. Axum's default body limit is 2 MB,
/// well under the accepted file size, so the route carries its own limit with
/// headroom for the multipart framing around a full-size file.
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 64 * 1024;

/// Accepted upload types, by file extension.
const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

pub async fn knowledge_base_list_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let entries = KnowledgeBaseEntry::find_latest(LIST_LIMIT, &state.db_pool)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch knowledge base", e))?;
    Ok(Json(json!({ "entries": entries })))
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub title: String,
    pub content: String,
}

pub async fn knowledge_base_create_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<Json<KnowledgeBaseEntry>, ApiError> {
    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    let entry = KnowledgeBaseEntry::create(&request.title, &request.content, &state.db_pool)
        .await
        .map_err(|e| ApiError::upstream("Failed to create knowledge base entry", e))?;
    Ok(Json(entry))
}

fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Final path component of a client-supplied filename. Browsers normally send
/// a bare name, but anything with separators must not influence where the
/// file lands.
fn base_name(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

pub async fn knowledge_base_upload_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {e}")))?
        .ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;

    let filename = field
        .file_name()
        .map(|name| base_name(name).to_string())
        .ok_or_else(|| ApiError::BadRequest("No filename provided".to_string()))?;
    if filename.is_empty() {
        return Err(ApiError::BadRequest("No filename provided".to_string()));
    }

    let extension = file_extension(&filename).ok_or_else(|| {
        ApiError::BadRequest("Unsupported file type, expected PDF, DOCX or TXT".to_string())
    })?;
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ApiError::BadRequest(
            "Unsupported file type, expected PDF, DOCX or TXT".to_string(),
        ));
    }

    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::BadRequest(
            "File exceeds the 10 MB upload limit".to_string(),
        ));
    }

    let stored_name = format!("{}-{filename}", Uuid::new_v4());
    let target = state.deps.upload_dir.join(&stored_name);

    tokio::fs::create_dir_all(&state.deps.upload_dir)
        .await
        .map_err(|e| ApiError::upstream("Failed to store upload", e.into()))?;
    tokio::fs::write(&target, &data)
        .await
        .map_err(|e| ApiError::upstream("Failed to store upload", e.into()))?;

    tracing::info!(file = %stored_name, size = data.len(), "Stored knowledge base upload");

    Ok(Json(json!({
        "success": true,
        "filename": stored_name,
        "size": data.len(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_parsing_is_case_insensitive() {
        assert_eq!(file_extension("Report.PDF"), Some("pdf".to_string()));
        assert_eq!(file_extension("notes.txt"), Some("txt".to_string()));
        assert_eq!(file_extension("no-extension"), None);
    }

    #[test]
    fn base_name_strips_path_components() {
        assert_eq!(base_name("report.txt"), "report.txt");
        assert_eq!(base_name("tmp/report.txt"), "report.txt");
        assert_eq!(base_name("..\\..\\report.txt"), "report.txt");
        assert_eq!(base_name("tmp/"), "");
    }

    #[test]
    fn body_limit_leaves_room_for_a_full_size_file() {
        assert!(UPLOAD_BODY_LIMIT > MAX_UPLOAD_BYTES);
    }
}
