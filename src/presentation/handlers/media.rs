use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::{FileLoader, FileStoreError, LlmClient};
use crate::domain::StoragePath;
use crate::presentation::state::AppState;

use super::error::error_response;

/// Serves stored topic files. The document fetcher downloads topic PDFs
/// through this route, so it is not behind authentication.
pub async fn media_handler<L, F>(
    State(state): State<AppState<L, F>>,
    Path(raw_path): Path<String>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let Some(path) = StoragePath::parse(&raw_path) else {
        return error_response(StatusCode::NOT_FOUND, "File not found");
    };

    match state.file_store.fetch(&path).await {
        Ok(data) => ([(CONTENT_TYPE, content_type_for(&path))], data).into_response(),
        Err(FileStoreError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, "File not found"),
        Err(e) => {
            tracing::error!(path = %path, error = %e, "Failed to read stored file");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn content_type_for(path: &StoragePath) -> &'static str {
    match path.extension().map(str::to_ascii_lowercase).as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
