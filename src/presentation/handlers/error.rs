use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{AuthError, CourseError, StudyMaterialError};

const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn auth_error_response(error: &AuthError) -> Response {
    match error {
        AuthError::UsernameTaken => error_response(StatusCode::BAD_REQUEST, error.to_string()),
        AuthError::InvalidCredentials => {
            error_response(StatusCode::UNAUTHORIZED, error.to_string())
        }
        AuthError::Token(_) | AuthError::UnknownUser => {
            error_response(StatusCode::UNAUTHORIZED, "Token is invalid or expired")
        }
        AuthError::PasswordHash(_) | AuthError::Repository(_) => {
            tracing::error!(error = %error, "Authentication failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

pub fn course_error_response(error: &CourseError) -> Response {
    match error {
        CourseError::CourseNotFound | CourseError::TopicNotFound => {
            error_response(StatusCode::NOT_FOUND, error.to_string())
        }
        CourseError::InvalidProgress(_) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        CourseError::Repository(_) | CourseError::FileStore(_) => {
            tracing::error!(error = %error, "Course operation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// Document problems and generation failures are upstream errors (502);
/// a document without usable text is reported as 500.
pub fn study_material_error_response(error: &StudyMaterialError) -> Response {
    match error {
        StudyMaterialError::Fetch(e) => {
            error_response(StatusCode::BAD_GATEWAY, format!("PDF read error: {e}"))
        }
        StudyMaterialError::Extraction(e) => {
            error_response(StatusCode::BAD_GATEWAY, format!("PDF read error: {e}"))
        }
        StudyMaterialError::NoUsableText => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "No usable text")
        }
        StudyMaterialError::Chunking => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Could not chunk text")
        }
        StudyMaterialError::Backend { .. } => error_response(
            StatusCode::BAD_GATEWAY,
            format!("Generation failed: {error}"),
        ),
    }
}
