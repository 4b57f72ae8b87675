use axum::http::StatusCode;
use axum::response::Response;

use super::error_response;

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Trims a course or topic name and rejects empty or oversized values.
pub fn validate_name(field: &str, value: &str) -> Result<String, Response> {
    validate_text(field, value, MAX_NAME_LENGTH)
}

pub fn validate_credentials(username: &str, password: &str) -> Result<String, Response> {
    let username = validate_text("username", username, MAX_USERNAME_LENGTH)?;
    if password.is_empty() {
        return Err(error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "password must not be empty",
        ));
    }
    Ok(username)
}

fn validate_text(field: &str, value: &str, max_chars: usize) -> Result<String, Response> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("{field} must not be empty"),
        ));
    }

    if trimmed.chars().count() > max_chars {
        return Err(error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("{field} must be at most {max_chars} characters"),
        ));
    }

    Ok(trimmed.to_string())
}
