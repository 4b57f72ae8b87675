use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Response;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::AuthError;
use crate::domain::User;
use crate::presentation::handlers::error_response;
use crate::presentation::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// The caller, resolved from an `Authorization: Bearer <access token>` header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl<L, F> FromRequestParts<AppState<L, F>> for AuthUser
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<L, F>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Authentication credentials were not provided",
                )
            })?;

        match state.auth_service.authenticate(token).await {
            Ok(user) => Ok(AuthUser(user)),
            Err(AuthError::Repository(e)) => {
                tracing::error!(error = %e, "Failed to load authenticated user");
                Err(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                ))
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                Err(error_response(StatusCode::UNAUTHORIZED, "Unauthorized"))
            }
        }
    }
}
