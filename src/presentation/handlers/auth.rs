use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::extractors::AuthUser;
use crate::presentation::state::AppState;

use super::error::auth_error_response;
use super::validation::validate_credentials;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub refresh: String,
    pub access: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn register_handler<L, F>(
    State(state): State<AppState<L, F>>,
    Json(request): Json<CredentialsRequest>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let username = match validate_credentials(&request.username, &request.password) {
        Ok(username) => username,
        Err(response) => return response,
    };

    match state
        .auth_service
        .register(&username, &request.password)
        .await
    {
        Ok(user) => (
            StatusCode::OK,
            Json(UserResponse {
                username: user.username,
            }),
        )
            .into_response(),
        Err(e) => auth_error_response(&e),
    }
}

#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn sign_in_handler<L, F>(
    State(state): State<AppState<L, F>>,
    Json(request): Json<CredentialsRequest>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    match state
        .auth_service
        .sign_in(request.username.trim(), &request.password)
        .await
    {
        Ok(tokens) => Json(TokenPairResponse {
            refresh: tokens.refresh,
            access: tokens.access,
        })
        .into_response(),
        Err(e) => auth_error_response(&e),
    }
}

#[tracing::instrument(skip_all)]
pub async fn token_refresh_handler<L, F>(
    State(state): State<AppState<L, F>>,
    Json(request): Json<RefreshRequest>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    match state.auth_service.refresh(&request.refresh).await {
        Ok(access) => Json(AccessTokenResponse { access }).into_response(),
        Err(e) => auth_error_response(&e),
    }
}

pub async fn me_handler(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse {
        username: user.username,
    })
}
