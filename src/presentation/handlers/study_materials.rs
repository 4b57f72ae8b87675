use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{ArtifactKind, TopicId, User};
use crate::presentation::extractors::AuthUser;
use crate::presentation::state::AppState;

use super::error::{course_error_response, error_response, study_material_error_response};

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    #[serde(rename = "Quiz")]
    pub quiz: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizAndFlashcardsResponse {
    pub quiz: String,
    pub flashcards: Vec<String>,
}

pub async fn summary_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(topic_id): Path<i64>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    generate_artifact(&state, &user, TopicId::new(topic_id), ArtifactKind::Summary).await
}

pub async fn flashcards_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(topic_id): Path<i64>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    generate_artifact(&state, &user, TopicId::new(topic_id), ArtifactKind::Flashcards).await
}

pub async fn quiz_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(topic_id): Path<i64>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    generate_artifact(&state, &user, TopicId::new(topic_id), ArtifactKind::Quiz).await
}

pub async fn quiz_and_flashcards_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(topic_id): Path<i64>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    generate_artifact(
        &state,
        &user,
        TopicId::new(topic_id),
        ArtifactKind::QuizAndFlashcards,
    )
    .await
}

/// Resolves the topic's document URL and runs the pipeline for `kind`.
#[tracing::instrument(skip_all, fields(user_id = %user.id, topic_id = %topic_id, artifact = %kind))]
async fn generate_artifact<L, F>(
    state: &AppState<L, F>,
    user: &User,
    topic_id: TopicId,
    kind: ArtifactKind,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let topic = match state.course_service.get_topic(user.id, topic_id).await {
        Ok(topic) => topic,
        Err(e) => return course_error_response(&e),
    };

    let Some(path) = topic.file_path else {
        return error_response(StatusCode::BAD_REQUEST, "No file attached");
    };

    let document_url = state.api_config.media_url(path.as_str());
    let service = &state.study_material_service;

    let result = match kind {
        ArtifactKind::Summary => service
            .summarize(&document_url)
            .await
            .map(|summary| Json(SummaryResponse { summary }).into_response()),
        ArtifactKind::Flashcards => service
            .flashcards(&document_url)
            .await
            .map(|flashcards| Json(FlashcardsResponse { flashcards }).into_response()),
        ArtifactKind::Quiz => service
            .quiz(&document_url)
            .await
            .map(|quiz| Json(QuizResponse { quiz }).into_response()),
        ArtifactKind::QuizAndFlashcards => {
            service.quiz_and_flashcards(&document_url).await.map(|out| {
                Json(QuizAndFlashcardsResponse {
                    quiz: out.quiz,
                    flashcards: out.flashcards,
                })
                .into_response()
            })
        }
    };

    match result {
        Ok(response) => {
            tracing::info!("Study material generated");
            response
        }
        Err(e) => {
            tracing::error!(error = %e, "Study material generation failed");
            study_material_error_response(&e)
        }
    }
}
