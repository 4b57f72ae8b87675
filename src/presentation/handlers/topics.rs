use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::FileUpload;
use crate::domain::{CourseId, Topic, TopicId};
use crate::presentation::config::ApiConfig;
use crate::presentation::extractors::AuthUser;
use crate::presentation::state::AppState;

use super::error::{course_error_response, error_response};
use super::validation::validate_name;

#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub id: i64,
    pub name: String,
    pub file_url: String,
    pub created_at: String,
    pub progress: i32,
}

impl TopicResponse {
    pub fn from_topic(topic: Topic, api_config: &ApiConfig) -> Self {
        Self {
            id: topic.id.as_i64(),
            file_url: topic
                .file_path
                .as_ref()
                .map(|path| api_config.media_url(path.as_str()))
                .unwrap_or_default(),
            name: topic.name,
            created_at: topic.created_at.to_rfc3339(),
            progress: topic.progress,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopicNameResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub progress: i32,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub message: String,
    pub progress: i32,
}

/// Fields of the topic multipart form. Both are optional at this level;
/// creation requires them, updates apply whichever is present.
#[derive(Default)]
struct TopicForm {
    name: Option<String>,
    file: Option<FileUpload>,
}

async fn read_topic_form(multipart: &mut Multipart) -> Result<TopicForm, Response> {
    let mut form = TopicForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {e}"),
                ));
            }
        };

        match field.name() {
            Some("name") => {
                let text = field.text().await.map_err(|e| {
                    error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read name: {e}"),
                    )
                })?;
                form.name = Some(validate_name("name", &text)?);
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read file: {e}"),
                    )
                })?;

                if filename.is_empty() && data.is_empty() {
                    continue;
                }

                tracing::debug!(filename = %filename, bytes = data.len(), "File data received");
                form.file = Some(FileUpload { filename, data });
            }
            _ => {}
        }
    }

    Ok(form)
}

pub async fn list_topics_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(course_id): Path<i64>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    match state
        .course_service
        .list_topics(user.id, CourseId::new(course_id))
        .await
    {
        Ok(topics) => Json(
            topics
                .into_iter()
                .map(|topic| TopicResponse::from_topic(topic, &state.api_config))
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => course_error_response(&e),
    }
}

#[tracing::instrument(skip(state, user, multipart), fields(user_id = %user.id))]
pub async fn create_topic_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(course_id): Path<i64>,
    mut multipart: Multipart,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let form = match read_topic_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let (Some(name), Some(file)) = (form.name, form.file) else {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Both name and file are required",
        );
    };

    match state
        .course_service
        .create_topic(user.id, CourseId::new(course_id), &name, file)
        .await
    {
        Ok(topic) => Json(TopicResponse::from_topic(topic, &state.api_config)).into_response(),
        Err(e) => course_error_response(&e),
    }
}

pub async fn get_topic_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(topic_id): Path<i64>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    match state
        .course_service
        .get_topic(user.id, TopicId::new(topic_id))
        .await
    {
        Ok(topic) => Json(TopicNameResponse {
            id: topic.id.as_i64(),
            name: topic.name,
            created_at: topic.created_at.to_rfc3339(),
        })
        .into_response(),
        Err(e) => course_error_response(&e),
    }
}

#[tracing::instrument(skip(state, user, multipart), fields(user_id = %user.id))]
pub async fn update_topic_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(topic_id): Path<i64>,
    mut multipart: Multipart,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let form = match read_topic_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    match state
        .course_service
        .update_topic(
            user.id,
            TopicId::new(topic_id),
            form.name.as_deref(),
            form.file,
        )
        .await
    {
        Ok(topic) => Json(TopicResponse::from_topic(topic, &state.api_config)).into_response(),
        Err(e) => course_error_response(&e),
    }
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_topic_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(topic_id): Path<i64>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    match state
        .course_service
        .delete_topic(user.id, TopicId::new(topic_id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => course_error_response(&e),
    }
}

#[tracing::instrument(skip(state, user, request), fields(user_id = %user.id, progress = request.progress))]
pub async fn update_progress_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(topic_id): Path<i64>,
    Json(request): Json<ProgressRequest>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    match state
        .course_service
        .update_progress(user.id, TopicId::new(topic_id), request.progress)
        .await
    {
        Ok(topic) => Json(ProgressResponse {
            message: "Progress updated".to_string(),
            progress: topic.progress,
        })
        .into_response(),
        Err(e) => course_error_response(&e),
    }
}
