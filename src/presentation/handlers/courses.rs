use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{Course, CourseId};
use crate::presentation::extractors::AuthUser;
use crate::presentation::state::AppState;

use super::error::course_error_response;
use super::validation::validate_name;

#[derive(Debug, Deserialize)]
pub struct CourseRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub created_at: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.as_i64(),
            name: course.name,
            owner: course.owner_username,
            created_at: course.created_at.to_rfc3339(),
        }
    }
}

pub async fn list_courses_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    match state.course_service.list_courses(user.id).await {
        Ok(courses) => Json(
            courses
                .into_iter()
                .map(CourseResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => course_error_response(&e),
    }
}

#[tracing::instrument(skip(state, user, request), fields(user_id = %user.id))]
pub async fn create_course_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Json(request): Json<CourseRequest>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let name = match validate_name("name", &request.name) {
        Ok(name) => name,
        Err(response) => return response,
    };

    match state.course_service.create_course(user.id, &name).await {
        Ok(course) => (StatusCode::OK, Json(CourseResponse::from(course))).into_response(),
        Err(e) => course_error_response(&e),
    }
}

pub async fn get_course_handler<L, F>(
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
        .get_course(user.id, CourseId::new(course_id))
        .await
    {
        Ok(course) => Json(CourseResponse::from(course)).into_response(),
        Err(e) => course_error_response(&e),
    }
}

#[tracing::instrument(skip(state, user, request), fields(user_id = %user.id))]
pub async fn update_course_handler<L, F>(
    State(state): State<AppState<L, F>>,
    AuthUser(user): AuthUser,
    Path(course_id): Path<i64>,
    Json(request): Json<CourseRequest>,
) -> Response
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let name = match validate_name("name", &request.name) {
        Ok(name) => name,
        Err(response) => return response,
    };

    match state
        .course_service
        .rename_course(user.id, CourseId::new(course_id), &name)
        .await
    {
        Ok(course) => Json(CourseResponse::from(course)).into_response(),
        Err(e) => course_error_response(&e),
    }
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_course_handler<L, F>(
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
        .delete_course(user.id, CourseId::new(course_id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => course_error_response(&e),
    }
}
