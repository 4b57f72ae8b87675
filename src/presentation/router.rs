use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_course_handler, create_topic_handler, delete_course_handler, delete_topic_handler,
    flashcards_handler, get_course_handler, get_topic_handler, health_handler,
    list_courses_handler, list_topics_handler, me_handler, media_handler,
    quiz_and_flashcards_handler, quiz_handler, register_handler, sign_in_handler,
    summary_handler, token_refresh_handler, update_course_handler, update_progress_handler,
    update_topic_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L, F>(state: AppState<L, F>) -> Router
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.api_config.max_upload_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/auth/register", post(register_handler::<L, F>))
        .route("/api/auth/me", get(me_handler))
        .route("/api/auth/mobile/sign-in", post(sign_in_handler::<L, F>))
        .route(
            "/api/auth/mobile/token-refresh",
            post(token_refresh_handler::<L, F>),
        )
        .route(
            "/api/courses",
            get(list_courses_handler::<L, F>).post(create_course_handler::<L, F>),
        )
        .route(
            "/api/courses/{course_id}",
            get(get_course_handler::<L, F>)
                .patch(update_course_handler::<L, F>)
                .delete(delete_course_handler::<L, F>),
        )
        .route(
            "/api/courses/{course_id}/topics",
            get(list_topics_handler::<L, F>).post(create_topic_handler::<L, F>),
        )
        .route(
            "/api/topics/{topic_id}",
            get(get_topic_handler::<L, F>)
                .patch(update_topic_handler::<L, F>)
                .delete(delete_topic_handler::<L, F>),
        )
        .route(
            "/api/topics/{topic_id}/progress",
            patch(update_progress_handler::<L, F>),
        )
        .route("/api/topics/{topic_id}/summary", get(summary_handler::<L, F>))
        .route(
            "/api/topics/{topic_id}/flashcards",
            get(flashcards_handler::<L, F>),
        )
        .route("/api/topics/{topic_id}/quiz", get(quiz_handler::<L, F>))
        .route(
            "/api/topics/{topic_id}/quiz-flashcards",
            get(quiz_and_flashcards_handler::<L, F>),
        )
        .route("/media/{*path}", get(media_handler::<L, F>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
