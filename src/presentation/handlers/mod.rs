mod auth;
mod courses;
mod error;
mod health;
mod media;
mod study_materials;
mod topics;
mod validation;

pub use auth::{me_handler, register_handler, sign_in_handler, token_refresh_handler};
pub use courses::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    update_course_handler,
};
pub use error::{ErrorResponse, error_response};
pub use health::health_handler;
pub use media::media_handler;
pub use study_materials::{
    flashcards_handler, quiz_and_flashcards_handler, quiz_handler, summary_handler,
};
pub use topics::{
    create_topic_handler, delete_topic_handler, get_topic_handler, list_topics_handler,
    update_progress_handler, update_topic_handler,
};
