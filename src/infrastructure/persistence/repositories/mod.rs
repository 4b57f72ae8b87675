mod in_memory_repository;
mod pg_course_repository;
mod pg_error;
mod pg_topic_repository;
mod pg_user_repository;

pub use in_memory_repository::InMemoryRepository;
pub use pg_course_repository::PgCourseRepository;
pub use pg_topic_repository::PgTopicRepository;
pub use pg_user_repository::PgUserRepository;
