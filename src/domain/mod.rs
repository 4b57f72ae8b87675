mod artifact;
mod course;
mod course_id;
mod storage_path;
mod token;
mod topic;
mod topic_id;
mod user;
mod user_id;

pub use artifact::{ArtifactKind, QuizAndFlashcards};
pub use course::Course;
pub use course_id::CourseId;
pub use storage_path::StoragePath;
pub use token::{TokenClaims, TokenPair, TokenType};
pub use topic::{MAX_PROGRESS, Topic};
pub use topic_id::TopicId;
pub use user::User;
pub use user_id::UserId;
