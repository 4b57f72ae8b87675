use chrono::{DateTime, Utc};

use super::{CourseId, StoragePath, TopicId};

pub const MAX_PROGRESS: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: TopicId,
    pub course_id: CourseId,
    pub name: String,
    pub file_path: Option<StoragePath>,
    pub created_at: DateTime<Utc>,
    /// Study completion in percent, `0..=MAX_PROGRESS`.
    pub progress: i32,
}

impl Topic {
    pub fn is_valid_progress(progress: i32) -> bool {
        (0..=MAX_PROGRESS).contains(&progress)
    }
}
