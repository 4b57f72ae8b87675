use chrono::{DateTime, Utc};

use super::{CourseId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub owner_id: UserId,
    pub owner_username: String,
    pub created_at: DateTime<Utc>,
}
