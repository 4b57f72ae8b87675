use chrono::{DateTime, Utc};

use super::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// PHC-formatted password hash.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
