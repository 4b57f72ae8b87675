use async_trait::async_trait;

use crate::domain::{Course, CourseId, UserId};

use super::RepositoryError;

/// Courses are always addressed through their owner; a course owned by
/// someone else behaves exactly like a missing one.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, owner: UserId, name: &str) -> Result<Course, RepositoryError>;

    /// Newest first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Course>, RepositoryError>;

    async fn get_for_owner(
        &self,
        id: CourseId,
        owner: UserId,
    ) -> Result<Option<Course>, RepositoryError>;

    async fn rename(
        &self,
        id: CourseId,
        owner: UserId,
        name: &str,
    ) -> Result<Option<Course>, RepositoryError>;

    /// Deletes the course and, by cascade, its topics. Returns whether a row was removed.
    async fn delete(&self, id: CourseId, owner: UserId) -> Result<bool, RepositoryError>;
}
