use async_trait::async_trait;

use crate::domain::{CourseId, StoragePath, Topic, TopicId, UserId};

use super::RepositoryError;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create(&self, course_id: CourseId, name: &str) -> Result<Topic, RepositoryError>;

    /// Newest first.
    async fn list_for_course(&self, course_id: CourseId) -> Result<Vec<Topic>, RepositoryError>;

    /// Looks the topic up through its course, so only the course owner sees it.
    async fn get_for_owner(
        &self,
        id: TopicId,
        owner: UserId,
    ) -> Result<Option<Topic>, RepositoryError>;

    async fn rename(&self, id: TopicId, name: &str) -> Result<(), RepositoryError>;

    async fn set_file_path(&self, id: TopicId, path: &StoragePath) -> Result<(), RepositoryError>;

    async fn set_progress(&self, id: TopicId, progress: i32) -> Result<(), RepositoryError>;

    async fn delete(&self, id: TopicId) -> Result<bool, RepositoryError>;
}
