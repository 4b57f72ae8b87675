use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `ConstraintViolation` when the username is taken.
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, RepositoryError>;

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
}
