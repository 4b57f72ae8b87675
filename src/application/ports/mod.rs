mod course_repository;
mod document_fetcher;
mod file_loader;
mod file_store;
mod llm_client;
mod password_hasher;
mod repository_error;
mod token_service;
mod topic_repository;
mod user_repository;

pub use course_repository::CourseRepository;
pub use document_fetcher::{DocumentFetcher, FetchError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use file_store::{FileStore, FileStoreError};
pub use llm_client::{GenerationRequest, LlmClient, LlmClientError};
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use repository_error::RepositoryError;
pub use token_service::{TokenError, TokenService};
pub use topic_repository::TopicRepository;
pub use user_repository::UserRepository;
