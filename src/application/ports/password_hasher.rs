pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// `Ok(false)` for a wrong password, `Err` only when the stored hash is unusable.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, PasswordHashError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PasswordHashError {
    #[error("hashing failed: {0}")]
    HashingFailed(String),
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}
