use std::sync::Arc;

use crate::application::ports::{
    PasswordHashError, PasswordHasher, RepositoryError, TokenError, TokenService, UserRepository,
};
use crate::domain::{TokenPair, TokenType, User};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            password_hasher,
            tokens,
        }
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = self.password_hasher.hash(password)?;

        match self.users.create(username, &password_hash).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "User registered");
                Ok(user)
            }
            Err(RepositoryError::ConstraintViolation(_)) => Err(AuthError::UsernameTaken),
            Err(e) => Err(e.into()),
        }
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<TokenPair, AuthError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash)? {
            tracing::warn!(user_id = %user.id, "Sign-in with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(TokenPair {
            access: self.tokens.issue(&user, TokenType::Access)?,
            refresh: self.tokens.issue(&user, TokenType::Refresh)?,
        })
    }

    /// Exchanges a refresh token for a new access token.
    #[tracing::instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let claims = self
            .tokens
            .verify(refresh_token, TokenType::Refresh)
            .map_err(AuthError::Token)?;

        let user = self
            .users
            .get_by_id(claims.user_id)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        Ok(self.tokens.issue(&user, TokenType::Access)?)
    }

    /// Resolves the user behind an access token.
    pub async fn authenticate(&self, access_token: &str) -> Result<User, AuthError> {
        let claims = self
            .tokens
            .verify(access_token, TokenType::Access)
            .map_err(AuthError::Token)?;

        self.users
            .get_by_id(claims.user_id)
            .await?
            .ok_or(AuthError::UnknownUser)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Username already exists")]
    UsernameTaken,
    #[error("No active account found with the given credentials")]
    InvalidCredentials,
    #[error("token: {0}")]
    Token(#[from] TokenError),
    #[error("user no longer exists")]
    UnknownUser,
    #[error("password hashing: {0}")]
    PasswordHash(#[from] PasswordHashError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
