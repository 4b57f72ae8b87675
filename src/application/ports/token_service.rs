use crate::domain::{TokenClaims, TokenType, User};

pub trait TokenService: Send + Sync {
    fn issue(&self, user: &User, token_type: TokenType) -> Result<String, TokenError>;

    /// Verifies signature and expiry, and that the token is of the expected type.
    fn verify(&self, token: &str, expected: TokenType) -> Result<TokenClaims, TokenError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("expected {expected} token, got {actual}")]
    WrongType {
        expected: TokenType,
        actual: TokenType,
    },
    #[error("token encoding failed: {0}")]
    EncodingFailed(String),
}
