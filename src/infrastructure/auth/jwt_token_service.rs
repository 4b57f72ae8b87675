use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{TokenError, TokenService};
use crate::domain::{TokenClaims, TokenType, User, UserId};
use crate::presentation::config::AuthSettings;

/// HS256 tokens. Access and refresh tokens share the key and differ in
/// `token_type` and lifetime.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: String,
    username: String,
    token_type: String,
    iat: i64,
    exp: i64,
}

impl JwtTokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(
            &settings.jwt_secret,
            Duration::seconds(settings.access_token_ttl_secs as i64),
            Duration::seconds(settings.refresh_token_ttl_secs as i64),
        )
    }

    fn ttl(&self, token_type: TokenType) -> Duration {
        match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User, token_type: TokenType) -> Result<String, TokenError> {
        let issued_at = Utc::now();
        let claims = JwtClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            token_type: token_type.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl(token_type)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    fn verify(&self, token: &str, expected: TokenType) -> Result<TokenClaims, TokenError> {
        let data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            },
        )?;
        let claims = data.claims;

        let token_type: TokenType = claims.token_type.parse().map_err(TokenError::Invalid)?;
        if token_type != expected {
            return Err(TokenError::WrongType {
                expected,
                actual: token_type,
            });
        }

        let user_id = claims
            .sub
            .parse::<i64>()
            .map(UserId::new)
            .map_err(|_| TokenError::Invalid(format!("malformed subject: {}", claims.sub)))?;

        Ok(TokenClaims {
            user_id,
            username: claims.username,
            token_type,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
        })
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>, TokenError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| TokenError::Invalid(format!("timestamp out of range: {seconds}")))
}
