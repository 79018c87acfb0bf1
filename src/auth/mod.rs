use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token payload: `{ user: { id }, iat, exp }`
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: ClaimsUser,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimsUser {
    pub id: String,
}

impl Claims {
    pub fn new(user_id: Uuid, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            user: ClaimsUser { id: user_id.to_string() },
            iat: now.timestamp(),
            exp,
        }
    }
}

/// The caller as resolved by the identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT secret not configured")]
    InvalidSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token user id is not a valid identifier: {0}")]
    InvalidSubject(String),
}

/// Resolves a bearer token to a caller identity
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<Identity, AuthError>;
}

/// HS256 JWT identity provider
#[derive(Clone)]
pub struct JwtIdentity {
    secret: String,
}

impl JwtIdentity {
    pub fn new(secret: impl Into<String>) -> Result<Self, AuthError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret);
        }
        Ok(Self { secret })
    }
}

impl IdentityResolver for JwtIdentity {
    fn resolve(&self, token: &str) -> Result<Identity, AuthError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        // Normalize the claim to the same typed id the store keeps
        let user_id = Uuid::parse_str(&token_data.claims.user.id)
            .map_err(|_| AuthError::InvalidSubject(token_data.claims.user.id.clone()))?;

        Ok(Identity { user_id })
    }
}

pub fn issue_token(secret: &str, user_id: Uuid, expiry_hours: u64) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &Claims::new(user_id, expiry_hours), &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}
