pub mod hash;
pub mod id;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub use hash::{HashError, HashManager};
pub use id::IdGenerator;

/// Identity carried inside every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    name: String,
    exp: i64,
    iat: i64,
}

impl Claims {
    fn new(payload: &TokenPayload, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            id: payload.id.clone(),
            name: payload.name.clone(),
            exp,
            iat: now.timestamp(),
        }
    }
}

impl From<Claims> for TokenPayload {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            name: claims.name,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid JWT secret")]
    InvalidSecret,
}

/// Issues and verifies HS256 tokens for a single shared secret.
#[derive(Clone)]
pub struct Authenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: u64,
}

impl Authenticator {
    pub fn new(secret: &str, expiry_hours: u64) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        })
    }

    pub fn generate_token(&self, payload: &TokenPayload) -> Result<String, JwtError> {
        let claims = Claims::new(payload, self.expiry_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))
    }

    /// Decode and verify a token. Bad signatures, malformed input and expired
    /// tokens all yield `None`.
    pub fn get_token_payload(&self, token: &str) -> Option<TokenPayload> {
        match decode::<Claims>(token, &self.decoding_key, &Validation::default()) {
            Ok(data) => Some(data.claims.into()),
            Err(e) => {
                tracing::debug!("Rejected token: {}", e);
                None
            }
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("expiry_hours", &self.expiry_hours)
            .finish_non_exhaustive()
    }
}
