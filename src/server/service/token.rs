//! Access and refresh token handling.
//!
//! Access tokens are HS256 JWTs carrying the user id and the role the user had at
//! login. Refresh tokens are opaque random strings persisted on the user row and
//! rotated on every use.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config,
    error::{auth::AuthError, internal::InternalError},
    model::actor::Role,
};

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Id of the authenticated user
    pub sub: i32,
    /// Rank name at the time the token was issued
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Freshly generated refresh token and the moment it stops being accepted.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                access_ttl: Duration::seconds(access_ttl_secs),
                refresh_ttl: Duration::seconds(refresh_ttl_secs),
            }),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            config.access_token_ttl_secs,
            config.refresh_token_ttl_secs,
        )
    }

    /// Signs an access token for the user.
    ///
    /// # Arguments
    /// - `user_id` - Subject of the token
    /// - `role` - Role of the user at issue time
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(InternalError::TokenEncoding)` - Signing failed
    pub fn issue(&self, user_id: i32, role: Role) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.keys.access_ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(InternalError::TokenEncoding)
    }

    /// Verifies the signature and expiry of an access token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered or expired token
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }

    /// Generates a new random refresh token valid for the configured lifetime.
    pub fn refresh_token(&self) -> RefreshToken {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes);

        RefreshToken {
            token: URL_SAFE_NO_PAD.encode(bytes),
            expires_at: Utc::now() + self.keys.refresh_ttl,
        }
    }
}
