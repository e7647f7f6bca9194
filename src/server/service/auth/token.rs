//! Signed bearer tokens.
//!
//! Access and refresh tokens share one HS256 key and one claim layout; the `kind` claim
//! keeps a refresh token from being accepted where an access token is expected.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::user::User,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a decimal string.
    pub sub: String,
    /// Role at the time of issue.
    pub rol: String,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("Malformed subject '{}'", self.sub)))
    }
}

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

/// Issues and validates tokens. Cloning is cheap, keys are shared.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<TokenKeys>,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            keys: Arc::new(TokenKeys {
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

    pub fn issue_access(&self, user: &User) -> Result<String, AppError> {
        self.issue(user, TokenKind::Access, self.keys.access_ttl)
    }

    pub fn issue_refresh(&self, user: &User) -> Result<String, AppError> {
        self.issue(user, TokenKind::Refresh, self.keys.refresh_ttl)
    }

    /// Validates signature and expiry, then checks the token is of the expected kind.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, malformed or wrong kind
    pub fn decode(&self, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.kind != expected {
            return Err(AuthError::InvalidToken(format!(
                "Expected {:?} token, got {:?}",
                expected, data.claims.kind
            )));
        }

        Ok(data.claims)
    }

    fn issue(&self, user: &User, kind: TokenKind, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            rol: user.role.to_value(),
            kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.keys.encoding,
        )?)
    }
}
