//! Session tokens.
//!
//! A session token is an HS256 JWT issued on login. It carries the identity
//! and role of the user and expires after the configured lifetime (8 hours
//! by default). There is no revocation list: a token is valid until it
//! expires.
//!
//! Claim | Sample | Description
//! ---|---|---
//! `id_usuario` | `1` | User id
//! `nombre` | `Ana Pérez` | User name
//! `email` | `ana@example.com` | User email
//! `rol` | `tecnico` | `tecnico` or `coordinador`
//! `iat` | `1709287200` | Issued at, seconds since the Unix Epoch
//! `exp` | `1709316000` | Expiration, seconds since the Unix Epoch
//!
//! Expiration is checked against an explicit `now`, which makes the expiry
//! window testable:
//!
//! ```rust
//! use std::time::Duration;
//!
//! use evidence_tracker::core::auth::session::{SessionCodec, SessionUser};
//! use evidence_tracker_primitives::{Role, UserId};
//!
//! let codec = SessionCodec::new("secret", Duration::from_secs(60));
//! let user = SessionUser {
//!     id: UserId(1),
//!     name: "Ana Pérez".to_string(),
//!     email: "ana@example.com".to_string(),
//!     role: Role::Tecnico,
//! };
//!
//! let issued_at = Duration::from_secs(1_700_000_000);
//! let token = codec.encode_at(&user, issued_at).unwrap();
//!
//! assert!(codec.decode_at(&token, issued_at + Duration::from_secs(59)).is_ok());
//! assert!(codec.decode_at(&token, issued_at + Duration::from_secs(60)).is_err());
//! ```
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use evidence_tracker_located_error::{DynError, LocatedError};
use evidence_tracker_primitives::{DurationSinceUnixEpoch, Role, UserId};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The authenticated user, as carried by the session token.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct SessionUser {
    #[serde(rename = "id_usuario")]
    pub id: UserId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "rol")]
    pub role: Role,
}

/// All the claims of a session token.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Claims {
    #[serde(flatten)]
    pub user: SessionUser,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Unable to sign the session token: {source}")]
    UnableToSign {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
    #[error("Invalid session token: {source}")]
    InvalidToken {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
    #[error("Expired session token, {location}")]
    ExpiredToken { location: &'static Location<'static> },
}

/// Issues and verifies session tokens.
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl SessionCodec {
    #[must_use]
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiration is checked in `decode_at`, against the given time.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime,
        }
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issues a token for the user, valid from now.
    ///
    /// # Errors
    ///
    /// Will return `Error::UnableToSign` if the token cannot be encoded.
    pub fn encode(&self, user: &SessionUser) -> Result<String, Error> {
        self.encode_at(user, now())
    }

    /// Issues a token for the user, valid from `now`.
    ///
    /// # Errors
    ///
    /// Will return `Error::UnableToSign` if the token cannot be encoded.
    pub fn encode_at(&self, user: &SessionUser, now: DurationSinceUnixEpoch) -> Result<String, Error> {
        let claims = Claims {
            user: user.clone(),
            iat: now.as_secs(),
            exp: now.saturating_add(self.lifetime).as_secs(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|err| {
            Error::UnableToSign {
                source: (Arc::new(err) as DynError).into(),
            }
        })
    }

    /// Verifies a token at the current time.
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidToken` if the signature or the structure is
    /// not valid, and `Error::ExpiredToken` if the token has expired.
    pub fn decode(&self, token: &str) -> Result<Claims, Error> {
        self.decode_at(token, now())
    }

    /// Verifies a token at `now`. A token is expired from the second of its
    /// `exp` claim on.
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidToken` if the signature or the structure is
    /// not valid, and `Error::ExpiredToken` if the token has expired.
    pub fn decode_at(&self, token: &str, now: DurationSinceUnixEpoch) -> Result<Claims, Error> {
        let token_data =
            jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|err| Error::InvalidToken {
                source: (Arc::new(err) as DynError).into(),
            })?;

        if token_data.claims.exp <= now.as_secs() {
            return Err(Error::ExpiredToken {
                location: Location::caller(),
            });
        }

        Ok(token_data.claims)
    }
}

/// Current time as a duration since the Unix Epoch.
#[must_use]
pub fn now() -> DurationSinceUnixEpoch {
    let seconds = chrono::Utc::now().timestamp();

    DurationSinceUnixEpoch::from_secs(u64::try_from(seconds).unwrap_or_default())
}
