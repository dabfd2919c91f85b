//! Sign-in credentials and the expiry check for the session token they buy.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Deserialize)]
struct TokenClaims {
    exp: f64,
}

/// Bearer token returned by the sign-in endpoint (a JWT).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expiry instant read from the `exp` claim, if the token is well formed.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let payload = self.0.split('.').nth(1)?;
        let bytes = decode_token_segment(payload)?;
        let claims: TokenClaims = match serde_json::from_slice(&bytes) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(error = %err, "session token payload is not valid claims json");
                return None;
            }
        };
        if !claims.exp.is_finite() {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis((claims.exp * 1000.0) as i64)
    }

    /// `true` while `now` is strictly before the token expiry.
    ///
    /// Malformed tokens are never valid.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires_at| now < expires_at)
    }
}

/// Sign-in credentials, checked for blanks before any request is made.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    password: String,
}

impl Credentials {
    /// `identifier` is an email address or a login name.
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> ChartResult<Self> {
        let identifier = identifier.into();
        let password = password.into();
        if identifier.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "Email/Username is required".to_owned(),
            ));
        }
        if password.trim().is_empty() {
            return Err(ChartError::InvalidData("Password is required".to_owned()));
        }
        Ok(Self {
            identifier,
            password,
        })
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"***")
            .finish()
    }
}

/// Decodes a JWT segment: unpadded base64url first, then padded or
/// standard-alphabet input.
fn decode_token_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .or_else(|_| STANDARD.decode(segment))
        .map_err(|err| debug!(error = %err, "session token payload is not base64"))
        .ok()
}
