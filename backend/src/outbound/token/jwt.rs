//! HS256 JWT implementation of [`TokenVerifier`].
//!
//! Claims are the conventional trio: `sub` (the user id), `iat`, and `exp`.
//! Expiry checking is toggled per call so the gate can decide whether a
//! stale-but-genuine token is acceptable; decoding uses the library's
//! default leeway of 60 seconds.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::TokenVerifier;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Verifier holding the shared HS256 secret.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
}

impl JwtTokenVerifier {
    /// Build a verifier from the shared secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    fn decode_claims(&self, token: &str, require_not_expired: bool) -> Option<Claims> {
        let mut validation = Validation::default();
        validation.validate_exp = require_not_expired;
        if !require_not_expired {
            // The default validation insists an `exp` claim exists even when
            // expiry is not being checked.
            validation.required_spec_claims.clear();
        }
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .ok()
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn validate(&self, token: &str, require_not_expired: bool) -> bool {
        self.decode_claims(token, require_not_expired).is_some()
    }

    fn subject_id(&self, token: &str) -> Option<Uuid> {
        let claims = self.decode_claims(token, false)?;
        Uuid::parse_str(&claims.sub).ok()
    }
}

/// Sign a token for `subject`, valid for `ttl` from now.
///
/// The service never issues tokens for clients (login lives elsewhere); this
/// exists for test fixtures and local bootstrap sessions.
pub fn issue_token(
    secret: &[u8],
    subject: Uuid,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: subject.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
}
