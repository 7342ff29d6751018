//! Stateless bearer-token verification port.

use uuid::Uuid;

/// Verifies a bearer token's structure, signature, expiry and embedded
/// subject identifier.
///
/// Implementations are pure functions of the token string and the current
/// time: no I/O, no shared state. Malformed input is reported through the
/// return value, never a panic or error, which keeps the auth gate's check
/// ordering straightforward. Designed as an injected capability so tests can
/// substitute it without a live signing key.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    /// True when the token is well-formed and correctly signed. When
    /// `require_not_expired` is set, an expired token also fails.
    fn validate(&self, token: &str, require_not_expired: bool) -> bool;

    /// The subject identifier embedded in the token, if it can be extracted.
    fn subject_id(&self, token: &str) -> Option<Uuid>;
}
