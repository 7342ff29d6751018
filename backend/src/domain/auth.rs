//! Session records backing bearer-token authentication.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One active login: proof that a token is still valid for use.
///
/// Created on login and deleted on logout (both outside this service); the
/// auth gate only ever reads these records. A cryptographically valid token
/// with no matching record is treated as logged out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub user_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
}
