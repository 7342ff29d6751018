//! Token verification adapters.

mod jwt;

pub use self::jwt::{issue_token, JwtTokenVerifier};
