//! Server configuration from the environment.

use std::env;
use std::path::PathBuf;

use tracing::warn;
use uuid::Uuid;

/// Configuration failures surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `JWT_SECRET` must be set in release builds.
    #[error("JWT_SECRET is not set")]
    MissingSecret,
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind, from `BIND_ADDR`.
    pub bind_addr: String,
    /// Photo storage root, from `UPLOAD_DIR`.
    pub upload_dir: PathBuf,
    /// Shared HS256 secret, from `JWT_SECRET`.
    pub jwt_secret: String,
}

impl ServerConfig {
    /// Read the configuration from environment variables.
    ///
    /// `BIND_ADDR` defaults to `0.0.0.0:8080` and `UPLOAD_DIR` to
    /// `./uploads`. `JWT_SECRET` has no safe default: release builds refuse
    /// to start without it, debug builds fall back to an ephemeral secret so
    /// local runs work out of the box (tokens die with the process).
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./uploads"));
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if cfg!(debug_assertions) => {
                warn!("JWT_SECRET is not set; using an ephemeral secret");
                Uuid::new_v4().to_string()
            }
            _ => return Err(ConfigError::MissingSecret),
        };
        Ok(Self {
            bind_addr,
            upload_dir,
            jwt_secret,
        })
    }
}
