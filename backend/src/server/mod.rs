//! HTTP server assembly: adapters wired to ports, middleware, and routes.

use std::sync::Arc;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::domain::ports::{InventoryService, SessionStore, TokenVerifier, UserDirectory};
use crate::domain::InventoryServiceImpl;
use crate::inbound::http::{configure_api, configure_extractors, HttpState};
use crate::middleware::{AuthGate, RequestLog};
use crate::outbound::persistence::{
    InMemoryItemRepository, InMemorySessionStore, InMemoryUserDirectory,
};
use crate::outbound::storage::DiskFileStore;
use crate::outbound::token::JwtTokenVerifier;

mod config;

pub use self::config::{ConfigError, ServerConfig};

/// Run the server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.upload_dir)?;

    let items = Arc::new(InMemoryItemRepository::new());
    let files = Arc::new(DiskFileStore::new(config.upload_dir.clone()));
    let inventory: Arc<dyn InventoryService> = Arc::new(InventoryServiceImpl::new(items, files));

    let verifier: Arc<dyn TokenVerifier> =
        Arc::new(JwtTokenVerifier::new(config.jwt_secret.as_bytes()));
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let users: Arc<dyn UserDirectory> = Arc::new(InMemoryUserDirectory::new());

    let gate = AuthGate::new(verifier, sessions, users);
    let state = HttpState::new(inventory);
    let upload_dir = config.upload_dir.clone();

    info!(bind = %config.bind_addr, uploads = %upload_dir.display(), "starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_extractors)
            // The gate wraps the API; the log line wraps the gate so denied
            // requests are recorded too.
            .wrap(gate.clone())
            .wrap(RequestLog)
            .configure(configure_api)
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
