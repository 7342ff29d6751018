use std::io::{Error, ErrorKind};

use tracing_subscriber::EnvFilter;

use backend::server::{self, ServerConfig};

fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_telemetry();
    let config =
        ServerConfig::from_env().map_err(|err| Error::new(ErrorKind::InvalidInput, err))?;
    server::run(config).await
}
