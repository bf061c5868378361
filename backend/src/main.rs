//! Backend entry-point: wires the ride-hailing REST endpoints.

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kerbside::config::ServiceSettings;
use ortho_config::OrthoConfig;
use kerbside::inbound::http::health::HealthState;
use kerbside::outbound::persistence::DocumentStore;
use kerbside::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load()
        .map_err(|error| std::io::Error::other(format!("configuration load failed: {error}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|error| std::io::Error::other(format!("invalid bind address: {error}")))?;

    let mut config = ServerConfig::new(bind_addr);
    if settings.in_memory {
        warn!("serving from the in-memory store; data will not survive a restart");
    } else {
        let store = DocumentStore::connect(
            settings.store_connection_uri(),
            settings.store_database(),
        )
        .await
        .map_err(|error| {
            std::io::Error::other(format!("document store connection failed: {error}"))
        })?;
        info!(database = settings.store_database(), "document store attached");
        config = config.with_store(store);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
