//! Accounts backend entry point: loads settings, picks the account store,
//! and serves the REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use accounts_backend::ServerSettings;
use accounts_backend::inbound::http::health::HealthState;
use accounts_backend::outbound::persistence::{DbPool, run_pending_migrations_async};
use server::{ServerConfig, create_server, drain_on, shutdown_signal};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn build_config(settings: &ServerSettings) -> io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr()?);

    let (Some(database_url), Some(pool_config)) =
        (settings.database_url.clone(), settings.pool_config())
    else {
        return Ok(config);
    };

    if settings.run_migrations {
        let applied = run_pending_migrations_async(database_url)
            .await
            .map_err(|err| io::Error::other(format!("database migration failed: {err}")))?;
        info!(applied, "database migrations complete");
    }

    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| io::Error::other(format!("database pool setup failed: {err}")))?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load configuration: {err}")))?;
    let config = build_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let drain = actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    let result = server.await;
    drain.abort();
    result
}
