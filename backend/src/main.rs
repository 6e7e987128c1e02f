//! Backend entry-point: loads settings, prepares storage and serves the API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cost_manager::inbound::http::health::HealthState;
use cost_manager::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use cost_manager::server::{ServerConfig, create_server};
use cost_manager::settings::AppSettings;

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let mut health_state = HealthState::new();
    let mut config = ServerConfig::new(bind_addr).with_demo_user(settings.seed_demo_user());

    if let Some(database_url) = settings.database_url() {
        run_pending_migrations(database_url)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
        )
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
        health_state = health_state.with_database(pool.clone());
        config = config.with_db_pool(pool);
        info!("using PostgreSQL storage");
    } else {
        info!("no database configured, using in-memory storage");
    }

    let server = create_server(web::Data::new(health_state), config).await?;
    info!(%bind_addr, "cost manager listening");
    server.await
}
