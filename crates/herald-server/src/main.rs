//! Herald bot entry point: configuration, storage, command registry,
//! Discord gateway.

use std::sync::Arc;

use anyhow::Context as _;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use herald::chat::Dispatcher;
use herald_integration_discord::{DiscordConfig, DiscordIntegration};

mod adapters;
mod application;
mod commands;
mod config;
#[cfg(test)]
mod testing;

use adapters::{PgQuoteRepository, PgUserRepository};
use application::IdentityService;
use config::ServerConfig;

/// Identity service over the concrete Postgres repository
pub type AppIdentityService = IdentityService<PgUserRepository>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("failed to run database migrations")?;
    tracing::info!("database migrations completed");

    let identity: Arc<AppIdentityService> =
        Arc::new(IdentityService::new(Arc::new(PgUserRepository::new(
            pool.clone(),
        ))));
    let quotes = Arc::new(PgQuoteRepository::new(pool));

    // A duplicate command name is a startup bug; abort rather than run
    // with a partial registry.
    let registry = commands::build_registry(identity, quotes)
        .context("failed to build command registry")?;
    tracing::info!(commands = registry.len(), prefix = %config.command_prefix, "command registry ready");

    let dispatcher = Arc::new(Dispatcher::new(config.command_prefix, Arc::new(registry)));
    DiscordIntegration::new(DiscordConfig::new(config.discord_token), dispatcher)
        .run()
        .await
        .context("discord gateway terminated")?;

    Ok(())
}
