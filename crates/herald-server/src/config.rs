//! Server configuration from the environment

use std::env;

use anyhow::{Context, Result};

const DEFAULT_COMMAND_PREFIX: &str = "!";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub discord_token: String,
    /// Leading string that marks a message as a command invocation
    pub command_prefix: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            discord_token: env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?,
            command_prefix: env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
        })
    }
}
