//! Discord Integration for Herald
//!
//! Bridges the serenity gateway to the platform-generic dispatcher:
//! inbound messages become dispatches, replies and typing signals go
//! back out through the `ChatChannel` port.
//!
//! # Usage
//!
//! ```rust,ignore
//! use herald_integration_discord::{DiscordConfig, DiscordIntegration};
//!
//! let config = DiscordConfig::new("your-bot-token");
//! DiscordIntegration::new(config, dispatcher).run().await?;
//! ```

mod channel;
mod config;
mod integration;

pub use channel::DiscordChannel;
pub use config::DiscordConfig;
pub use integration::DiscordIntegration;
