//! Chat Gateway Port
//!
//! Abstracts the channel an inbound message arrived on: sending a reply
//! and signalling the typing indicator. Platform integrations
//! (e.g. herald-integration-discord) implement this.

use async_trait::async_trait;

use crate::domain::{DomainError, Platform};

/// Outbound operations on the channel a message arrived from.
#[async_trait]
pub trait ChatChannel: Send + Sync {
    /// Send a text reply to the channel.
    async fn send(&self, content: &str) -> Result<(), DomainError>;

    /// Show the "bot is typing" indicator.
    async fn start_typing(&self) -> Result<(), DomainError>;

    /// Clear the typing indicator before it expires on its own.
    async fn stop_typing(&self) -> Result<(), DomainError>;
}

/// The author of an inbound message.
#[derive(Debug, Clone)]
pub struct ChatUser {
    pub platform: Platform,
    pub platform_id: String,
    pub display_name: String,
}
