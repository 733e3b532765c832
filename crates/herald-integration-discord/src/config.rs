//! Discord configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Discord gateway connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Presence text shown under the bot's name; derived from the
    /// command prefix when unset
    pub status_message: Option<String>,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            status_message: None,
        }
    }

    /// Set the presence text
    pub fn with_status_message(mut self, message: impl Into<String>) -> Self {
        self.status_message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DiscordConfig::new("test-token").with_status_message("hello");
        assert_eq!(config.token, "test-token");
        assert_eq!(config.status_message.as_deref(), Some("hello"));
    }
}
