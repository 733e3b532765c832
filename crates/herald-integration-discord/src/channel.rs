//! ChatChannel implementation over the Discord HTTP API

use std::sync::Arc;

use async_trait::async_trait;
use serenity::http::{Http, Typing};
use serenity::model::id::ChannelId;
use tokio::sync::Mutex;
use tracing::debug;

use herald::domain::DomainError;
use herald::ports::ChatChannel;

/// One Discord channel as the dispatcher sees it
pub struct DiscordChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
    /// Serenity keeps the indicator alive by re-broadcasting until the
    /// guard is stopped or dropped.
    typing: Mutex<Option<Typing>>,
}

impl DiscordChannel {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self {
            http,
            channel_id,
            typing: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ChatChannel for DiscordChannel {
    async fn send(&self, content: &str) -> Result<(), DomainError> {
        debug!(channel_id = %self.channel_id, content_len = %content.len(), "Sending message to Discord");
        self.channel_id
            .say(&self.http, content)
            .await
            .map_err(|e| DomainError::Gateway(format!("Discord API error: {}", e)))?;
        Ok(())
    }

    async fn start_typing(&self) -> Result<(), DomainError> {
        let guard = self.channel_id.start_typing(&self.http);
        *self.typing.lock().await = Some(guard);
        Ok(())
    }

    async fn stop_typing(&self) -> Result<(), DomainError> {
        if let Some(typing) = self.typing.lock().await.take() {
            typing.stop();
        }
        Ok(())
    }
}
