//! Serenity gateway wiring
//!
//! Owns the gateway client and forwards inbound messages to the
//! dispatcher. Dispatch outcomes never propagate back into the gateway
//! loop; the dispatcher contains them.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::client::{Client, Context, EventHandler};
use serenity::gateway::ActivityData;
use serenity::http::RatelimitInfo;
use serenity::model::channel::Message;
use serenity::model::gateway::{GatewayIntents, Ready};
use tracing::{info, warn};

use herald::chat::Dispatcher;
use herald::domain::Platform;
use herald::ports::ChatUser;

use crate::channel::DiscordChannel;
use crate::config::DiscordConfig;

/// Discord gateway integration driving the dispatcher
pub struct DiscordIntegration {
    config: DiscordConfig,
    dispatcher: Arc<Dispatcher>,
}

struct Handler {
    dispatcher: Arc<Dispatcher>,
    status_message: String,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            "Discord gateway ready. Invite: https://discord.com/oauth2/authorize?client_id={}&scope=bot&permissions=8",
            ready.user.id
        );
        ctx.set_activity(Some(ActivityData::playing(self.status_message.clone())));
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let channel = Arc::new(DiscordChannel::new(ctx.http.clone(), msg.channel_id));
        let sender = ChatUser {
            platform: Platform::Discord,
            platform_id: msg.author.id.to_string(),
            display_name: msg.author.name.clone(),
        };
        self.dispatcher.dispatch(channel, sender, &msg.content).await;
    }

    async fn ratelimit(&self, data: RatelimitInfo) {
        warn!(path = %data.path, timeout = ?data.timeout, "Discord rate limit hit");
    }
}

impl DiscordIntegration {
    pub fn new(config: DiscordConfig, dispatcher: Arc<Dispatcher>) -> Self {
        Self { config, dispatcher }
    }

    /// Connect to the gateway and block until it shuts down.
    pub async fn run(self) -> Result<(), serenity::Error> {
        let status_message = self
            .config
            .status_message
            .clone()
            .unwrap_or_else(|| format!("{}help for commands", self.dispatcher.prefix()));
        let intents = GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;
        let mut client = Client::builder(&self.config.token, intents)
            .event_handler(Handler {
                dispatcher: self.dispatcher,
                status_message,
            })
            .await?;
        client.start().await
    }
}
