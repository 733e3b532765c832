//! Quote commands

use std::sync::Arc;

use chrono::Utc;

use herald::chat::ChatCommand;
use herald::domain::Quote;
use herald::ports::{QuoteRepository, UserRepository};

use crate::application::IdentityService;

/// `quote [filter]` - a random quote, optionally filtered.
pub fn quote<Q: QuoteRepository + 'static>(quotes: Arc<Q>) -> ChatCommand {
    ChatCommand {
        name: "quote".to_string(),
        short_description: "Get a random quote!".to_string(),
        usage: "usage: quote [filter]\n  quote - get a random quote!\n  quote [filter] - get a random quote that contains, or is from [filter]"
            .to_string(),
        handler: Arc::new(move |_ctx, argument| {
            let quotes = Arc::clone(&quotes);
            Box::pin(async move {
                match quotes.random(argument.as_deref()).await? {
                    Some(quote) => Ok(quote.display_line()),
                    None => Ok(match argument {
                        Some(filter) => {
                            format!("No quotes found containing, or from '{}'!", filter)
                        }
                        None => "No quotes saved yet!".to_string(),
                    }),
                }
            })
        }),
    }
}

/// `addquote <text>` - save a quote; admins only.
pub fn addquote<R, Q>(identity: Arc<IdentityService<R>>, quotes: Arc<Q>) -> ChatCommand
where
    R: UserRepository + 'static,
    Q: QuoteRepository + 'static,
{
    ChatCommand {
        name: "addquote".to_string(),
        short_description: "Save a quote (admins only)".to_string(),
        usage: "usage: addquote [text]\n  addquote [text] - save [text] as a quote attributed to you, dated today"
            .to_string(),
        handler: Arc::new(move |ctx, argument| {
            let identity = Arc::clone(&identity);
            let quotes = Arc::clone(&quotes);
            Box::pin(async move {
                let Some(text) = argument else {
                    return Ok("Please give the quote text".to_string());
                };
                let user = identity
                    .ensure_user(ctx.sender.platform, &ctx.sender.platform_id)
                    .await?;
                if !user.is_admin() {
                    return Ok("Only admins can save quotes".to_string());
                }
                let quote = Quote::new(
                    text,
                    ctx.sender.display_name.clone(),
                    Some(Utc::now().date_naive()),
                );
                quotes.add(&quote).await?;
                Ok("Quote saved!".to_string())
            })
        }),
    }
}
