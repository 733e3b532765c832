//! Account linking and credential commands
//!
//! The link flow spans two platforms: `link <username>` on the first
//! platform hands out a one-time token, `confirm <token>` sent as
//! `<username>` on the second platform merges the two records.

use std::sync::Arc;

use herald::chat::ChatCommand;
use herald::ports::UserRepository;

use crate::application::IdentityService;

/// `link <username>` - start linking the sender's account to the same
/// person's account on another platform.
pub fn link<R: UserRepository + 'static>(identity: Arc<IdentityService<R>>) -> ChatCommand {
    ChatCommand {
        name: "link".to_string(),
        short_description: "Link this account to your account on another platform (link [username])"
            .to_string(),
        usage: "usage: link [username]\n  link [username] - get a one-time token; send 'confirm <token>' as [username] on the other platform to finish linking"
            .to_string(),
        handler: Arc::new(move |ctx, argument| {
            let identity = Arc::clone(&identity);
            Box::pin(async move {
                let Some(username) = argument else {
                    return Ok(
                        "Please give the username to link, e.g. 'link yourname'".to_string()
                    );
                };
                let user = identity
                    .ensure_user(ctx.sender.platform, &ctx.sender.platform_id)
                    .await?;
                let token = identity.issue_link_token(user, &username).await?;
                Ok(format!(
                    "Link started! As {} on the other platform, send: {}confirm {}",
                    username, ctx.prefix, token
                ))
            })
        }),
    }
}

/// `confirm <token>` - finish a link started on the other platform. The
/// sender's display name must match the username named in the request.
pub fn confirm<R: UserRepository + 'static>(identity: Arc<IdentityService<R>>) -> ChatCommand {
    ChatCommand {
        name: "confirm".to_string(),
        short_description: "Finish linking accounts with a token from 'link'".to_string(),
        usage: "usage: confirm [token]\n  confirm [token] - complete the account link requested on the other platform"
            .to_string(),
        handler: Arc::new(move |ctx, argument| {
            let identity = Arc::clone(&identity);
            Box::pin(async move {
                let Some(token) = argument else {
                    return Ok("Please give the token from the 'link' command".to_string());
                };
                let Some(pending) = identity
                    .find_by_link_token(&ctx.sender.display_name, &token)
                    .await?
                else {
                    return Ok("No pending link matches that token".to_string());
                };
                let own = identity
                    .ensure_user(ctx.sender.platform, &ctx.sender.platform_id)
                    .await?;
                if pending.id == own.id {
                    return Ok(
                        "That token was issued to this account; send it from the other platform"
                            .to_string(),
                    );
                }
                identity.link_accounts(&pending, &own).await?;
                Ok("Accounts linked!".to_string())
            })
        }),
    }
}

/// `apikey` - rotate and return the sender's access key.
pub fn apikey<R: UserRepository + 'static>(identity: Arc<IdentityService<R>>) -> ChatCommand {
    ChatCommand {
        name: "apikey".to_string(),
        short_description: "Generate a new api key for your account".to_string(),
        usage: "usage: apikey\n  apikey - replace your api key; the old key stops working immediately"
            .to_string(),
        handler: Arc::new(move |ctx, _argument| {
            let identity = Arc::clone(&identity);
            Box::pin(async move {
                let user = identity
                    .ensure_user(ctx.sender.platform, &ctx.sender.platform_id)
                    .await?;
                let key = identity.rotate_api_key(user).await?;
                Ok(format!("Your new api key: {}", key))
            })
        }),
    }
}
