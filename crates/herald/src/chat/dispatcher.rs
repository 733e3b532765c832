//! Message Dispatcher
//!
//! Turns one raw inbound message into zero or one outbound reply.
//! Handler failures are contained here; a dispatch never fails into its
//! caller. Each inbound message is dispatched independently and may run
//! concurrently with other dispatches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{error, trace};

use crate::chat::registry::{CommandContext, CommandRegistry};
use crate::ports::{ChatChannel, ChatUser};

/// How long a handler may run before the typing indicator shows.
const TYPING_DELAY: Duration = Duration::from_millis(100);

/// Fixed reply when a handler fails.
const INTERNAL_ERROR_REPLY: &str = "Internal Error";

/// Routes inbound messages to registered command handlers.
pub struct Dispatcher {
    prefix: String,
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    pub fn new(prefix: impl Into<String>, registry: Arc<CommandRegistry>) -> Self {
        Self {
            prefix: prefix.into(),
            registry,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Dispatch one inbound message. Messages without the prefix and
    /// unknown command names are ignored without a reply.
    pub async fn dispatch(&self, channel: Arc<dyn ChatChannel>, sender: ChatUser, content: &str) {
        let Some((name, argument)) = parse(&self.prefix, content) else {
            return;
        };
        let Some(command) = self.registry.lookup(name) else {
            return;
        };
        trace!(command = %name, argument = ?argument, user = %sender.display_name, "dispatching command");

        // Show the typing indicator only if the reply takes a while.
        // The signal is best effort; its own failures are swallowed.
        let typing_started = Arc::new(AtomicBool::new(false));
        let typing = tokio::spawn({
            let channel = Arc::clone(&channel);
            let started = Arc::clone(&typing_started);
            async move {
                tokio::time::sleep(TYPING_DELAY).await;
                if channel.start_typing().await.is_ok() {
                    started.store(true, Ordering::SeqCst);
                }
            }
        });

        let ctx = CommandContext {
            channel: Arc::clone(&channel),
            sender,
            registry: Arc::clone(&self.registry),
            prefix: self.prefix.clone(),
        };
        let result = (command.handler)(ctx, argument).await;

        // The timer must not fire after the handler has settled.
        typing.abort();

        match result {
            Ok(reply) if !reply.is_empty() => {
                if let Err(e) = channel.send(&reply).await {
                    error!(command = %name, error = %e, "failed to send reply");
                }
            }
            Ok(_) => {
                // Nothing will be sent, so no message stops the
                // indicator implicitly.
                if typing_started.load(Ordering::SeqCst) {
                    let _ = channel.stop_typing().await;
                }
            }
            Err(e) => {
                error!(command = %name, error = %e, "command handler failed");
                if let Err(e) = channel.send(INTERNAL_ERROR_REPLY).await {
                    error!(command = %name, error = %e, "failed to send error reply");
                }
            }
        }
    }
}

/// Split `content` into command name and trimmed argument.
///
/// `None` when the prefix is missing. The argument is absent when
/// nothing but whitespace follows the name.
fn parse<'a>(prefix: &str, content: &'a str) -> Option<(&'a str, Option<String>)> {
    let rest = content.strip_prefix(prefix)?;
    match rest.split_once(' ') {
        Some((name, tail)) => {
            let tail = tail.trim();
            let argument = (!tail.is_empty()).then(|| tail.to_string());
            Some((name, argument))
        }
        None => Some((rest, None)),
    }
}
