//! Built-in `help` command
//!
//! The one command that introspects the registry: with no argument it
//! lists every command in registration order, with an argument it shows
//! that command's usage text.

use std::sync::Arc;

use crate::chat::registry::ChatCommand;

pub fn help_command() -> ChatCommand {
    ChatCommand {
        name: "help".to_string(),
        short_description: "Get list of commands or help for a specific command (help [cmd])"
            .to_string(),
        usage: "usage: help [cmd]\n  help - list all commands with their descriptions\n  help [cmd] - get the description and usage information for [cmd]"
            .to_string(),
        handler: Arc::new(|ctx, argument| {
            Box::pin(async move {
                let reply = match argument {
                    Some(name) => match ctx.registry.lookup(&name) {
                        Some(command) => format!(
                            "```{} - {}\n\n{}```",
                            command.name, command.short_description, command.usage
                        ),
                        // A typo is a normal reply, not a failure.
                        None => format!("Unknown command '{}'", name),
                    },
                    None => {
                        let mut listing = String::from("```Commands:\n\n");
                        for command in ctx.registry.iter() {
                            listing.push_str(&format!(
                                "{}{} - {}\n",
                                ctx.prefix, command.name, command.short_description
                            ));
                        }
                        listing.trim_end().to_string() + "```"
                    }
                };
                Ok(reply)
            })
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::registry::{CommandContext, CommandRegistry};
    use crate::domain::{DomainError, Platform};
    use crate::ports::{ChatChannel, ChatUser};
    use async_trait::async_trait;

    struct NullChannel;

    #[async_trait]
    impl ChatChannel for NullChannel {
        async fn send(&self, _content: &str) -> Result<(), DomainError> {
            Ok(())
        }

        async fn start_typing(&self) -> Result<(), DomainError> {
            Ok(())
        }

        async fn stop_typing(&self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn stub(name: &str, description: &str) -> ChatCommand {
        ChatCommand {
            name: name.to_string(),
            short_description: description.to_string(),
            usage: format!("usage: {}", name),
            handler: Arc::new(|_, _| Box::pin(async { Ok(String::new()) })),
        }
    }

    fn context() -> CommandContext {
        let mut registry = CommandRegistry::new();
        registry.register(help_command()).unwrap();
        registry.register(stub("quote", "Get a random quote!")).unwrap();
        registry.register(stub("apikey", "Get a new api key")).unwrap();
        CommandContext {
            channel: Arc::new(NullChannel),
            sender: ChatUser {
                platform: Platform::Discord,
                platform_id: "1".to_string(),
                display_name: "tester".to_string(),
            },
            registry: Arc::new(registry),
            prefix: "!".to_string(),
        }
    }

    async fn run_help(argument: Option<&str>) -> String {
        let ctx = context();
        let handler = ctx.registry.lookup("help").unwrap().handler.clone();
        handler(ctx, argument.map(str::to_string)).await.unwrap()
    }

    #[tokio::test]
    async fn lists_every_command_in_registration_order() {
        let reply = run_help(None).await;
        assert!(reply.starts_with("```Commands:"));
        assert!(reply.ends_with("```"));
        assert!(reply.contains("!quote - Get a random quote!"));
        let help_at = reply.find("!help").unwrap();
        let quote_at = reply.find("!quote").unwrap();
        let apikey_at = reply.find("!apikey").unwrap();
        assert!(help_at < quote_at);
        assert!(quote_at < apikey_at);
    }

    #[tokio::test]
    async fn shows_usage_for_a_known_command() {
        let reply = run_help(Some("quote")).await;
        assert!(reply.starts_with("```"));
        assert!(reply.contains("quote - Get a random quote!"));
        assert!(reply.contains("usage: quote"));
    }

    #[tokio::test]
    async fn unknown_name_gets_a_normal_reply() {
        let reply = run_help(Some("nope")).await;
        assert_eq!(reply, "Unknown command 'nope'");
    }
}
