//! Command Registry
//!
//! Commands are registered once at startup; the registry is then frozen
//! behind an `Arc` and read without synchronization for the lifetime of
//! the process.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::ports::{ChatChannel, ChatUser};

/// Everything a handler can see about one invocation.
#[derive(Clone)]
pub struct CommandContext {
    /// Channel the message arrived on; replies and typing signals go here.
    pub channel: Arc<dyn ChatChannel>,
    /// Author of the message.
    pub sender: ChatUser,
    /// The frozen registry, for commands that enumerate other commands.
    pub registry: Arc<CommandRegistry>,
    /// Active command prefix, for printing invocable names.
    pub prefix: String,
}

/// Boxed future returned by command handlers.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<String, DomainError>> + Send>>;

/// The one handler capability every command implements: invocation
/// context plus the parsed argument (absent when the message carried
/// none), resolving to the reply text. An empty reply suppresses the
/// outbound message.
pub type CommandHandler = Arc<dyn Fn(CommandContext, Option<String>) -> HandlerFuture + Send + Sync>;

/// One registered command.
#[derive(Clone)]
pub struct ChatCommand {
    pub name: String,
    pub short_description: String,
    pub usage: String,
    pub handler: CommandHandler,
}

/// Name-to-command mapping, preserving registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<ChatCommand>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a command. Fails if the name is already taken; the
    /// process must not start with colliding commands.
    pub fn register(&mut self, command: ChatCommand) -> Result<(), DomainError> {
        if self.index.contains_key(&command.name) {
            return Err(DomainError::DuplicateCommand(command.name));
        }
        self.index.insert(command.name.clone(), self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&ChatCommand> {
        self.index.get(name).map(|&i| &self.commands[i])
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ChatCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
