//! Chat Command Layer
//!
//! Platform-generic command handling: a registry built once at startup,
//! a dispatcher that turns one inbound message into at most one reply,
//! and the built-in `help` command.

pub mod dispatcher;
pub mod help;
pub mod registry;

pub use dispatcher::Dispatcher;
pub use help::help_command;
pub use registry::{ChatCommand, CommandContext, CommandHandler, CommandRegistry};
