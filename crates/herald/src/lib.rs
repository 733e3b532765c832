//! Herald Domain Library
//!
//! Core domain types and interfaces for the herald chat bot.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, Quote)
//!   - `value_objects/`: Immutable value types (Platform, UserClass)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `chat`: The channel a message arrived on
//!
//! - **Chat Layer** (`chat/`): Platform-generic command handling
//!   - command registry, message dispatcher, built-in help
//!
//! Platform integrations (e.g. herald-integration-discord) and storage
//! adapters live in separate crates and implement the ports.

pub mod chat;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use chat::{
    ChatCommand, CommandContext, CommandHandler, CommandRegistry, Dispatcher, help_command,
};
pub use domain::{DomainError, Platform, Quote, User, UserClass};
pub use ports::{ChatChannel, ChatUser, QuoteRepository, UserRepository};
