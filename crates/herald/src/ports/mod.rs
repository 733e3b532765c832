//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems (repositories, the chat gateway).
//!
//! Implementations of these traits live in the infrastructure crates.

pub mod chat;
pub mod repositories;

// Re-exports
pub use chat::*;
pub use repositories::*;
