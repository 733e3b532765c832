//! Repository Ports
//!
//! Abstract interfaces for persistence operations.

pub mod quote_repository;
pub mod user_repository;

pub use quote_repository::*;
pub use user_repository::*;
