//! Infrastructure adapters implementing the domain ports.

pub mod postgres;

pub use postgres::{PgQuoteRepository, PgUserRepository};
