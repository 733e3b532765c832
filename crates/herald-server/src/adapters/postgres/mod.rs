//! PostgreSQL repository implementations

mod quote_repository;
mod user_repository;

pub use quote_repository::PgQuoteRepository;
pub use user_repository::PgUserRepository;
