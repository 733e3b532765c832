//! Quote Repository Port

use async_trait::async_trait;

use crate::domain::{DomainError, Quote};

/// Repository interface for quotes
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// A random quote, optionally restricted to quotes whose text or
    /// author contains `filter`.
    async fn random(&self, filter: Option<&str>) -> Result<Option<Quote>, DomainError>;

    /// Save a new quote.
    async fn add(&self, quote: &Quote) -> Result<Quote, DomainError>;
}
