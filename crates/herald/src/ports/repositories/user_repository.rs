//! User Repository Port
//!
//! Abstract interface for identity record persistence.

use async_trait::async_trait;

use crate::domain::{DomainError, Platform, User};

/// Repository interface for identity records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the record owning `platform_id` on `platform`.
    async fn find_by_platform_id(
        &self,
        platform: Platform,
        platform_id: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Find the record whose pending link value is exactly
    /// `"<username> <token>"`.
    async fn find_by_link_token(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Save a record (insert or update).
    async fn save(&self, user: &User) -> Result<User, DomainError>;

    /// Replace `a` and `b` with their merged record.
    ///
    /// Deleting both inputs and inserting the merged record commit as a
    /// single transaction: on failure neither input is removed, no
    /// merged record exists, and `DomainError::Storage` is returned.
    async fn link_accounts(&self, a: &User, b: &User) -> Result<User, DomainError>;
}
