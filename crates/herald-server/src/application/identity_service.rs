//! Identity Application Service
//!
//! The operation surface command handlers use to read and mutate
//! identity records. Single-record persistence goes through the
//! repository port; the merge transaction lives inside the repository
//! implementation so the service never sees partial state.

use std::sync::Arc;

use uuid::Uuid;

use herald::domain::{DomainError, Platform, User};
use herald::ports::UserRepository;

pub struct IdentityService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> IdentityService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The record owning `platform_id`, if any.
    pub async fn find_by_platform_id(
        &self,
        platform: Platform,
        platform_id: &str,
    ) -> Result<Option<User>, DomainError> {
        self.repo.find_by_platform_id(platform, platform_id).await
    }

    /// The record for a contact from `platform`, created on first use.
    ///
    /// Two racing first contacts resolve through the unique index on the
    /// platform id column; the loser gets a storage error.
    pub async fn ensure_user(
        &self,
        platform: Platform,
        platform_id: &str,
    ) -> Result<User, DomainError> {
        if let Some(user) = self.repo.find_by_platform_id(platform, platform_id).await? {
            return Ok(user);
        }
        let user = User::new_for_platform(platform, platform_id);
        let saved = self.repo.save(&user).await?;
        tracing::info!(platform = %platform, user_id = %saved.id, "created user on first contact");
        Ok(saved)
    }

    /// Store a link request against `user` and return the raw nonce for
    /// out-of-band delivery.
    pub async fn issue_link_token(
        &self,
        mut user: User,
        username: &str,
    ) -> Result<String, DomainError> {
        let nonce = user.issue_link_token(username);
        self.repo.save(&user).await?;
        Ok(nonce)
    }

    /// The record holding the pending link `"<username> <token>"`.
    pub async fn find_by_link_token(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Option<User>, DomainError> {
        self.repo.find_by_link_token(username, token).await
    }

    /// Merge two records into one; both inputs stop existing.
    pub async fn link_accounts(&self, a: &User, b: &User) -> Result<User, DomainError> {
        let merged = self.repo.link_accounts(a, b).await?;
        tracing::info!(merged_id = %merged.id, from_a = %a.id, from_b = %b.id, "linked accounts");
        Ok(merged)
    }

    /// Replace the api key; the old key is invalid once this returns.
    pub async fn rotate_api_key(&self, mut user: User) -> Result<Uuid, DomainError> {
        let key = user.rotate_api_key();
        self.repo.save(&user).await?;
        Ok(key)
    }
}
