//! In-memory test doubles for the ports.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use herald::chat::{CommandContext, CommandRegistry};
use herald::domain::{DomainError, Platform, Quote, User};
use herald::ports::{ChatChannel, ChatUser, QuoteRepository, UserRepository};

/// UserRepository over a Vec, with a one-shot failure switch for
/// exercising the transactional contract.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    pub fail_next: AtomicBool,
}

impl MemoryUserRepository {
    fn check_fail(&self) -> Result<(), DomainError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Storage("injected failure".to_string()));
        }
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_platform_id(
        &self,
        platform: Platform,
        platform_id: &str,
    ) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.platform_id(platform) == Some(platform_id))
            .cloned())
    }

    async fn find_by_link_token(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Option<User>, DomainError> {
        let value = User::link_token_value(username, token);
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.link_token.as_deref() == Some(value.as_str()))
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        self.check_fail()?;
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        } else {
            users.push(user.clone());
        }
        Ok(user.clone())
    }

    async fn link_accounts(&self, a: &User, b: &User) -> Result<User, DomainError> {
        // An injected failure leaves both inputs untouched, the same
        // way a rolled-back transaction would.
        self.check_fail()?;
        let merged = User::merged(a, b);
        let mut users = self.users.lock().unwrap();
        users.retain(|u| u.id != a.id && u.id != b.id);
        users.push(merged.clone());
        Ok(merged)
    }
}

/// QuoteRepository over a Vec. `random` returns the first match so
/// tests stay deterministic.
#[derive(Default)]
pub struct MemoryQuoteRepository {
    quotes: Mutex<Vec<Quote>>,
}

impl MemoryQuoteRepository {
    pub fn quote_count(&self) -> usize {
        self.quotes.lock().unwrap().len()
    }
}

#[async_trait]
impl QuoteRepository for MemoryQuoteRepository {
    async fn random(&self, filter: Option<&str>) -> Result<Option<Quote>, DomainError> {
        let quotes = self.quotes.lock().unwrap();
        Ok(match filter {
            Some(filter) => {
                let needle = filter.to_lowercase();
                quotes
                    .iter()
                    .find(|q| {
                        q.quote.to_lowercase().contains(&needle)
                            || q.author.to_lowercase().contains(&needle)
                    })
                    .cloned()
            }
            None => quotes.first().cloned(),
        })
    }

    async fn add(&self, quote: &Quote) -> Result<Quote, DomainError> {
        self.quotes.lock().unwrap().push(quote.clone());
        Ok(quote.clone())
    }
}

pub struct NullChannel;

#[async_trait]
impl ChatChannel for NullChannel {
    async fn send(&self, _content: &str) -> Result<(), DomainError> {
        Ok(())
    }

    async fn start_typing(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn stop_typing(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A context for invoking a handler directly, outside the dispatcher.
pub fn test_context(platform: Platform, platform_id: &str, display_name: &str) -> CommandContext {
    CommandContext {
        channel: Arc::new(NullChannel),
        sender: ChatUser {
            platform,
            platform_id: platform_id.to_string(),
            display_name: display_name.to_string(),
        },
        registry: Arc::new(CommandRegistry::new()),
        prefix: "!".to_string(),
    }
}
