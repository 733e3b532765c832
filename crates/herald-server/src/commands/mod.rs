//! Command handlers installed at startup.

pub mod account;
pub mod quote;

use std::sync::Arc;

use herald::chat::{CommandRegistry, help_command};
use herald::domain::DomainError;
use herald::ports::{QuoteRepository, UserRepository};

use crate::application::IdentityService;

/// Register every command. A duplicate name fails the whole build and
/// with it the process start.
pub fn build_registry<R, Q>(
    identity: Arc<IdentityService<R>>,
    quotes: Arc<Q>,
) -> Result<CommandRegistry, DomainError>
where
    R: UserRepository + 'static,
    Q: QuoteRepository + 'static,
{
    let mut registry = CommandRegistry::new();
    registry.register(help_command())?;
    registry.register(quote::quote(Arc::clone(&quotes)))?;
    registry.register(quote::addquote(Arc::clone(&identity), quotes))?;
    registry.register(account::link(Arc::clone(&identity)))?;
    registry.register(account::confirm(Arc::clone(&identity)))?;
    registry.register(account::apikey(identity))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryQuoteRepository, MemoryUserRepository};

    #[test]
    fn registry_builds_with_all_commands() {
        let identity = Arc::new(IdentityService::new(Arc::new(
            MemoryUserRepository::default(),
        )));
        let quotes = Arc::new(MemoryQuoteRepository::default());
        let registry = build_registry(identity, quotes).unwrap();
        for name in ["help", "quote", "addquote", "link", "confirm", "apikey"] {
            assert!(registry.lookup(name).is_some(), "missing command {}", name);
        }
        assert_eq!(registry.len(), 6);
    }
}
