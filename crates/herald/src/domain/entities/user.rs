//! User - one identity, possibly spanning several chat platforms

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Platform, UserClass};

/// A single identity record.
///
/// Each platform id and the api key are globally unique among all
/// records. A record starts out knowing one platform; account linking
/// replaces two records with one that carries both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub twitch_user_id: Option<String>,
    pub discord_user_id: Option<String>,
    pub api_key: Uuid,
    pub user_class: UserClass,
    /// Pending link request, stored as `"<username> <nonce>"`.
    pub link_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh record for a first contact from `platform`.
    pub fn new_for_platform(platform: Platform, platform_id: impl Into<String>) -> Self {
        let now = Utc::now();
        let mut user = Self {
            id: Uuid::new_v4(),
            twitch_user_id: None,
            discord_user_id: None,
            api_key: Uuid::new_v4(),
            user_class: UserClass::default(),
            link_token: None,
            created_at: now,
            updated_at: now,
        };
        user.set_platform_id(platform, platform_id.into());
        user
    }

    /// The record's identifier on `platform`, if it has one.
    pub fn platform_id(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Twitch => self.twitch_user_id.as_deref(),
            Platform::Discord => self.discord_user_id.as_deref(),
        }
    }

    fn set_platform_id(&mut self, platform: Platform, id: String) {
        match platform {
            Platform::Twitch => self.twitch_user_id = Some(id),
            Platform::Discord => self.discord_user_id = Some(id),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_class == UserClass::Admin
    }

    /// Store a link request for `username` and return the raw nonce.
    ///
    /// The caller delivers the nonce out of band; whoever presents it
    /// together with `username` proves control of both identities.
    pub fn issue_link_token(&mut self, username: &str) -> String {
        let nonce = Uuid::new_v4().to_string();
        self.link_token = Some(Self::link_token_value(username, &nonce));
        self.updated_at = Utc::now();
        nonce
    }

    /// The stored value that `find_by_link_token` matches against.
    pub fn link_token_value(username: &str, nonce: &str) -> String {
        format!("{} {}", username, nonce)
    }

    /// Replace the api key. The previous key stops working as soon as
    /// the record is saved.
    pub fn rotate_api_key(&mut self) -> Uuid {
        self.api_key = Uuid::new_v4();
        self.updated_at = Utc::now();
        self.api_key
    }

    /// Build the record that replaces `a` and `b` when their accounts
    /// link: the union of their platform ids, the higher privilege
    /// class, a fresh id and api key, and no pending link.
    pub fn merged(a: &User, b: &User) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            twitch_user_id: a.twitch_user_id.clone().or_else(|| b.twitch_user_id.clone()),
            discord_user_id: a
                .discord_user_id
                .clone()
                .or_else(|| b.discord_user_id.clone()),
            api_key: Uuid::new_v4(),
            user_class: a.user_class.max(b.user_class),
            link_token: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_knows_one_platform() {
        let user = User::new_for_platform(Platform::Discord, "123");
        assert_eq!(user.platform_id(Platform::Discord), Some("123"));
        assert_eq!(user.platform_id(Platform::Twitch), None);
        assert_eq!(user.user_class, UserClass::User);
        assert!(user.link_token.is_none());
    }

    #[test]
    fn merged_unions_platform_ids() {
        let a = User::new_for_platform(Platform::Twitch, "t-1");
        let b = User::new_for_platform(Platform::Discord, "d-1");
        let merged = User::merged(&a, &b);
        assert_eq!(merged.platform_id(Platform::Twitch), Some("t-1"));
        assert_eq!(merged.platform_id(Platform::Discord), Some("d-1"));
    }

    #[test]
    fn merged_keeps_higher_class() {
        let mut a = User::new_for_platform(Platform::Twitch, "t-1");
        let b = User::new_for_platform(Platform::Discord, "d-1");
        a.user_class = UserClass::Admin;
        assert_eq!(User::merged(&a, &b).user_class, UserClass::Admin);
        assert_eq!(User::merged(&b, &a).user_class, UserClass::Admin);
    }

    #[test]
    fn merged_gets_fresh_credentials() {
        let mut a = User::new_for_platform(Platform::Twitch, "t-1");
        let b = User::new_for_platform(Platform::Discord, "d-1");
        a.issue_link_token("someone");
        let merged = User::merged(&a, &b);
        assert_ne!(merged.id, a.id);
        assert_ne!(merged.id, b.id);
        assert_ne!(merged.api_key, a.api_key);
        assert_ne!(merged.api_key, b.api_key);
        assert!(merged.link_token.is_none());
    }

    #[test]
    fn issued_token_matches_stored_value() {
        let mut user = User::new_for_platform(Platform::Discord, "123");
        let nonce = user.issue_link_token("bob");
        assert_eq!(
            user.link_token.as_deref(),
            Some(User::link_token_value("bob", &nonce).as_str())
        );
        assert_ne!(
            user.link_token.as_deref(),
            Some(User::link_token_value("bob", "wrong").as_str())
        );
    }

    #[test]
    fn rotate_api_key_replaces_the_key() {
        let mut user = User::new_for_platform(Platform::Discord, "123");
        let old = user.api_key;
        let new = user.rotate_api_key();
        assert_ne!(old, new);
        assert_eq!(user.api_key, new);
    }
}
