//! UserClass - privilege ranking for identity records

use serde::{Deserialize, Serialize};

/// Privilege class of a user record.
///
/// Variants are declared lowest to highest; the derived `Ord` is the
/// ranking used to resolve conflicts when two records merge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UserClass {
    #[default]
    User,
    Admin,
}

impl UserClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserClass::User => "user",
            UserClass::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(UserClass::User),
            "admin" => Ok(UserClass::Admin),
            _ => Err(format!("Unknown user class: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_outranks_user() {
        assert!(UserClass::Admin > UserClass::User);
        assert_eq!(UserClass::User.max(UserClass::Admin), UserClass::Admin);
        assert_eq!(UserClass::Admin.max(UserClass::Admin), UserClass::Admin);
    }

    #[test]
    fn parse_roundtrip() {
        for class in [UserClass::User, UserClass::Admin] {
            assert_eq!(class.as_str().parse::<UserClass>(), Ok(class));
        }
        assert!("overlord".parse::<UserClass>().is_err());
    }
}
