//! Quote - memorable lines saved from chat

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub quote: String,
    pub author: String,
    pub quoted_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(quote: String, author: String, quoted_on: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            quote,
            author,
            quoted_on,
            created_at: Utc::now(),
        }
    }

    /// Chat-facing rendering: `<quote> - <author>[ <date>]`.
    pub fn display_line(&self) -> String {
        let mut line = format!("{} - {}", self.quote, self.author);
        if let Some(date) = self.quoted_on {
            line.push(' ');
            line.push_str(&date.to_string());
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_without_date() {
        let quote = Quote::new("never test in prod".into(), "sana".into(), None);
        assert_eq!(quote.display_line(), "never test in prod - sana");
    }

    #[test]
    fn display_line_with_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let quote = Quote::new("it works on my machine".into(), "rio".into(), Some(date));
        assert_eq!(
            quote.display_line(),
            "it works on my machine - rio 2024-03-09"
        );
    }
}
