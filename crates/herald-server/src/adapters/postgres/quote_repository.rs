//! PostgreSQL implementation of QuoteRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use herald::domain::{DomainError, Quote};
use herald::ports::QuoteRepository;

/// PostgreSQL implementation of QuoteRepository
pub struct PgQuoteRepository {
    pool: PgPool,
}

impl PgQuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: Uuid,
    quote: String,
    author: String,
    quoted_on: Option<NaiveDate>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        Self {
            id: row.id,
            quote: row.quote,
            author: row.author,
            quoted_on: row.quoted_on,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl QuoteRepository for PgQuoteRepository {
    async fn random(&self, filter: Option<&str>) -> Result<Option<Quote>, DomainError> {
        let row = match filter {
            Some(filter) => {
                sqlx::query_as::<_, QuoteRow>(
                    r#"
                    SELECT * FROM quotes
                    WHERE quote ILIKE $1 OR author ILIKE $1
                    ORDER BY RANDOM() LIMIT 1
                    "#,
                )
                .bind(format!("%{}%", filter))
                .fetch_optional(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, QuoteRow>("SELECT * FROM quotes ORDER BY RANDOM() LIMIT 1")
                    .fetch_optional(&self.pool)
                    .await
            }
        }
        .map_err(DomainError::storage)?;

        Ok(row.map(Into::into))
    }

    async fn add(&self, quote: &Quote) -> Result<Quote, DomainError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            INSERT INTO quotes (id, quote, author, quoted_on, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(quote.id)
        .bind(&quote.quote)
        .bind(&quote.author)
        .bind(quote.quoted_on)
        .bind(quote.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::storage)?;

        Ok(row.into())
    }
}
