//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use herald::domain::{DomainError, Platform, User, UserClass};
use herald::ports::UserRepository;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    twitch_user_id: Option<String>,
    discord_user_id: Option<String>,
    api_key: Uuid,
    user_class: String,
    link_token: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            twitch_user_id: row.twitch_user_id,
            discord_user_id: row.discord_user_id,
            api_key: row.api_key,
            // A class written by a newer version demotes to the lowest
            // rank rather than failing the read.
            user_class: row.user_class.parse().unwrap_or(UserClass::User),
            link_token: row.link_token,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_platform_id(
        &self,
        platform: Platform,
        platform_id: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = match platform {
            Platform::Twitch => "SELECT * FROM users WHERE twitch_user_id = $1",
            Platform::Discord => "SELECT * FROM users WHERE discord_user_id = $1",
        };
        let row = sqlx::query_as::<_, UserRow>(query)
            .bind(platform_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DomainError::storage)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_link_token(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE link_token = $1")
            .bind(User::link_token_value(username, token))
            .fetch_optional(&self.pool)
            .await
            .map_err(DomainError::storage)?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, twitch_user_id, discord_user_id, api_key, user_class, link_token, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (id) DO UPDATE
            SET twitch_user_id = EXCLUDED.twitch_user_id,
                discord_user_id = EXCLUDED.discord_user_id,
                api_key = EXCLUDED.api_key,
                user_class = EXCLUDED.user_class,
                link_token = EXCLUDED.link_token,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.twitch_user_id)
        .bind(&user.discord_user_id)
        .bind(user.api_key)
        .bind(user.user_class.to_string())
        .bind(&user.link_token)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::storage)?;

        Ok(row.into())
    }

    async fn link_accounts(&self, a: &User, b: &User) -> Result<User, DomainError> {
        let merged = User::merged(a, b);

        // Delete both sources and insert the merged record in one
        // transaction; a failed commit leaves all three untouched.
        let mut tx = self.pool.begin().await.map_err(DomainError::storage)?;

        sqlx::query("DELETE FROM users WHERE id = $1 OR id = $2")
            .bind(a.id)
            .bind(b.id)
            .execute(&mut *tx)
            .await
            .map_err(DomainError::storage)?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, twitch_user_id, discord_user_id, api_key, user_class, link_token, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(merged.id)
        .bind(&merged.twitch_user_id)
        .bind(&merged.discord_user_id)
        .bind(merged.api_key)
        .bind(merged.user_class.to_string())
        .bind(&merged.link_token)
        .bind(merged.created_at)
        .bind(merged.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(DomainError::storage)?;

        tx.commit().await.map_err(DomainError::storage)?;

        Ok(row.into())
    }
}
