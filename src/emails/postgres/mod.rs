use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{migrate, postgres::PgPoolOptions, query, query_as, query_scalar, FromRow, PgPool};
use tracing::debug;

use crate::config::Settings;

use super::{
    error::{Error, Result},
    traits::{Email, EmailStatus, EmailStore, KeySource},
};

#[derive(Debug, Clone)]
pub struct PostgresEmailStore(PgPool);

impl PostgresEmailStore {
    pub async fn new(url: &str) -> Result<PostgresEmailStore> {
        let pool = PgPoolOptions::new().connect(url).await?;
        migrate!("src/emails/postgres/migrations")
            .run(&pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(Self(pool))
    }

    pub async fn from_settings(settings: &Settings) -> Result<PostgresEmailStore> {
        Self::new(&settings.database_url).await
    }
}

#[derive(FromRow)]
struct DbValue {
    id: i64,
    version: i32,
    email_type: String,
    status: String,
    content: Vec<u8>,
    processed_count: i32,
    date_create: DateTime<Utc>,
    date_update: DateTime<Utc>,
}

impl TryFrom<DbValue> for Email {
    type Error = Error;

    fn try_from(value: DbValue) -> Result<Self> {
        Ok(Self {
            id: value.id,
            version: value.version,
            email_type: value.email_type,
            status: value.status.parse()?,
            content: value.content,
            processed_count: value.processed_count,
            date_create: value.date_create,
            date_update: value.date_update,
        })
    }
}

#[async_trait]
impl EmailStore for PostgresEmailStore {
    async fn get(&self, id: &i64) -> Result<Option<Email>> {
        let row = query_as::<_, DbValue>(
            r#"
                SELECT
                    id,
                    version,
                    email_type,
                    status,
                    content,
                    processed_count,
                    date_create,
                    date_update
                FROM
                    emails e
                WHERE
                    e.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.0)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn upsert(&mut self, email: Email) -> Result<()> {
        query(
            r#"
                INSERT INTO emails (
                    id,
                    version,
                    email_type,
                    status,
                    content,
                    processed_count,
                    date_create,
                    date_update
                )
                VALUES (
                    $1,
                    $2,
                    $3,
                    $4,
                    $5,
                    $6,
                    $7,
                    $8
                )
                ON CONFLICT (id) DO UPDATE SET
                    version = EXCLUDED.version,
                    email_type = EXCLUDED.email_type,
                    status = EXCLUDED.status,
                    content = EXCLUDED.content,
                    processed_count = EXCLUDED.processed_count,
                    date_create = EXCLUDED.date_create,
                    date_update = EXCLUDED.date_update
            "#,
        )
        .bind(email.id)
        .bind(email.version)
        .bind(&email.email_type)
        .bind(email.status.as_str())
        .bind(&email.content)
        .bind(email.processed_count)
        .bind(email.date_create)
        .bind(email.date_update)
        .execute(&self.0)
        .await?;

        Ok(())
    }

    async fn remove(&mut self, id: &i64) -> Result<()> {
        query(
            r#"
                DELETE FROM
                    emails e
                WHERE
                    e.id = $1
            "#,
        )
        .bind(id)
        .execute(&self.0)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl KeySource for PostgresEmailStore {
    async fn retrieve_keys(&self) -> Result<Vec<i64>> {
        let ids = query_scalar::<_, i64>(
            r#"
                SELECT
                    id
                FROM
                    emails e
                WHERE
                    e.status = $1
                ORDER BY
                    e.date_create,
                    e.id
            "#,
        )
        .bind(EmailStatus::Pending.as_str())
        .fetch_all(&self.0)
        .await?;

        debug!(count = ids.len(), "Loaded ids for email sync");
        Ok(ids)
    }
}
