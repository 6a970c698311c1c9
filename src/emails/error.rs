use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid email status: {0}")]
    InvalidStatus(String),

    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
