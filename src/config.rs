use std::env;

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PENDING_LIST: &str = "emails:pending";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required setting {0}")]
    Missing(&'static str),

    #[error("Store error: {0}")]
    Store(#[from] crate::emails::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Connection settings for the email stores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub redis_url: Option<String>,
    pub pending_list: String,
}

impl Settings {
    /// Reads settings from the process environment, loading `.env` first when present.
    pub fn from_env() -> Result<Settings> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded environment file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Settings {
            database_url: non_empty("DATABASE_URL").ok_or(Error::Missing("DATABASE_URL"))?,
            redis_url: non_empty("REDIS_URL"),
            pending_list: non_empty("MAILCURSOR_PENDING_LIST")
                .unwrap_or_else(|| DEFAULT_PENDING_LIST.to_owned()),
        })
    }
}
