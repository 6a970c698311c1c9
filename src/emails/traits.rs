use core::{fmt::Debug, str::FromStr};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmailStatus {
    Pending,
    Sent,
    Error,
}

impl EmailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Pending => "PENDING",
            EmailStatus::Sent => "SENT",
            EmailStatus::Error => "ERROR",
        }
    }
}

impl FromStr for EmailStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PENDING" => Ok(EmailStatus::Pending),
            "SENT" => Ok(EmailStatus::Sent),
            "ERROR" => Ok(EmailStatus::Error),
            other => Err(Error::InvalidStatus(other.to_owned())),
        }
    }
}

/// A queued outgoing email.
#[derive(Clone, Debug, PartialEq)]
pub struct Email {
    pub id: i64,
    pub version: i32,
    pub email_type: String,
    pub status: EmailStatus,
    /// Serialized message, handed to the delivery stage untouched.
    pub content: Vec<u8>,
    pub processed_count: i32,
    pub date_create: DateTime<Utc>,
    pub date_update: DateTime<Utc>,
}

impl Email {
    /// A fresh pending email stamped with the current time.
    pub fn pending(id: i64, email_type: impl Into<String>, content: Vec<u8>) -> Self {
        let now = Utc::now();
        Self {
            id,
            version: 1,
            email_type: email_type.into(),
            status: EmailStatus::Pending,
            content,
            processed_count: 0,
            date_create: now,
            date_update: now,
        }
    }
}

#[async_trait]
pub trait EmailStore: Debug + Send + Sync {
    async fn get(&self, id: &i64) -> Result<Option<Email>>;

    async fn upsert(&mut self, email: Email) -> Result<()>;

    async fn remove(&mut self, id: &i64) -> Result<()>;
}

/// Supplies the email ids a batch run should process.
#[async_trait]
pub trait KeySource: Debug + Send + Sync {
    async fn retrieve_keys(&self) -> Result<Vec<i64>>;
}
