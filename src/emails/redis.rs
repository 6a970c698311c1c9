use anyhow::Context;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, IntoConnectionInfo};

use crate::config::{self, Settings};

use super::{error::Result, traits::KeySource};

/// Reads staged email ids from a Redis list filled by an upstream producer.
#[derive(Debug)]
pub struct RedisKeySource {
    client: Client,
    list: String,
}

impl RedisKeySource {
    pub fn new<T: IntoConnectionInfo>(params: T, list: impl Into<String>) -> Result<RedisKeySource> {
        let client = Client::open(params)?;
        Ok(Self {
            client,
            list: list.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> std::result::Result<RedisKeySource, config::Error> {
        let url = settings
            .redis_url
            .as_deref()
            .ok_or(config::Error::Missing("REDIS_URL"))?;
        Ok(Self::new(url, settings.pending_list.as_str())?)
    }

    pub fn list(&self) -> &str {
        &self.list
    }

    pub async fn push(&self, id: i64) -> Result<()> {
        let mut connection = self.client.get_async_connection().await?;
        let _: () = connection.rpush(&self.list, id).await?;
        Ok(())
    }
}

#[async_trait]
impl KeySource for RedisKeySource {
    async fn retrieve_keys(&self) -> Result<Vec<i64>> {
        let mut connection = self.client.get_async_connection().await?;
        let entries: Vec<String> = connection.lrange(&self.list, 0, -1).await?;

        let keys = entries
            .iter()
            .map(|entry| {
                entry
                    .parse::<i64>()
                    .with_context(|| format!("Invalid email id {entry:?} in list {}", self.list))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(keys)
    }
}
