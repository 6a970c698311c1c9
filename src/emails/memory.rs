use std::{collections::HashMap, hash::BuildHasherDefault};

use async_trait::async_trait;
use nohash_hasher::NoHashHasher;

use super::{
    error::Result,
    traits::{Email, EmailStatus, EmailStore, KeySource},
};

#[derive(Debug)]
pub struct MemoryEmailStore(HashMap<i64, Email, BuildHasherDefault<NoHashHasher<i64>>>);

impl MemoryEmailStore {
    pub fn new() -> Self {
        Self(HashMap::with_hasher(BuildHasherDefault::default()))
    }
}

impl Default for MemoryEmailStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Email> for MemoryEmailStore {
    fn from_iter<I: IntoIterator<Item = Email>>(iter: I) -> Self {
        let mut store = Self::new();
        store.0.extend(iter.into_iter().map(|email| (email.id, email)));
        store
    }
}

#[async_trait]
impl EmailStore for MemoryEmailStore {
    async fn get(&self, id: &i64) -> Result<Option<Email>> {
        Ok(self.0.get(id).cloned())
    }

    async fn upsert(&mut self, email: Email) -> Result<()> {
        self.0.insert(email.id, email);
        Ok(())
    }

    async fn remove(&mut self, id: &i64) -> Result<()> {
        self.0.remove(id);
        Ok(())
    }
}

#[async_trait]
impl KeySource for MemoryEmailStore {
    async fn retrieve_keys(&self) -> Result<Vec<i64>> {
        let mut pending: Vec<&Email> = self
            .0
            .values()
            .filter(|email| email.status == EmailStatus::Pending)
            .collect();
        pending.sort_by_key(|email| (email.date_create, email.id));
        Ok(pending.into_iter().map(|email| email.id).collect())
    }
}
