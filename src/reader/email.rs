use std::{
    fmt::Debug,
    sync::atomic::{AtomicBool, Ordering},
    vec::IntoIter,
};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::{
    batch::{ExitStatus, ItemReader, ProcessIndicatorItem, StepExecution, StepListener},
    emails::{Email, EmailStore, KeySource},
};

use super::error::{Error, Result};

/// Thread-safe reader over the email ids staged for one step.
///
/// Keys are fetched once on [`open`](Self::open) and handed out one at a time;
/// every key reaches exactly one caller of [`read`](Self::read). Closing the
/// reader drops the remaining keys so the next step fetches a fresh list.
#[derive(Debug)]
pub struct EmailItemReader<S: KeySource, E: EmailStore> {
    key_source: S,
    email_store: E,
    keys: Mutex<Option<IntoIter<i64>>>,
    initialized: AtomicBool,
}

#[derive(Debug)]
pub struct EmailItemReaderBuilder<S, E> {
    key_source: Option<S>,
    email_store: Option<E>,
}

impl<S, E> Default for EmailItemReaderBuilder<S, E> {
    fn default() -> Self {
        Self {
            key_source: None,
            email_store: None,
        }
    }
}

impl<S: KeySource, E: EmailStore> EmailItemReaderBuilder<S, E> {
    pub fn key_source(mut self, key_source: S) -> Self {
        self.key_source = Some(key_source);
        self
    }

    pub fn email_store(mut self, email_store: E) -> Self {
        self.email_store = Some(email_store);
        self
    }

    pub fn build(self) -> Result<EmailItemReader<S, E>> {
        let email_store = self.email_store.ok_or(Error::MissingEmailStore)?;
        let key_source = self.key_source.ok_or(Error::MissingKeySource)?;
        Ok(EmailItemReader::new(key_source, email_store))
    }
}

impl<S: KeySource, E: EmailStore> EmailItemReader<S, E> {
    pub fn new(key_source: S, email_store: E) -> Self {
        Self {
            key_source,
            email_store,
            keys: Mutex::new(None),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn builder() -> EmailItemReaderBuilder<S, E> {
        EmailItemReaderBuilder::default()
    }

    pub fn key_source(&self) -> &S {
        &self.key_source
    }

    pub fn email_store(&self) -> &E {
        &self.email_store
    }

    pub fn is_open(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Stages the keys for this run. Does nothing if keys are already staged.
    pub async fn open(&self) {
        let mut keys = self.keys.lock().await;
        if keys.is_some() {
            return;
        }

        let staged = match self.key_source.retrieve_keys().await {
            Ok(staged) => staged,
            Err(e) => {
                error!(error = %e, "Error during the ids loading");
                Vec::new()
            }
        };
        info!(count = staged.len(), "Keys obtained for staging");

        *keys = Some(staged.into_iter());
        self.initialized.store(true, Ordering::Release);
    }

    pub async fn close(&self) {
        let mut keys = self.keys.lock().await;
        self.initialized.store(false, Ordering::Release);
        *keys = None;
    }

    /// Number of staged keys not yet handed out.
    pub async fn remaining(&self) -> usize {
        self.keys.lock().await.as_ref().map_or(0, |keys| keys.len())
    }

    async fn next_key(&self) -> Result<Option<i64>> {
        let mut keys = self.keys.lock().await;
        let keys = keys.as_mut().ok_or(Error::NotOpen)?;
        Ok(keys.next())
    }

    pub async fn read(&self) -> Result<Option<ProcessIndicatorItem<i64, Email>>> {
        if !self.is_open() {
            return Err(Error::NotOpen);
        }

        let key = self.next_key().await?;
        debug!(?key, "Retrieved key from list");

        let Some(key) = key else {
            return Ok(None);
        };

        let email = self.email_store.get(&key).await.map_err(|source| {
            error!(key, error = %source, "Failed to load email");
            Error::Load { key, source }
        })?;

        Ok(Some(ProcessIndicatorItem::new(key, email)))
    }
}

#[async_trait]
impl<S: KeySource, E: EmailStore> ItemReader for EmailItemReader<S, E> {
    type Item = ProcessIndicatorItem<i64, Email>;
    type Error = Error;

    async fn read(&self) -> Result<Option<Self::Item>> {
        EmailItemReader::read(self).await
    }
}

#[async_trait]
impl<S: KeySource, E: EmailStore> StepListener for EmailItemReader<S, E> {
    async fn before_step(&self, step: &StepExecution) {
        debug!(step = %step.step_name, "Opening email reader");
        self.open().await;
    }

    async fn after_step(&self, step: &StepExecution) -> ExitStatus {
        self.close().await;
        debug!(step = %step.step_name, exit_status = %step.exit_status, "Closed email reader");
        step.exit_status
    }
}
