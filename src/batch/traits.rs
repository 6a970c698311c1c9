use async_trait::async_trait;

use super::step::{ExitStatus, StepExecution};

#[async_trait]
pub trait ItemReader: Send + Sync {
    type Item: Send;
    type Error: Send;

    /// Returns the next item, or `None` once the input is exhausted.
    async fn read(&self) -> Result<Option<Self::Item>, Self::Error>;
}

#[async_trait]
pub trait StepListener: Send + Sync {
    async fn before_step(&self, step: &StepExecution);

    async fn after_step(&self, step: &StepExecution) -> ExitStatus;
}
