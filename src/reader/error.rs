use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reader must be open before it can be used")]
    NotOpen,

    #[error("Failed to load email {key}: {source}")]
    Load {
        key: i64,
        #[source]
        source: crate::emails::Error,
    },

    #[error("An email store must be provided")]
    MissingEmailStore,

    #[error("A key source must be provided")]
    MissingKeySource,
}

pub type Result<T> = std::result::Result<T, Error>;
