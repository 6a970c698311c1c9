mod error;
mod memory;
mod postgres;
mod redis;
mod traits;

pub use self::redis::RedisKeySource;
pub use error::{Error, Result};
pub use memory::MemoryEmailStore;
pub use postgres::PostgresEmailStore;
pub use traits::{Email, EmailStatus, EmailStore, KeySource};
