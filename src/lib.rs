pub mod batch;
pub mod config;
pub mod emails;
pub mod reader;

pub use self::config::Settings;
pub use self::emails::{MemoryEmailStore, PostgresEmailStore, RedisKeySource};
pub use self::reader::EmailItemReader;
