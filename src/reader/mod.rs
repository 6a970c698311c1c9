mod email;
mod error;

pub use email::{EmailItemReader, EmailItemReaderBuilder};
pub use error::{Error, Result};
