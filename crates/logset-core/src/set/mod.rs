//! Named collections of loggers addressable as one unit

mod error;
mod logger_set;

pub use error::{SetError, SetResult};
pub use logger_set::LoggerSet;
