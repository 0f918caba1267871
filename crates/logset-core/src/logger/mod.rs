//! Named file-backed loggers

mod error;
mod file_logger;

pub use error::{LogError, LogResult};
pub use file_logger::Logger;
