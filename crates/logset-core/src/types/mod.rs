//! Shared value types for loggers and logger sets

mod options;
mod severity;

pub use options::LogOptions;
pub use severity::Severity;
