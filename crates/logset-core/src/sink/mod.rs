//! File-backed log sinks
//!
//! One process-wide registry keyed by log-file path hands out shared
//! [`FileSink`] handles: two loggers targeting the same `(directory, name)`
//! share one handle, and opening a sink for a different file never disturbs
//! an existing one.

mod file;
mod registry;

pub use file::FileSink;
pub use registry::acquire;
