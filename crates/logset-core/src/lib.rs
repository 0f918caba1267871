//! Logset Core
//!
//! Named file-backed loggers and addressable logger sets.
//!
//! A [`Logger`] owns one log destination at `{directory}/{name}.log`, writes
//! one timestamped record per call, optionally echoes records to stdout, and
//! optionally expands a captured error into an aligned call-stack trace.
//! A [`LoggerSet`] owns a named collection of loggers and addresses them
//! individually, as subsets, or all at once.
//!
//! ```rust,ignore
//! use logset_core::{CapturedError, LogOptions, LoggerSet, Severity};
//!
//! let set = LoggerSet::new(
//!     ["requests", "payments"],
//!     "logs",
//!     LogOptions::new().traceback(true),
//! )?;
//!
//! set.propagate_all("service started", Severity::Info, None)?;
//!
//! let err = CapturedError::new("connection refused")
//!     .frame(42, "connect", "src/net.rs")
//!     .frame(17, "handle_request", "src/server.rs");
//! set.propagate(&["payments"], "charge failed", Severity::Critical, Some(&err))?;
//! ```
//!
//! Loggers targeting the same `(directory, name)` share a single sink handle
//! through a process-wide registry; configuring a new logger never disturbs
//! an existing one.

pub mod logger;
pub mod set;
pub mod sink;
pub mod trace;
pub mod types;

// Re-export commonly used types
pub use logger::{LogError, LogResult, Logger};
pub use set::{LoggerSet, SetError, SetResult};
pub use sink::FileSink;
pub use trace::{CapturedError, Frame};
pub use types::{LogOptions, Severity};
