//! One named logger writing timestamped records to a file

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local, Timelike};

use crate::sink::{self, FileSink};
use crate::trace::{render, CapturedError};
use crate::types::{LogOptions, Severity};

use super::error::{LogError, LogResult};

/// Line of dashes closing every record
const RECORD_SEPARATOR: &str = "--------------------";

/// A named logger owning one file-backed destination
///
/// Writes one record per [`log`](Logger::log) call to
/// `{directory}/{name}.log`, optionally echoing it to stdout and optionally
/// expanding a captured error into a trace block. Loggers built for the
/// same `(directory, name)` share a single sink handle, so their records
/// interleave safely.
pub struct Logger {
    name: String,
    directory: PathBuf,
    options: LogOptions,
    sink: Arc<FileSink>,
    log_count: AtomicU64,
    created_at: DateTime<Local>,
}

impl Logger {
    /// Create a logger with default options (no echo, no traceback)
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> LogResult<Self> {
        Self::with_options(name, directory, LogOptions::default())
    }

    /// Create a logger with explicit options.
    ///
    /// Ensures `directory` exists (single level) and acquires the shared
    /// sink for `{directory}/{name}.log`. Construction failure is fatal to
    /// this logger and surfaces to the caller.
    pub fn with_options(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        options: LogOptions,
    ) -> LogResult<Self> {
        let name = name.into();
        let directory = directory.into();
        let sink = sink::acquire(&directory, &name)?;
        Ok(Self {
            name,
            directory,
            options,
            sink,
            log_count: AtomicU64::new(0),
            created_at: Local::now(),
        })
    }

    /// Write one record.
    ///
    /// The record carries a `{date} {hour}:{minute} | {message}` line, the
    /// rendered trace block when the logger was built with `traceback` and
    /// an error is supplied, and a closing separator line. With `printed`
    /// the same block goes to stdout, prefixed with a full timestamp and
    /// the severity name. A failed write surfaces as [`LogError::Write`];
    /// there is no retry.
    pub fn log(
        &self,
        message: &str,
        severity: Severity,
        error: Option<&CapturedError>,
    ) -> LogResult<()> {
        let now = Local::now();
        let block = self.format_record(now, message, error);

        if self.options.printed {
            print!("{} - {} - {}", now.format("%Y-%m-%d %H:%M:%S"), severity, block);
        }

        self.sink
            .append(&block)
            .map_err(|source| LogError::write(self.sink.path(), source))?;
        self.log_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn format_record(
        &self,
        now: DateTime<Local>,
        message: &str,
        error: Option<&CapturedError>,
    ) -> String {
        // Hour and minute are intentionally unpadded in the record line
        let mut block = format!(
            "{} {}:{} | {}\n",
            now.format("%Y-%m-%d"),
            now.hour(),
            now.minute(),
            message,
        );
        if self.options.traceback {
            if let Some(error) = error {
                block.push_str(&render(error));
            }
        }
        block.push_str(RECORD_SEPARATOR);
        block.push('\n');
        block
    }

    /// Reopen the underlying sink handle.
    ///
    /// Useful after the log file was manipulated externally; every logger
    /// sharing the sink picks up the fresh handle.
    pub fn reopen(&self) -> LogResult<()> {
        self.sink
            .reopen()
            .map_err(|source| LogError::open_sink(self.sink.path(), source))
    }

    /// Logger name (also the log file's base name)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory holding the log file
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of the log file
    pub fn path(&self) -> &Path {
        self.sink.path()
    }

    /// Options this logger was built with
    pub fn options(&self) -> LogOptions {
        self.options
    }

    /// Number of records written through this logger instance
    pub fn log_count(&self) -> u64 {
        self.log_count.load(Ordering::Relaxed)
    }

    /// When this logger instance was created
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("path", &self.sink.path())
            .field("options", &self.options)
            .field("log_count", &self.log_count())
            .finish()
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Logger '{}' -> {} ({} records, created {})",
            self.name,
            self.sink.path().display(),
            self.log_count(),
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}
