//! Logger error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while constructing or writing a logger
#[derive(Debug, Error)]
pub enum LogError {
    /// Log directory could not be created
    #[error("cannot create log directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Log file could not be opened
    #[error("cannot open log file {path}: {source}")]
    OpenSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Severity name outside {info, debug, warning, critical}
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    /// Appending a record to the log file failed
    #[error("cannot write to log file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// Create a directory-creation error
    pub fn create_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDirectory {
            path: path.into(),
            source,
        }
    }

    /// Create a sink-open error
    pub fn open_sink(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenSink {
            path: path.into(),
            source,
        }
    }

    /// Create a sink-write error
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
