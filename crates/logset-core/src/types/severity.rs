//! Log severity levels

use std::fmt;
use std::str::FromStr;

use crate::logger::LogError;

/// Recognized severity of a log record
///
/// The backing file is configured at the most verbose level, so every
/// severity reaches the sink; the severity name is carried into the console
/// echo when a logger is constructed with `printed` enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Debug,
    Warning,
    Critical,
}

impl Severity {
    /// All recognized severities
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warning,
        Severity::Critical,
    ];

    /// Lowercase name of this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    /// Parses a severity name, rejecting anything outside the recognized set
    /// with [`LogError::UnknownSeverity`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            _ => Err(LogError::UnknownSeverity(s.to_string())),
        }
    }
}
