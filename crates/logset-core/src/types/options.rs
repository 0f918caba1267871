//! Shared construction options

/// Construction settings shared by a [`Logger`](crate::Logger) and by every
/// member of a [`LoggerSet`](crate::LoggerSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Echo every record to stdout
    pub printed: bool,
    /// Expand a supplied captured error into a call-stack trace block
    pub traceback: bool,
}

impl LogOptions {
    /// Create options with both flags off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether records are echoed to stdout
    pub fn printed(mut self, printed: bool) -> Self {
        self.printed = printed;
        self
    }

    /// Set whether captured errors are expanded into trace blocks
    pub fn traceback(mut self, traceback: bool) -> Self {
        self.traceback = traceback;
        self
    }
}
