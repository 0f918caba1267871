//! Call-stack frame descriptor

use std::path::{Path, PathBuf};

/// One entry in a call-stack chain
///
/// Frames are read-only snapshots owned by the error they were captured
/// from; a logger only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    line: u32,
    function: String,
    file: PathBuf,
}

impl Frame {
    /// Create a frame from a source line number, enclosing function name,
    /// and file path
    pub fn new(line: u32, function: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            line,
            function: function.into(),
            file: file.into(),
        }
    }

    /// Source line number
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Enclosing function name
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file path
    pub fn file(&self) -> &Path {
        &self.file
    }
}
