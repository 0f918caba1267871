//! Append-mode file sink

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// A shared append-mode handle to one log file
///
/// Writes are serialized through an internal lock, so a sink shared by
/// several loggers (or threads) stays safe without external coordination.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open (creating if absent) the log file at `path` in append mode
    pub(crate) fn open(path: PathBuf) -> io::Result<Self> {
        let file = Self::open_append(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    fn open_append(path: &Path) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record block and flush.
    ///
    /// Blocking and fire-and-forget: a failed write surfaces immediately,
    /// with no retry or buffering.
    pub fn append(&self, block: &str) -> io::Result<()> {
        let mut file = self.file.lock();
        file.write_all(block.as_bytes())?;
        file.flush()
    }

    /// Replace the handle with a freshly opened one.
    ///
    /// Used after the file was manipulated externally (truncated, moved
    /// away); every logger sharing this sink picks up the fresh handle.
    pub fn reopen(&self) -> io::Result<()> {
        let fresh = Self::open_append(&self.path)?;
        *self.file.lock() = fresh;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_append_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.log");
        let sink = FileSink::open(path.clone()).unwrap();

        sink.append("first\n").unwrap();
        sink.append("second\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_reopen_after_external_truncation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.log");
        let sink = FileSink::open(path.clone()).unwrap();

        sink.append("old\n").unwrap();
        fs::write(&path, "").unwrap();
        sink.reopen().unwrap();
        sink.append("new\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "new\n");
    }
}
