//! Process-wide sink registry keyed by log-file path

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::logger::{LogError, LogResult};

use super::file::FileSink;

/// Global registry of open sinks
static SINKS: Lazy<RwLock<HashMap<PathBuf, Arc<FileSink>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Acquire the shared sink for `{directory}/{name}.log`.
///
/// Creates `directory` if it is absent (single level only; a deeper missing
/// path is a configuration error). Returns the already-registered handle
/// when one exists for the path, otherwise opens the file in append mode
/// and registers it.
///
/// Registered sinks stay open for the process lifetime: the registry keeps
/// a strong handle even after every logger for a path is dropped, so a
/// later logger for the same path reuses it. There is no eviction.
pub fn acquire(directory: &Path, name: &str) -> LogResult<Arc<FileSink>> {
    ensure_directory(directory)?;
    let path = directory.join(format!("{name}.log"));

    if let Some(sink) = SINKS.read().get(&path) {
        return Ok(Arc::clone(sink));
    }

    let mut sinks = SINKS.write();
    // Another thread may have opened it between the read and write locks
    if let Some(sink) = sinks.get(&path) {
        return Ok(Arc::clone(sink));
    }

    let sink = FileSink::open(path.clone())
        .map_err(|source| LogError::open_sink(path.clone(), source))?;
    let sink = Arc::new(sink);
    sinks.insert(path, Arc::clone(&sink));
    Ok(sink)
}

fn ensure_directory(directory: &Path) -> LogResult<()> {
    match fs::create_dir(directory) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(LogError::create_directory(directory.to_path_buf(), source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_path_shares_one_sink() {
        let dir = tempfile::tempdir().unwrap();
        let first = acquire(dir.path(), "shared").unwrap();
        let second = acquire(dir.path(), "shared").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_different_names_get_distinct_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let a = acquire(dir.path(), "a").unwrap();
        let b = acquire(dir.path(), "b").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("logs");
        assert!(!target.exists());
        acquire(&target, "a").unwrap();
        assert!(target.join("a.log").exists());
    }

    #[test]
    fn test_deeper_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("logs");
        let err = acquire(&target, "a").unwrap_err();
        assert!(matches!(err, LogError::CreateDirectory { .. }));
    }
}
