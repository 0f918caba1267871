//! A named collection of loggers sharing one configuration

use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logger::{LogResult, Logger};
use crate::trace::CapturedError;
use crate::types::{LogOptions, Severity};

use super::error::{SetError, SetResult};

/// A set of loggers built eagerly from a list of names, all sharing the
/// same directory and options
///
/// Members keep their insertion order and are addressed by name. The member
/// list is lock-guarded and each sink write is independently serialized, so
/// the set is safe to share between threads.
pub struct LoggerSet {
    directory: PathBuf,
    options: LogOptions,
    members: RwLock<Vec<Arc<Logger>>>,
}

impl LoggerSet {
    /// Build one logger per distinct name, all sharing `directory` and
    /// `options`.
    ///
    /// A name listed more than once collapses to a single member (the last
    /// construction wins, keeping the first occurrence's position), so every
    /// member is addressable by a unique name. Construction is eager; the
    /// first member that fails to construct aborts the whole set and
    /// surfaces exactly as [`Logger`] construction would.
    pub fn new<I, S>(
        names: I,
        directory: impl Into<PathBuf>,
        options: LogOptions,
    ) -> LogResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let directory = directory.into();
        let mut members: Vec<Arc<Logger>> = Vec::new();
        for name in names {
            let name = name.into();
            let logger = Arc::new(Logger::with_options(name.clone(), &directory, options)?);
            match members.iter().position(|existing| existing.name() == name) {
                Some(position) => members[position] = logger,
                None => members.push(logger),
            }
        }
        Ok(Self {
            directory,
            options,
            members: RwLock::new(members),
        })
    }

    /// Look up a member by name; `None` when `name` is not a member
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.members
            .read()
            .iter()
            .find(|logger| logger.name() == name)
            .cloned()
    }

    /// Replace a member with a freshly constructed logger.
    ///
    /// Reopens the shared sink (picking up external file manipulation) and
    /// resets the member's record counter. Fails with
    /// [`SetError::UnknownLogger`] when `name` is not a member.
    pub fn refresh(&self, name: &str) -> SetResult<()> {
        let mut members = self.members.write();
        let Some(position) = members.iter().position(|logger| logger.name() == name) else {
            return Err(SetError::UnknownLogger(name.to_string()));
        };

        let fresh = Logger::with_options(name, &self.directory, self.options)?;
        fresh.reopen()?;
        members[position] = Arc::new(fresh);
        Ok(())
    }

    /// Deliver one record to each requested member, in the order given.
    ///
    /// Names that are not members are silently skipped. A failing member
    /// does not stop delivery to the rest; failures are collected and
    /// returned together as [`SetError::Propagate`].
    pub fn propagate(
        &self,
        names: &[&str],
        message: &str,
        severity: Severity,
        error: Option<&CapturedError>,
    ) -> SetResult<()> {
        let targets: Vec<Arc<Logger>> = {
            let members = self.members.read();
            names
                .iter()
                .filter_map(|name| {
                    members
                        .iter()
                        .find(|logger| logger.name() == *name)
                        .cloned()
                })
                .collect()
        };
        self.deliver(&targets, message, severity, error)
    }

    /// Deliver one record to every current member, in insertion order
    pub fn propagate_all(
        &self,
        message: &str,
        severity: Severity,
        error: Option<&CapturedError>,
    ) -> SetResult<()> {
        let targets: Vec<Arc<Logger>> = self.members.read().to_vec();
        self.deliver(&targets, message, severity, error)
    }

    fn deliver(
        &self,
        targets: &[Arc<Logger>],
        message: &str,
        severity: Severity,
        error: Option<&CapturedError>,
    ) -> SetResult<()> {
        let mut failures = Vec::new();
        for logger in targets {
            if let Err(err) = logger.log(message, severity, error) {
                failures.push((logger.name().to_string(), err));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(SetError::Propagate { failures })
        }
    }

    /// Remove a member by name; returns whether anything was removed.
    ///
    /// An absent name is a no-op, not an error. The member's log file is
    /// left untouched.
    pub fn remove(&self, name: &str) -> bool {
        let mut members = self.members.write();
        let before = members.len();
        members.retain(|logger| logger.name() != name);
        members.len() != before
    }

    /// Human-readable summary of the set and each member
    pub fn describe(&self) -> String {
        let members = self.members.read();
        let mut out = format!("LoggerSet with {} member(s):\n", members.len());
        for logger in members.iter() {
            let _ = writeln!(out, "  {logger}");
        }
        out
    }

    /// Names of all current members, in insertion order
    pub fn names(&self) -> Vec<String> {
        self.members
            .read()
            .iter()
            .map(|logger| logger.name().to_string())
            .collect()
    }

    /// Number of current members
    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    /// Directory shared by every member
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Options shared by every member
    pub fn options(&self) -> LogOptions {
        self.options
    }
}
