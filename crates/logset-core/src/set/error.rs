//! Logger set error types

use thiserror::Error;

use crate::logger::LogError;

/// Errors that can occur while operating on a logger set
#[derive(Debug, Error)]
pub enum SetError {
    /// Refresh was asked for a name that is not a member
    #[error("no such logger: {0}")]
    UnknownLogger(String),

    /// One or more members failed while a message was propagated
    #[error("propagation failed for {} member(s): {}", .failures.len(), describe_failures(.failures))]
    Propagate {
        /// Failing member name paired with its error, in delivery order
        failures: Vec<(String, LogError)>,
    },

    /// A member logger could not be rebuilt
    #[error(transparent)]
    Logger(#[from] LogError),
}

fn describe_failures(failures: &[(String, LogError)]) -> String {
    failures
        .iter()
        .map(|(name, err)| format!("{name}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type SetResult<T> = Result<T, SetError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_propagate_error_names_each_failure() {
        let err = SetError::Propagate {
            failures: vec![
                (
                    "a".to_string(),
                    LogError::write("a.log", io::Error::other("disk full")),
                ),
                (
                    "b".to_string(),
                    LogError::write("b.log", io::Error::other("disk full")),
                ),
            ],
        };
        let text = err.to_string();
        assert!(text.contains("2 member(s)"));
        assert!(text.contains("a:"));
        assert!(text.contains("b:"));
    }
}
