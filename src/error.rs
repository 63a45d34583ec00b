//! Library error types.
//!
//! Every lookup failure maps onto one of these variants. The suggestion
//! pipeline logs them and degrades to an empty result; only the CLI and the
//! fallible `lookup` path ever surface them to a caller.

use thiserror::Error;

/// Library result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types with enough context to explain a failed lookup
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Query text does not contain a `<book><chapter>:<verses>` reference
    #[error("No scripture reference found in {0:?}")]
    ReferenceMismatch(String),

    /// Korean book alias is not in the book table
    #[error("Unknown book name: {0}")]
    UnresolvedBook(String),

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Verse endpoint answered with a non-success status
    #[error("Verse endpoint error: {message}")]
    Remote {
        /// Human-readable error description.
        message: String,
        /// HTTP status code.
        status: u16,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Verse payload parsed but contained no verse markers
    #[error("No verses found for {0}")]
    EmptyPassage(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Settings file could not be read or written as JSON
    #[error("Settings error in {file:?}: {message}")]
    Settings {
        /// Settings file involved, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the failure.
        message: String,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a remote endpoint error with an HTTP status
    pub fn remote_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            400 => Some("The endpoint rejected the reference - check the chapter and verse numbers"),
            404 => Some("The verse endpoint URL may be wrong - check KORBIBLE_ENDPOINT"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Verse server error - try again later"),
            _ => None,
        };
        Self::Remote {
            message: message.into(),
            status,
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a settings error with file context
    pub fn settings(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Settings { file: file.into(), message: message.into() }
    }

    /// Whether this failure came from the query itself rather than the network.
    ///
    /// Query failures happen on nearly every keystroke while a reference is
    /// being typed, so callers log them at a lower level.
    pub const fn is_query_error(&self) -> bool {
        matches!(self, Self::ReferenceMismatch(_) | Self::UnresolvedBook(_))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn remote_status_provides_hints() {
        let err = Error::remote_status("Server exploded", 503);
        match err {
            Error::Remote { hint: Some(h), status, .. } => {
                assert_eq!(status, 503);
                assert!(h.contains("try again later"));
            }
            _ => panic!("Expected Remote error with hint"),
        }
    }

    #[test]
    fn unknown_status_has_no_hint() {
        let err = Error::remote_status("Teapot", 418);
        assert!(matches!(err, Error::Remote { hint: None, .. }));
    }

    #[test]
    fn query_errors_are_classified() {
        assert!(Error::ReferenceMismatch("hello".into()).is_query_error());
        assert!(Error::UnresolvedBook("서".into()).is_query_error());
        assert!(!Error::Network("refused".into()).is_query_error());
        assert!(!Error::EmptyPassage("창세기 1:1".into()).is_query_error());
    }
}
