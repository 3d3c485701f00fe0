//! Error handling for roster.
//!
//! The collection functions themselves never fail. Errors only come from
//! the edges of the crate: reading fixture files, parsing them into typed
//! records, and loading or saving the configuration file.
//!
//! ## Error categories
//!
//! ```
//! use roster::error::RosterError;
//!
//! fn describe(err: &RosterError) -> &'static str {
//!     match err {
//!         RosterError::Io(_) => "could not read a file",
//!         RosterError::Fixture(_) => "a fixture file is malformed",
//!         RosterError::Config(_) => "the config file is malformed",
//!         RosterError::InvalidPath(_) => "a path does not exist",
//!         RosterError::Other(_) => "something else went wrong",
//!     }
//! }
//! ```
//!
//! ## Adding context
//!
//! `ResultExt` adds `.context()` to any `Result` whose error converts into
//! `RosterError`, so the file being processed ends up in the message:
//!
//! ```no_run
//! use roster::error::ResultExt as _;
//!
//! fn read_members() -> roster::error::Result<String> {
//!     std::fs::read_to_string("data/members.json").context("Failed to read members")
//! }
//! ```

use std::fmt;

/// Main error type for roster operations.
#[derive(Debug)]
pub enum RosterError {
    /// I/O errors while reading fixtures or the config file
    Io(std::io::Error),

    /// Fixture data that does not parse into the expected records
    Fixture(String),

    /// Configuration errors
    Config(String),

    /// Directory or file that does not exist
    InvalidPath(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Fixture(msg) => write!(f, "Fixture error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Fixture(_) | Self::Config(_) | Self::InvalidPath(_) | Self::Other(_) => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for RosterError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Fixture(format!("JSON error: {err}"))
    }
}

impl From<RosterError> for String {
    fn from(err: RosterError) -> Self {
        err.to_string()
    }
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error, converted and prefixed with `msg`.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the original error, converted and prefixed with the closure's output.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RosterError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap(e.into(), msg.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap(e.into(), f()))
    }
}

// Keeps the category of the wrapped error so callers can still match on it.
fn wrap(err: RosterError, msg: String) -> RosterError {
    match err {
        RosterError::Fixture(inner) => RosterError::Fixture(format!("{msg}: {inner}")),
        RosterError::Config(inner) => RosterError::Config(format!("{msg}: {inner}")),
        RosterError::InvalidPath(inner) => RosterError::InvalidPath(format!("{msg}: {inner}")),
        RosterError::Io(e) => RosterError::Io(std::io::Error::new(e.kind(), IoContext { msg, source: e })),
        RosterError::Other(inner) => RosterError::Other(format!("{msg}: {inner}")),
    }
}

/// An I/O error with a message in front, keeping the original as its source.
#[derive(Debug)]
struct IoContext {
    msg: String,
    source: std::io::Error,
}

impl fmt::Display for IoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.msg, self.source)
    }
}

impl std::error::Error for IoContext {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RosterError::Fixture("yoga.json is empty".to_owned());
        assert_eq!(err.to_string(), "Fixture error: yoga.json is empty");
    }

    #[test]
    fn test_error_conversion_to_string() {
        let err = RosterError::InvalidPath("data".to_owned());
        let s: String = err.into();
        assert_eq!(s, "Invalid path: data");
    }

    #[test]
    fn test_result_context_keeps_io_kind() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "members.json",
        ));

        let err = result.context("Failed to read fixture").unwrap_err();
        assert!(err.to_string().contains("Failed to read fixture"));
        assert!(matches!(err, RosterError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_io_context_keeps_original_error_as_source() {
        use std::error::Error as _;

        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::from_raw_os_error(2));
        let err = result.context("Failed to read members.json").unwrap_err();

        // RosterError -> contextual io::Error -> original OS error
        let original = err
            .source()
            .and_then(|wrapped| wrapped.source())
            .and_then(|inner| inner.downcast_ref::<std::io::Error>())
            .expect("original error reachable");
        assert_eq!(original.raw_os_error(), Some(2));
        assert!(err.to_string().starts_with("I/O error: Failed to read members.json: "));
    }

    #[test]
    fn test_json_error_becomes_fixture_error() {
        let parse: std::result::Result<Vec<u32>, _> = serde_json::from_str("[1, 2,");
        let err = parse.with_context(|| "yoga.json".to_owned()).unwrap_err();
        assert!(matches!(err, RosterError::Fixture(ref msg) if msg.starts_with("yoga.json: ")));
    }
}
