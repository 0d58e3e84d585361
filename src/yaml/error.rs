//! Error types for path resolution.
//!
//! Only host-side failures end up here (unreadable input, a line number
//! outside the document, an unusable configuration). "No parent", "no
//! predecessor" and "not on a structural line" are plain `None` values.

use std::io;

/// Error type for YAML path operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading the document
    Io(String),
    /// Line addressing error
    Line(String),
    /// Invalid configuration value
    Config(String),
    /// Generic error
    Base(String),
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Base(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Base(e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::Line(e) => write!(f, "{}", e),
            Error::Config(e) => write!(f, "invalid configuration: {}", e),
            Error::Base(e) => write!(f, "{}", e),
        }
    }
}
