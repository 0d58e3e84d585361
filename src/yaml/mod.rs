//! Indentation-based YAML path resolution.
//!
//! Finds the structural path (`foo.bar.baz`) of any line of a YAML document
//! without parsing it: the parent of a line is the nearest preceding line,
//! blank lines and comments aside, that is strictly less indented.
//!
//! # Module Organization
//!
//! - [`error`]: Error types
//! - [`buffer`]: Document, line positions and the movable point
//! - [`lexer`]: Comment/string state of any character
//! - [`classify`]: Blank, comment and structural lines
//! - [`scan`]: Backward scanning and the ancestor chain
//! - [`path`]: Joining, escaping and splitting paths; index expressions
//! - [`config`]: Resolver settings
//! - [`resolver`]: Path queries at the point
//! - [`hook`]: Observers driven by cursor movement

pub mod buffer;
pub mod classify;
pub mod config;
mod error;
pub mod hook;
pub mod lexer;
pub mod path;
pub mod resolver;
pub mod scan;

// Re-export error type
pub use error::Error;

// Re-export the buffer model
pub use buffer::{Buffer, Document, Point};

// Re-export configuration
pub use config::Config;
pub use path::QuoteStyle;

// Re-export resolver and hooks
pub use hook::PathHooks;
pub use resolver::{Ancestor, PathResolver};

// =============================================================================
// Loading
// =============================================================================

/// Read a document from `file`, or from stdin when `file` is `None`.
pub fn load_document(file: Option<&str>, tab_width: usize) -> Result<Document, Error> {
    match file {
        Some(name) => {
            let handle = std::fs::File::open(name)
                .map_err(|e| Error::Io(format!("cannot open '{}': {}", name, e)))?;
            Document::from_reader(handle, tab_width)
        }
        None => Document::from_reader(std::io::stdin().lock(), tab_width),
    }
}
