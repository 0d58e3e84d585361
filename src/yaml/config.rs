//! Resolver configuration.

use super::buffer::{Document, DEFAULT_TAB_WIDTH};
use super::error::Error;
use super::path::QuoteStyle;

/// Default separator between path segments.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Buffers larger than this (in bytes) get no live path updates.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 1_048_576;

/// Settings for a [`PathResolver`](super::PathResolver) and the hooks
/// driving it.
#[derive(Clone, Debug)]
pub struct Config {
    /// Separator between path segments.
    pub separator: String,
    /// Size above which live updates are disabled.
    pub max_buffer_size: usize,
    /// Quotes used by the index expression form.
    pub quote: QuoteStyle,
    /// Escape separators and backslashes inside tags.
    pub escape: bool,
    /// Columns per tab when measuring indentation.
    pub tab_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
            quote: QuoteStyle::default(),
            escape: false,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.separator.is_empty() {
            return Err(Error::Config("separator must not be empty".into()));
        }
        if self.tab_width == 0 {
            return Err(Error::Config("tab width must be at least 1".into()));
        }
        Ok(())
    }

    /// Whether live (per cursor move) path computation is allowed for
    /// `document`.
    pub fn live_enabled(&self, document: &Document) -> bool {
        document.size() <= self.max_buffer_size
    }
}
