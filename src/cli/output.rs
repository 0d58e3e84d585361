//! Output formatting for resolved paths.

use crate::yaml::Ancestor;
use colored::*;

// =============================================================================
// OutputPolicy
// =============================================================================

/// Type of separator between output items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Separator {
    /// Newline-separated output (standard mode).
    Newline,
    /// Null-terminated output (for -0 variants).
    Nul,
}

impl Separator {
    /// Get the separator string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Newline => "\n",
            Separator::Nul => "\0",
        }
    }
}

/// Policy for formatting listings.
#[derive(Clone, Debug)]
pub struct OutputPolicy {
    pub separator: Separator,
}

impl OutputPolicy {
    pub fn newline() -> Self {
        Self {
            separator: Separator::Newline,
        }
    }

    pub fn nul() -> Self {
        Self {
            separator: Separator::Nul,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Render `(line, path)` entries.
///
/// Newline mode gives one `LINE:PATH` per line; NUL mode terminates both
/// the line number and the path with a NUL char.
pub fn format_entries<'a>(
    entries: impl IntoIterator<Item = (usize, &'a str)>,
    policy: &OutputPolicy,
) -> String {
    let sep = policy.separator.as_str();
    let mut out = String::new();
    for (line, path) in entries {
        match policy.separator {
            Separator::Newline => {
                out.push_str(&format!("{}:{}{}", line, path, sep));
            }
            Separator::Nul => {
                out.push_str(&format!("{}{}{}{}", line, sep, path, sep));
            }
        }
    }
    out
}

/// Render a chain as `LINE:INDENT:TAG` lines, root first.
pub fn format_chain(chain: &[Ancestor]) -> String {
    let mut out = String::new();
    let last = chain.len().saturating_sub(1);
    for (i, ancestor) in chain.iter().enumerate() {
        let tag = if i == last {
            ancestor.tag.as_str().bold()
        } else {
            ancestor.tag.as_str().normal()
        };
        out.push_str(&format!(
            "{}:{}:{}\n",
            ancestor.position.number().to_string().as_str().bright_black(),
            ancestor.indentation,
            tag
        ));
    }
    out
}

/// Print lines numbers, one per line.
pub fn print_lines(lines: impl Iterator<Item = usize>) {
    for line in lines {
        println!("{}", line);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
