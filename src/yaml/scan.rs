//! Backward scanning over structural lines.
//!
//! Indentation is the only structural signal: the parent of a line is the
//! closest preceding structural line that is strictly less indented. All
//! scans run iteratively inside an excursion, so they leave the point where
//! the caller had it.

use super::buffer::{Buffer, Position};
use super::classify::is_structural;

/// Nearest structural line strictly before `position`.
pub fn previous_structural(buffer: &mut Buffer, position: Position) -> Option<Position> {
    let mut buf = buffer.excursion();
    buf.goto(position);
    while !buf.is_bob() {
        buf.previous_line();
        if is_structural(&mut buf) {
            return Some(buf.line_start());
        }
    }
    None
}

/// Nearest structural line before `position` indented less than
/// `indentation`.
///
/// Lines indented at least as much are skipped, and scanning resumes from
/// them rather than from `position`.
pub fn find_parent(buffer: &mut Buffer, position: Position, indentation: usize) -> Option<Position> {
    let mut from = position;
    loop {
        let candidate = previous_structural(buffer, from)?;
        let candidate_indentation = buffer.document().indentation(candidate);
        if candidate_indentation < indentation {
            log::trace!(
                "line {}: parent is line {} (indent {} < {})",
                position.number(),
                candidate.number(),
                candidate_indentation,
                indentation
            );
            return Some(candidate);
        }
        from = candidate;
    }
}

/// Ancestors of the line at `position`, nearest first.
///
/// Indentation strictly decreases along the chain. The chain is empty for
/// a line with no less-indented structural line above it.
pub fn ancestor_chain(buffer: &mut Buffer, position: Position, indentation: usize) -> Vec<Position> {
    let mut chain = Vec::new();
    let mut current = (position, indentation);
    // nothing can be indented less than column 0
    while current.1 > 0 {
        let Some(parent) = find_parent(buffer, current.0, current.1) else {
            break;
        };
        chain.push(parent);
        current = (parent, buffer.document().indentation(parent));
    }
    log::debug!(
        "line {}: {} ancestor(s)",
        position.number(),
        chain.len()
    );
    chain
}

// =============================================================================
// Unit Tests
// =============================================================================
