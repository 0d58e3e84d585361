//! Line classification: blank, comment or structural.

use super::buffer::Buffer;
use regex::Regex;
use std::sync::OnceLock;

/// What a line contributes to the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Structural,
}

fn blank_line() -> &'static Regex {
    static BLANK_LINE: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE.get_or_init(|| Regex::new(r"^\s*$").expect("blank line pattern is valid"))
}

/// Classify the line holding the point. The point is left untouched.
pub fn classify(buffer: &mut Buffer) -> LineKind {
    let mut buf = buffer.excursion();
    let start = buf.line_start();
    buf.goto(start);
    if buf.looking_at(blank_line()) {
        return LineKind::Blank;
    }
    buf.back_to_indentation();
    if buf.in_comment() {
        return LineKind::Comment;
    }
    LineKind::Structural
}

pub fn is_structural(buffer: &mut Buffer) -> bool {
    classify(buffer) == LineKind::Structural
}
