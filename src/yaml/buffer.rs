//! Text buffer model: documents, line positions and a movable point.
//!
//! The resolver only ever talks to a [`Buffer`] through a handful of
//! editor-like primitives (go to a line, step to the previous line, move to
//! the indentation column, look at the text after point). Any internal
//! movement happens inside an [`Excursion`], which puts the point back where
//! it was when it goes out of scope.

use super::error::Error;
use super::lexer::{self, Quote, Syntax};
use regex::Regex;
use std::io::Read;
use std::ops::{Deref, DerefMut};

/// Default number of columns a tab advances to.
pub const DEFAULT_TAB_WIDTH: usize = 8;

// =============================================================================
// Document
// =============================================================================

/// Handle on the start of a line. Ordered by document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// Zero-based line index.
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based line number, as shown to users.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

#[derive(Debug)]
struct Line {
    text: String,
    start: Quote,
}

/// An immutable sequence of lines.
#[derive(Debug)]
pub struct Document {
    lines: Vec<Line>,
    tab_width: usize,
    size: usize,
}

impl Document {
    #[cfg(test)]
    pub fn new(text: &str) -> Self {
        Self::with_tab_width(text, DEFAULT_TAB_WIDTH)
    }

    pub fn with_tab_width(text: &str, tab_width: usize) -> Self {
        let mut texts: Vec<&str> = text.lines().collect();
        if texts.is_empty() {
            texts.push("");
        }
        let states = lexer::line_start_states(texts.iter().copied());
        let lines = texts
            .into_iter()
            .zip(states)
            .map(|(text, start)| Line {
                text: text.to_string(),
                start,
            })
            .collect();
        Self {
            lines,
            tab_width: tab_width.max(1),
            size: text.len(),
        }
    }

    /// Read a whole document from `reader`.
    pub fn from_reader(mut reader: impl Read, tab_width: usize) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::with_tab_width(&text, tab_width))
    }

    /// Size of the source text in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn positions(&self) -> impl DoubleEndedIterator<Item = Position> {
        (0..self.lines.len()).map(Position)
    }

    /// Position of the 1-based line `number`.
    pub fn position(&self, number: usize) -> Result<Position, Error> {
        if number == 0 || number > self.lines.len() {
            return Err(Error::Line(format!(
                "line {} is out of range ({} lines in document).",
                number,
                self.lines.len()
            )));
        }
        Ok(Position(number - 1))
    }

    pub fn text(&self, position: Position) -> &str {
        &self.lines[position.index()].text
    }

    /// Byte offset of the first non-blank character of the line.
    fn indentation_offset(&self, position: Position) -> usize {
        let text = self.text(position);
        text.len() - text.trim_start_matches([' ', '\t']).len()
    }

    /// Column reached at byte `offset` of the line, with tabs expanded.
    fn column_at(&self, position: Position, offset: usize) -> usize {
        self.text(position)[..offset]
            .chars()
            .fold(0, |col, c| self.advance(col, c))
    }

    fn advance(&self, column: usize, c: char) -> usize {
        if c == '\t' {
            (column / self.tab_width + 1) * self.tab_width
        } else {
            column + 1
        }
    }

    /// Indentation of the line in columns.
    pub fn indentation(&self, position: Position) -> usize {
        self.column_at(position, self.indentation_offset(position))
    }

    fn syntax_at(&self, position: Position, offset: usize) -> Syntax {
        let line = &self.lines[position.index()];
        lexer::syntax_at(&line.text, line.start, offset)
    }
}

// =============================================================================
// Buffer
// =============================================================================

/// A cursor location: a line plus a byte offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub position: Position,
    pub offset: usize,
}

/// A document with a point that can be moved around.
#[derive(Debug)]
pub struct Buffer {
    document: Document,
    point: Point,
}

impl Buffer {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            point: Point {
                position: Position(0),
                offset: 0,
            },
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// Start of the line holding the point.
    pub fn line_start(&self) -> Position {
        self.point.position
    }

    pub fn goto(&mut self, position: Position) {
        self.point = Point {
            position,
            offset: 0,
        };
    }

    /// Move to the start of the 1-based line `number`.
    pub fn goto_line(&mut self, number: usize) -> Result<(), Error> {
        let position = self.document.position(number)?;
        self.goto(position);
        Ok(())
    }

    /// Move to the start of the previous line.
    ///
    /// On the first line, moves to its start and returns `false`.
    pub fn previous_line(&mut self) -> bool {
        match self.point.position.index().checked_sub(1) {
            Some(index) => {
                self.goto(Position(index));
                true
            }
            None => {
                self.point.offset = 0;
                false
            }
        }
    }

    pub fn is_bob(&self) -> bool {
        self.point.position.index() == 0 && self.at_line_start()
    }

    pub fn at_line_start(&self) -> bool {
        self.point.offset == 0
    }

    pub fn at_eol(&self) -> bool {
        self.point.offset >= self.document.text(self.point.position).len()
    }

    pub fn back_to_indentation(&mut self) {
        self.point.offset = self.document.indentation_offset(self.point.position);
    }

    /// Move forward from the line start until `column` is reached, or the
    /// end of line. Returns the column actually reached.
    pub fn move_to_column(&mut self, column: usize) -> usize {
        let text = self.document.text(self.point.position);
        let mut current = 0;
        let mut offset = text.len();
        for (i, c) in text.char_indices() {
            if current >= column {
                offset = i;
                break;
            }
            current = self.document.advance(current, c);
        }
        self.point.offset = offset;
        current
    }

    pub fn current_indentation(&self) -> usize {
        self.document.indentation(self.point.position)
    }

    /// Text from point to the end of its line.
    pub fn rest_of_line(&self) -> &str {
        &self.document.text(self.point.position)[self.point.offset..]
    }

    /// Whether `re` matches the text right at point.
    pub fn looking_at(&self, re: &Regex) -> bool {
        re.find(self.rest_of_line())
            .is_some_and(|m| m.start() == 0)
    }

    /// Whether the character at point belongs to a comment.
    pub fn in_comment(&self) -> bool {
        self.document
            .syntax_at(self.point.position, self.point.offset)
            == Syntax::Comment
    }

    /// The leading token starting at point, if any.
    pub fn token_at_point(&self) -> Option<&str> {
        if self.at_eol() {
            return None;
        }
        crate::tag::leading_token(self.rest_of_line())
    }

    /// Save the point; it is restored when the returned guard is dropped.
    pub fn excursion(&mut self) -> Excursion<'_> {
        let saved = self.point;
        Excursion {
            buffer: self,
            saved,
        }
    }
}

/// Scoped point save/restore.
pub struct Excursion<'a> {
    buffer: &'a mut Buffer,
    saved: Point,
}

impl Deref for Excursion<'_> {
    type Target = Buffer;

    fn deref(&self) -> &Buffer {
        self.buffer
    }
}

impl DerefMut for Excursion<'_> {
    fn deref_mut(&mut self) -> &mut Buffer {
        self.buffer
    }
}

impl Drop for Excursion<'_> {
    fn drop(&mut self) {
        self.buffer.point = self.saved;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
