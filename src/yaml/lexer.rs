//! Lexical state oracle.
//!
//! Answers "is this character code, part of a quoted scalar, or part of a
//! comment?" for any offset of any line. Quoted scalars may span lines, so
//! every line carries the quoting state it starts in; [`line_start_states`]
//! computes those once for a whole document.
//!
//! This is deliberately not a YAML tokenizer: block scalars (`|`, `>`) are
//! not tracked and a `#` inside them is seen as a comment.

/// Quoting state at a given point of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    None,
    Single,
    Double,
}

/// Lexical class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Code,
    String,
    Comment,
}

struct Scanner {
    quote: Quote,
    comment: bool,
    escaped: bool,
    prev: Option<char>,
    /// No plain character read since the last node start.
    node_start: bool,
    /// Open flow collections on this line.
    flow_depth: usize,
}

impl Scanner {
    fn new(quote: Quote) -> Self {
        Self {
            quote,
            comment: false,
            escaped: false,
            prev: None,
            node_start: true,
            flow_depth: 0,
        }
    }

    /// Classify `c`, then advance the state past it.
    fn step(&mut self, c: char, next: Option<char>) -> Syntax {
        let syntax = if self.comment {
            Syntax::Comment
        } else {
            match self.quote {
                Quote::Double => {
                    if self.escaped {
                        self.escaped = false;
                    } else if c == '\\' {
                        self.escaped = true;
                    } else if c == '"' {
                        self.quote = Quote::None;
                    }
                    Syntax::String
                }
                Quote::Single => {
                    if self.escaped {
                        self.escaped = false;
                    } else if c == '\'' {
                        // '' is an escaped quote
                        if next == Some('\'') {
                            self.escaped = true;
                        } else {
                            self.quote = Quote::None;
                        }
                    }
                    Syntax::String
                }
                Quote::None => {
                    if c == '#' && self.prev.map_or(true, char::is_whitespace) {
                        self.comment = true;
                        Syntax::Comment
                    } else if (c == '"' || c == '\'') && self.node_start {
                        self.quote = if c == '"' { Quote::Double } else { Quote::Single };
                        self.node_start = false;
                        Syntax::String
                    } else {
                        self.plain(c, next);
                        Syntax::Code
                    }
                }
            }
        };
        self.prev = Some(c);
        syntax
    }

    /// Track where the next node may start, outside quotes and comments.
    fn plain(&mut self, c: char, next: Option<char>) {
        let separated = next.map_or(true, char::is_whitespace);
        match c {
            c if c.is_whitespace() => {}
            ':' if separated => self.node_start = true,
            '-' | '?' if separated && self.node_start => {}
            '[' | '{' if self.node_start || self.flow_depth > 0 => {
                self.flow_depth += 1;
                self.node_start = true;
            }
            ']' | '}' if self.flow_depth > 0 => {
                self.flow_depth -= 1;
                self.node_start = false;
            }
            ',' if self.flow_depth > 0 => self.node_start = true,
            _ => self.node_start = false,
        }
    }

    fn pending(&self) -> Syntax {
        if self.comment {
            Syntax::Comment
        } else if self.quote != Quote::None {
            Syntax::String
        } else {
            Syntax::Code
        }
    }
}

/// Quoting state in effect once the whole of `text` has been read.
pub fn quote_after(text: &str, start: Quote) -> Quote {
    let mut scanner = Scanner::new(start);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        scanner.step(c, chars.peek().copied());
    }
    scanner.quote
}

/// Quoting state at the start of each line.
pub fn line_start_states<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Quote> {
    let mut states = Vec::new();
    let mut state = Quote::None;
    for line in lines {
        states.push(state);
        state = quote_after(line, state);
    }
    states
}

/// Lexical class of the character at byte `offset` of `text`.
///
/// Past the end of the line, reports the state the line ends in.
pub fn syntax_at(text: &str, start: Quote, offset: usize) -> Syntax {
    let mut scanner = Scanner::new(start);
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        let syntax = scanner.step(c, next);
        if i >= offset {
            return syntax;
        }
    }
    scanner.pending()
}

// =============================================================================
// Unit Tests
// =============================================================================
