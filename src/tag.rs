//! Leading token extraction.
//!
//! A line's tag is the first token found at its indentation column: usually
//! a mapping key, otherwise the scalar or indicator the line starts with.
//! This is a small scanner, not a YAML lexer.
//!
//! # Token Boundaries
//!
//! - Quoted: `"key"` / `'key'`, quotes included, up to the closing quote
//! - Flow: `[a, b]` / `{a: b}`, up to the matching bracket
//! - Plain: up to whitespace, a `:` followed by whitespace or end of line,
//!   or a flow indicator (`,`, `[`, `]`, `{`, `}`)
//!
//! The token is returned verbatim: no unescaping, no quote stripping.

use crate::yaml::buffer::{Buffer, Position};

/// Return the leading token of `text`.
///
/// Returns `None` when `text` is empty or starts with whitespace. So
/// `foo: 1` gives `foo`, `"a b": 1` gives `"a b"` and `- item` gives `-`.
pub fn leading_token(text: &str) -> Option<&str> {
    let first = text.chars().next()?;
    if first.is_whitespace() {
        return None;
    }

    let end = match first {
        '"' => double_quoted_end(text),
        '\'' => single_quoted_end(text),
        '[' | '{' => flow_end(text),
        _ => plain_end(text),
    };

    if end == 0 {
        // The line starts with an indicator that ends a plain token
        return Some(&text[..first.len_utf8()]);
    }
    Some(&text[..end])
}

/// Byte offset just past the closing `"`, or the end of `text`.
fn double_quoted_end(text: &str) -> usize {
    let mut escaped = false;
    for (i, c) in text.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return i + 1,
            _ => {}
        }
    }
    text.len()
}

/// Byte offset just past the closing `'`, or the end of `text`.
fn single_quoted_end(text: &str) -> usize {
    let mut chars = text.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\'' {
            if let Some(&(_, '\'')) = chars.peek() {
                chars.next();
                continue;
            }
            return i + 1;
        }
    }
    text.len()
}

/// Byte offset just past the bracket balancing the opening one.
fn flow_end(text: &str) -> usize {
    let mut depth: u32 = 0;
    for (i, c) in text.char_indices() {
        match c {
            '[' | '{' => depth += 1,
            ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
    }
    text.len()
}

/// Byte offset where a plain token stops.
fn plain_end(text: &str) -> usize {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => return i,
            ',' | '[' | ']' | '{' | '}' => return i,
            ':' => match chars.peek() {
                None => return i,
                Some(&(_, next)) if next.is_whitespace() => return i,
                _ => {}
            },
            _ => {}
        }
    }
    text.len()
}

/// Tag of the line at `position`: its leading token at the indentation
/// column, or an empty string if there is none.
pub fn tag_at(buffer: &mut Buffer, position: Position) -> String {
    let mut buf = buffer.excursion();
    buf.goto(position);
    let indentation = buf.current_indentation();
    buf.move_to_column(indentation);
    buf.token_at_point().map(str::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::buffer::Document;

    // ==========================================================================
    // Plain tokens
    // ==========================================================================

    #[test]
    fn test_plain_key() {
        assert_eq!(leading_token("foo: bar"), Some("foo"));
        assert_eq!(leading_token("foo:"), Some("foo"));
        assert_eq!(leading_token("foo:\tbar"), Some("foo"));
    }

    #[test]
    fn test_plain_scalar() {
        assert_eq!(leading_token("value"), Some("value"));
        assert_eq!(leading_token("two words"), Some("two"));
    }

    #[test]
    fn test_colon_without_space_is_part_of_token() {
        assert_eq!(
            leading_token("http://example.com: up"),
            Some("http://example.com")
        );
        assert_eq!(leading_token("a:b"), Some("a:b"));
    }

    #[test]
    fn test_key_with_dots_and_dashes() {
        assert_eq!(leading_token("app.kubernetes.io/name: x"), Some("app.kubernetes.io/name"));
        assert_eq!(leading_token("max-size: 3"), Some("max-size"));
    }

    #[test]
    fn test_plain_stops_at_flow_indicator() {
        assert_eq!(leading_token("a,b"), Some("a"));
        assert_eq!(leading_token("key{x}"), Some("key"));
    }

    #[test]
    fn test_unicode_key() {
        assert_eq!(leading_token("clé: valeur"), Some("clé"));
    }

    // ==========================================================================
    // Indicators
    // ==========================================================================

    #[test]
    fn test_sequence_indicator() {
        assert_eq!(leading_token("- name: x"), Some("-"));
        assert_eq!(leading_token("-"), Some("-"));
    }

    #[test]
    fn test_negative_number_is_plain() {
        assert_eq!(leading_token("-12"), Some("-12"));
    }

    #[test]
    fn test_leading_indicator_yields_single_char() {
        assert_eq!(leading_token(": value"), Some(":"));
        assert_eq!(leading_token(", x"), Some(","));
    }

    // ==========================================================================
    // Quoted and flow tokens
    // ==========================================================================

    #[test]
    fn test_double_quoted_key() {
        assert_eq!(leading_token(r#""a b": 1"#), Some(r#""a b""#));
        assert_eq!(leading_token(r#""a\"b": 1"#), Some(r#""a\"b""#));
    }

    #[test]
    fn test_single_quoted_key() {
        assert_eq!(leading_token("'it''s': 1"), Some("'it''s'"));
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(leading_token("\"open: 1"), Some("\"open: 1"));
    }

    #[test]
    fn test_flow_collection() {
        assert_eq!(leading_token("[a, [b]]: x"), Some("[a, [b]]"));
        assert_eq!(leading_token("{a: 1} # c"), Some("{a: 1}"));
        assert_eq!(leading_token("[a, b"), Some("[a, b"));
    }

    // ==========================================================================
    // Empty input
    // ==========================================================================

    #[test]
    fn test_no_token() {
        assert_eq!(leading_token(""), None);
        assert_eq!(leading_token("  foo"), None);
    }

    // ==========================================================================
    // tag_at()
    // ==========================================================================

    #[test]
    fn test_tag_at_uses_indentation_column() {
        let mut buffer = Buffer::new(Document::new("a:\n    nested: 1\n"));
        let line = buffer.document().position(2).unwrap();
        assert_eq!(tag_at(&mut buffer, line), "nested");
        // point untouched
        assert_eq!(buffer.point().position.number(), 1);
    }

    #[test]
    fn test_tag_at_blank_line_is_empty() {
        let mut buffer = Buffer::new(Document::new("a:\n   \n"));
        let line = buffer.document().position(2).unwrap();
        assert_eq!(tag_at(&mut buffer, line), "");
    }
}
