//! Path string handling.
//!
//! Tags are raw key text, so a key may itself contain the separator. When
//! escaping is on, backslashes and separators inside a tag are prefixed
//! with `\`, which [`split_path`] undoes: `a.b\.c.d` splits into
//! `["a", "b.c", "d"]`.

/// Escape backslashes and occurrences of `separator` in `key`.
pub fn escape_key(key: &str, separator: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    let mut rest = key;
    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            escaped.push_str("\\\\");
            rest = &rest[1..];
        } else if !separator.is_empty() && rest.starts_with(separator) {
            escaped.push('\\');
            escaped.push_str(separator);
            rest = &rest[separator.len()..];
        } else {
            escaped.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    escaped
}

/// Split a path into its components on `separator`.
///
/// Handles escape sequences: `\<separator>` for a literal separator, `\\`
/// for a literal backslash. A trailing lone backslash is dropped.
pub fn split_path(path: &str, separator: &str) -> Vec<String> {
    let mut elements = Vec::new();
    let mut escaped = false;
    let mut element = String::new();
    let mut rest = path;

    while let Some(c) = rest.chars().next() {
        if escaped {
            escaped = false;
            element.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if c == '\\' {
            escaped = true;
            rest = &rest[1..];
        } else if !separator.is_empty() && rest.starts_with(separator) {
            elements.push(std::mem::take(&mut element));
            rest = &rest[separator.len()..];
        } else {
            element.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    elements.push(element);
    elements
}

/// Join root-to-leaf segments with `separator`, no trailing separator.
pub fn join_path(segments: &[String], separator: &str, escape: bool) -> String {
    if escape {
        segments
            .iter()
            .map(|s| escape_key(s, separator))
            .collect::<Vec<_>>()
            .join(separator)
    } else {
        segments.join(separator)
    }
}

/// Style of quotes around keys in an index expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Render segments as a chain of bracketed, quoted keys:
/// `['foo']['bar']['baz']`.
///
/// Backslashes and the quote character inside a key are backslash-escaped
/// so the expression stays well formed.
pub fn index_expression(segments: &[String], quote: QuoteStyle) -> String {
    let q = quote.as_char();
    let mut expr = String::new();
    for segment in segments {
        expr.push('[');
        expr.push(q);
        for c in segment.chars() {
            if c == '\\' || c == q {
                expr.push('\\');
            }
            expr.push(c);
        }
        expr.push(q);
        expr.push(']');
    }
    expr
}

// =============================================================================
// Unit Tests
// =============================================================================
