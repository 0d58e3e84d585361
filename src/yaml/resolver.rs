//! Path resolution at the point.

use super::buffer::{Buffer, Position};
use super::classify::is_structural;
use super::config::Config;
use super::path::{index_expression, join_path, split_path};
use super::scan::ancestor_chain;
use crate::tag::tag_at;

/// One line of a resolved chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub position: Position,
    pub indentation: usize,
    pub tag: String,
}

/// Computes paths for the line holding a buffer's point.
///
/// Every call recomputes from the buffer content and leaves the point where
/// it was.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'c> {
    config: &'c Config,
}

impl<'c> PathResolver<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'c Config {
        self.config
    }

    /// Ancestors root first, followed by the queried line itself.
    ///
    /// `None` when the point is on a blank or comment line.
    pub fn chain(&self, buffer: &mut Buffer) -> Option<Vec<Ancestor>> {
        if !is_structural(buffer) {
            return None;
        }
        let position = buffer.line_start();
        let indentation = buffer.current_indentation();
        let mut chain: Vec<Ancestor> = ancestor_chain(buffer, position, indentation)
            .into_iter()
            .rev()
            .map(|p| Ancestor {
                position: p,
                indentation: buffer.document().indentation(p),
                tag: tag_at(buffer, p),
            })
            .collect();
        chain.push(Ancestor {
            position,
            indentation,
            tag: tag_at(buffer, position),
        });
        Some(chain)
    }

    /// Raw tags from root to leaf.
    pub fn segments(&self, buffer: &mut Buffer) -> Option<Vec<String>> {
        let chain = self.chain(buffer)?;
        Some(chain.into_iter().map(|a| a.tag).collect())
    }

    /// Separator-joined path of the line at point, e.g. `foo.bar.baz`.
    pub fn get_path(&self, buffer: &mut Buffer) -> Option<String> {
        let segments = self.segments(buffer)?;
        let path = join_path(&segments, &self.config.separator, self.config.escape);
        log::debug!("line {}: path {}", buffer.line_start().number(), path);
        Some(path)
    }

    /// Bracketed key chain of the line at point, e.g. `['foo']['bar']`.
    pub fn index_expression(&self, buffer: &mut Buffer) -> Option<String> {
        let segments = self.segments(buffer)?;
        Some(index_expression(&segments, self.config.quote))
    }

    /// Lines whose path is `path`, in document order.
    pub fn locate(&self, buffer: &mut Buffer, path: &str) -> Vec<Position> {
        let wanted = split_path(path, &self.config.separator);
        let mut buf = buffer.excursion();
        let positions: Vec<Position> = buf.document().positions().collect();
        positions
            .into_iter()
            .filter(|&p| {
                // Cheap check before resolving the whole chain
                if wanted.last() != Some(&tag_at(&mut buf, p)) {
                    return false;
                }
                buf.goto(p);
                self.segments(&mut buf).as_ref() == Some(&wanted)
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::buffer::Document;
    use crate::yaml::path::QuoteStyle;
    use indoc::indoc;

    const NESTED: &str = indoc! {"
        foo:
          bar:
            baz: 1
    "};

    fn at_line(text: &str, line: usize) -> Buffer {
        let mut buffer = Buffer::new(Document::new(text));
        buffer.goto_line(line).unwrap();
        buffer
    }

    fn path_at(text: &str, line: usize) -> Option<String> {
        let config = Config::default();
        PathResolver::new(&config).get_path(&mut at_line(text, line))
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(path_at(NESTED, 3), Some("foo.bar.baz".to_string()));
        assert_eq!(path_at(NESTED, 2), Some("foo.bar".to_string()));
    }

    #[test]
    fn test_top_level_path_is_own_tag() {
        assert_eq!(path_at(NESTED, 1), Some("foo".to_string()));
    }

    #[test]
    fn test_comment_and_blank_lines_skipped() {
        let text = indoc! {"
            foo:
              bar:
              # a comment

                baz: 1
        "};
        assert_eq!(path_at(text, 5), Some("foo.bar.baz".to_string()));
    }

    #[test]
    fn test_no_path_on_blank_or_comment() {
        let text = "foo:\n\n  # note\n  bar: 1\n";
        assert_eq!(path_at(text, 2), None);
        assert_eq!(path_at(text, 3), None);
        assert_eq!(path_at(text, 4), Some("foo.bar".to_string()));
    }

    #[test]
    fn test_apostrophe_in_plain_value_keeps_comments_out() {
        let text = "a:\n  title: Rock 'n roll\n# comment\n  b: 1\n";
        assert_eq!(path_at(text, 3), None);
        assert_eq!(path_at(text, 4), Some("a.b".to_string()));
    }

    #[test]
    fn test_unicode_whitespace_line_is_blank() {
        let text = "a:\n  b: 1\n\u{a0}\n  c: 2\n";
        assert_eq!(path_at(text, 3), None);
        assert_eq!(path_at(text, 4), Some("a.c".to_string()));
    }

    #[test]
    fn test_sibling_subtrees() {
        let text = indoc! {"
            a:
              x: 1
              y:
                z: 2
            b:
              x: 3
        "};
        assert_eq!(path_at(text, 4), Some("a.y.z".to_string()));
        assert_eq!(path_at(text, 6), Some("b.x".to_string()));
    }

    #[test]
    fn test_sequence_entries_use_indicator_tag() {
        let text = indoc! {"
            items:
              - name: one
                size: 1
        "};
        assert_eq!(path_at(text, 2), Some("items.-".to_string()));
        assert_eq!(path_at(text, 3), Some("items.-.size".to_string()));
    }

    #[test]
    fn test_custom_separator_and_escape() {
        let text = "labels:\n  app.kubernetes.io/name: web\n";
        let config = Config {
            separator: "/".to_string(),
            ..Default::default()
        };
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.get_path(&mut at_line(text, 2)),
            Some("labels/app.kubernetes.io/name".to_string())
        );
        let config = Config {
            escape: true,
            ..Default::default()
        };
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.get_path(&mut at_line(text, 2)),
            Some(r"labels.app\.kubernetes\.io/name".to_string())
        );
    }

    #[test]
    fn test_index_expression() {
        let config = Config::default();
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.index_expression(&mut at_line(NESTED, 3)),
            Some("['foo']['bar']['baz']".to_string())
        );
        let config = Config {
            quote: QuoteStyle::Double,
            ..Default::default()
        };
        let resolver = PathResolver::new(&config);
        assert_eq!(
            resolver.index_expression(&mut at_line(NESTED, 2)),
            Some(r#"["foo"]["bar"]"#.to_string())
        );
    }

    #[test]
    fn test_chain_details() {
        let config = Config::default();
        let resolver = PathResolver::new(&config);
        let chain = resolver.chain(&mut at_line(NESTED, 3)).unwrap();
        let summary: Vec<(usize, usize, &str)> = chain
            .iter()
            .map(|a| (a.position.number(), a.indentation, a.tag.as_str()))
            .collect();
        assert_eq!(summary, vec![(1, 0, "foo"), (2, 2, "bar"), (3, 4, "baz")]);
    }

    #[test]
    fn test_get_path_is_idempotent_and_keeps_point() {
        let config = Config::default();
        let resolver = PathResolver::new(&config);
        let mut buffer = at_line(NESTED, 3);
        buffer.move_to_column(5);
        let before = buffer.point();
        let first = resolver.get_path(&mut buffer);
        let second = resolver.get_path(&mut buffer);
        assert_eq!(first, second);
        assert_eq!(buffer.point(), before);
    }

    #[test]
    fn test_locate() {
        let text = indoc! {"
            a:
              x: 1
            b:
              x: 2
              y:
                x: 3
        "};
        let config = Config::default();
        let resolver = PathResolver::new(&config);
        let mut buffer = at_line(text, 1);
        let found: Vec<usize> = resolver
            .locate(&mut buffer, "b.x")
            .iter()
            .map(|p| p.number())
            .collect();
        assert_eq!(found, vec![4]);
        assert!(resolver.locate(&mut buffer, "c").is_empty());
        assert_eq!(buffer.point().position.number(), 1);
    }

    #[test]
    fn test_locate_escaped_key() {
        let text = "labels:\n  app.kubernetes.io/name: web\n";
        let config = Config::default();
        let resolver = PathResolver::new(&config);
        let mut buffer = at_line(text, 1);
        let found = resolver.locate(&mut buffer, r"labels.app\.kubernetes\.io/name");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].number(), 2);
    }
}
