//! Streaming reader for INI-style definition and values files.
//!
//! [`entries`] turns file content into a lazy sequence of [`Entry`] items, one
//! per `key = value` pair, tagged with the enclosing `[section]` and the
//! 1-based line number. The sequence ends at the first syntax error, which is
//! yielded as an `Err` item; entries before it have already been produced.
//!
//! Accepted syntax:
//!
//! - `[section]` headers (the name is taken verbatim between the brackets).
//! - `key = value` or `key : value`; key and value are whitespace-trimmed.
//! - Full-line comments starting with `;` or `#`.
//! - Inline comments: a `;` preceded by whitespace ends the line.
//! - Continuation lines: an indented line following a pair re-delivers the
//!   previous key with the new text.
//! - A leading UTF-8 byte-order mark is skipped.

use std::iter::Enumerate;
use std::str::Lines;

use thiserror::Error;

/// One `key = value` pair read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Enclosing section, empty before the first header.
    pub section: String,
    pub key: String,
    pub value: String,
    /// 1-based line the pair was read from.
    pub line: usize,
}

/// A line that is neither a header, a pair, a comment nor blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error on line {line}")]
pub struct SyntaxError {
    pub line: usize,
}

/// Iterator over the entries of one source. See the module docs.
pub struct Entries<'a> {
    lines: Enumerate<Lines<'a>>,
    section: String,
    prev_key: Option<String>,
    done: bool,
}

/// Read `content` as a sequence of entries.
pub fn entries(content: &str) -> Entries<'_> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    Entries {
        lines: content.lines().enumerate(),
        section: String::new(),
        prev_key: None,
        done: false,
    }
}

impl Iterator for Entries<'_> {
    type Item = Result<Entry, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for (index, raw) in self.lines.by_ref() {
            let line = index + 1;
            let start = raw.trim();

            if start.is_empty() || start.starts_with(';') || start.starts_with('#') {
                continue;
            }

            let indented = raw.starts_with(char::is_whitespace);
            if indented && let Some(key) = &self.prev_key {
                let value = strip_inline_comment(start).trim_end();
                return Some(Ok(Entry {
                    section: self.section.clone(),
                    key: key.clone(),
                    value: value.to_string(),
                    line,
                }));
            }

            if let Some(header) = start.strip_prefix('[') {
                let (name, found) = split_at_any(header, &[']']);
                if found.is_none() {
                    self.done = true;
                    return Some(Err(SyntaxError { line }));
                }
                self.section = name.to_string();
                self.prev_key = None;
                continue;
            }

            let (key, found) = split_at_any(start, &['=', ':']);
            let Some(separator) = found else {
                self.done = true;
                return Some(Err(SyntaxError { line }));
            };

            let key = key.trim_end();
            let rest = &start[key.len()..];
            let value = rest
                .trim_start()
                .strip_prefix(separator)
                .unwrap_or(rest)
                .trim_start();
            let value = strip_inline_comment(value).trim_end();

            self.prev_key = Some(key.to_string());
            return Some(Ok(Entry {
                section: self.section.clone(),
                key: key.to_string(),
                value: value.to_string(),
                line,
            }));
        }

        self.done = true;
        None
    }
}

/// Split `text` at the first char in `stops`, unless an inline comment comes
/// first. Returns the part before the stop and the stop char, if one was hit.
fn split_at_any<'a>(text: &'a str, stops: &[char]) -> (&'a str, Option<char>) {
    let mut was_space = false;
    for (i, c) in text.char_indices() {
        if stops.contains(&c) {
            return (&text[..i], Some(c));
        }
        if was_space && c == ';' {
            return (&text[..i], None);
        }
        was_space = c.is_whitespace();
    }
    (text, None)
}

fn strip_inline_comment(text: &str) -> &str {
    split_at_any(text, &[]).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(content: &str) -> Vec<Result<Entry, SyntaxError>> {
        entries(content).collect()
    }

    fn pairs(content: &str) -> Vec<(String, String, String)> {
        entries(content)
            .map(|e| {
                let e = e.unwrap();
                (e.section, e.key, e.value)
            })
            .collect()
    }

    fn triple(section: &str, key: &str, value: &str) -> (String, String, String) {
        (section.into(), key.into(), value.into())
    }

    #[test]
    fn sections_and_pairs() {
        let content = "[PORT]\ntype = integer\nvalue = 80\n\n[NAME]\ntype=string\n";
        assert_eq!(
            pairs(content),
            vec![
                triple("PORT", "type", "integer"),
                triple("PORT", "value", "80"),
                triple("NAME", "type", "string"),
            ]
        );
    }

    #[test]
    fn pairs_before_any_section_have_empty_section() {
        assert_eq!(pairs("PORT = 8080\n"), vec![triple("", "PORT", "8080")]);
    }

    #[test]
    fn colon_separator() {
        assert_eq!(pairs("[a]\nkey: value\n"), vec![triple("a", "key", "value")]);
    }

    #[test]
    fn only_first_separator_splits() {
        assert_eq!(
            pairs("url = http://host:80/x=y\n"),
            vec![triple("", "url", "http://host:80/x=y")]
        );
    }

    #[test]
    fn empty_value_allowed() {
        assert_eq!(pairs("key =\n"), vec![triple("", "key", "")]);
    }

    #[test]
    fn comments_are_skipped() {
        let content = "; leading\n# hash\n[a]\n  ; indented comment\nkey = v\n";
        assert_eq!(pairs(content), vec![triple("a", "key", "v")]);
    }

    #[test]
    fn inline_comment_needs_preceding_space() {
        assert_eq!(
            pairs("a = one ; note\nb = two;three\n"),
            vec![triple("", "a", "one"), triple("", "b", "two;three")]
        );
    }

    #[test]
    fn inline_comment_after_header() {
        assert_eq!(
            pairs("[sec] ; trailing\nk = v\n"),
            vec![triple("sec", "k", "v")]
        );
    }

    #[test]
    fn continuation_line_repeats_previous_key() {
        let content = "[a]\ndescription = first\n  second\n";
        assert_eq!(
            pairs(content),
            vec![
                triple("a", "description", "first"),
                triple("a", "description", "second"),
            ]
        );
    }

    #[test]
    fn indented_pair_after_header_is_a_pair() {
        assert_eq!(pairs("[a]\n  key = v\n"), vec![triple("a", "key", "v")]);
    }

    #[test]
    fn byte_order_mark_skipped() {
        assert_eq!(pairs("\u{feff}[a]\nk = v\n"), vec![triple("a", "k", "v")]);
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(
            pairs("[a]\r\nk = v\r\n"),
            vec![triple("a", "k", "v")]
        );
    }

    #[test]
    fn line_numbers_are_one_based() {
        let items = collect("\n[a]\n\nk = v\n");
        assert_eq!(items[0].as_ref().unwrap().line, 4);
    }

    #[test]
    fn missing_separator_is_syntax_error() {
        let items = collect("[a]\nk = v\njunk\nnever = read\n");
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert_eq!(items[1], Err(SyntaxError { line: 3 }));
    }

    #[test]
    fn unterminated_header_is_syntax_error() {
        let items = collect("[broken\nk = v\n");
        assert_eq!(items, vec![Err(SyntaxError { line: 1 })]);
    }

    #[test]
    fn iterator_is_fused_after_error() {
        let mut it = entries("bad line\n");
        assert!(matches!(it.next(), Some(Err(_))));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert!(collect("").is_empty());
    }
}
