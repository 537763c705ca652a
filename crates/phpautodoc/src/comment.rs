//! Doc comment classification and rendering.
//!
//! A doc comment is a comment whose text starts with `/**`. Its description
//! is recovered line by line: every physical line that starts with a comment
//! border (`*`, `**`, `/*` or `/**` after optional whitespace) loses the
//! border, any `*/` terminator and trailing whitespace. Lines without a
//! border are dropped.

use phpautodoc_api::Declaration;
use regex::Regex;
use std::str::Lines;
use std::sync::LazyLock;

const DOC_COMMENT_OPENER: &str = "/**";

static RE_BORDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/?\*{1,2}").unwrap());

static RE_BORDER_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/?\*{1,2} ?").unwrap());

static RE_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\*/.*$").unwrap());

static RE_ACCESS_PRIVATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@access\s+private\b").unwrap());

/// True iff `node` is a comment starting with `/**`.
pub fn is_documentation_comment(node: &Declaration) -> bool {
    node.as_comment()
        .is_some_and(|comment| comment.text.starts_with(DOC_COMMENT_OPENER))
}

/// True iff `node` is a doc comment carrying an `@access private` tag.
pub fn is_private(node: &Declaration) -> bool {
    match node.as_comment() {
        Some(comment) if is_documentation_comment(node) => {
            RE_ACCESS_PRIVATE.is_match(&comment.text)
        }
        _ => false,
    }
}

/// Description lines of a doc comment.
///
/// Non-doc nodes yield nothing. The iterator is `Clone`, so the same
/// description can be walked more than once.
pub fn render_comment_lines(node: &Declaration) -> CommentLines<'_> {
    let lines = node
        .as_comment()
        .filter(|_| is_documentation_comment(node))
        .map(|comment| comment.text.lines());
    CommentLines { lines }
}

/// Iterator returned by [`render_comment_lines`].
#[derive(Debug, Clone)]
pub struct CommentLines<'a> {
    lines: Option<Lines<'a>>,
}

impl Iterator for CommentLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let lines = self.lines.as_mut()?;
        lines.find_map(strip_border)
    }
}

/// Strip the comment border and terminator from one physical line.
///
/// Returns `None` for lines without a border.
fn strip_border(line: &str) -> Option<String> {
    if !RE_BORDER.is_match(line) {
        return None;
    }
    let line = RE_TERMINATOR.replace(line, "");
    Some(RE_BORDER_STRIP.replace(&line, "").trim_end().to_owned())
}
