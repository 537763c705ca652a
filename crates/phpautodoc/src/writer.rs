//! Ordered, indentation-aware markup buffer.

use crate::comment::{is_documentation_comment, is_private, render_comment_lines};
use log::trace;
use phpautodoc_api::{AutodocConfig, Declaration};
use std::fmt;

/// One indentation level
pub const INDENT_UNIT: &str = "   ";

/// Provenance label attached to every emitted line
pub const SOURCE_LABEL: &str = "<phpautodoc>";

/// Directive kinds written into headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Function,
    Class,
    Method,
    Attr,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Function => "function",
            EntryKind::Class => "class",
            EntryKind::Method => "method",
            EntryKind::Attr => "attr",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered line of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Fully indented text
    pub text: String,

    /// Indentation level the line was written at
    pub level: usize,

    /// Provenance label, always [`SOURCE_LABEL`]
    pub source: &'static str,
}

/// Appends directive entries to an ordered line buffer.
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    domain: String,
    indent: String,
    lines: Vec<OutputLine>,
}

impl DocumentWriter {
    pub fn new(config: &AutodocConfig) -> Self {
        Self {
            domain: config.domain.clone(),
            indent: String::new(),
            lines: Vec::new(),
        }
    }

    /// Prefix applied to every non-blank line on top of the level indent
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Append one line at `level`. Empty text produces a bare blank line.
    pub fn append_line(&mut self, text: &str, level: usize) {
        let text = if text.is_empty() {
            String::new()
        } else {
            format!("{}{}{}", self.indent, INDENT_UNIT.repeat(level), text)
        };
        self.lines.push(OutputLine {
            text,
            level,
            source: SOURCE_LABEL,
        });
    }

    /// `.. <domain>:<kind>:: <name>` followed by a blank line
    pub fn emit_directive_header(&mut self, kind: EntryKind, name: &str, level: usize) {
        let header = format!(".. {}:{}:: {}", self.domain, kind, name);
        self.append_line(&header, level);
        self.append_line("", level);
    }

    /// Emit one directive entry described by the preceding sibling `comment`.
    ///
    /// Nothing is written when the comment is marked `@access private`. The
    /// description block only appears for doc comments. Returns whether an
    /// entry was written.
    pub fn emit_entry(
        &mut self,
        kind: EntryKind,
        name: &str,
        comment: Option<&Declaration>,
        level: usize,
    ) -> bool {
        if comment.is_some_and(is_private) {
            trace!("skipping private {} {}", kind, name);
            return false;
        }

        trace!("emitting {} {} at level {}", kind, name, level);
        self.emit_directive_header(kind, name, level);

        if let Some(comment) = comment.filter(|node| is_documentation_comment(node)) {
            for line in render_comment_lines(comment) {
                self.append_line(&line, level + 1);
            }
            self.append_line("", level);
        }
        true
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<OutputLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Buffer contents joined with newlines
    pub fn render(&self) -> String {
        render_lines(&self.lines)
    }
}

/// Join rendered lines with `\n`
pub fn render_lines(lines: &[OutputLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
