//! Walks a declaration tree and writes one directive entry per declaration.
//!
//! Siblings are folded left to right with the previous sibling as the
//! accumulator. A declaration is documented by a doc comment only when that
//! comment is its immediately preceding sibling; any other node in between,
//! including an ordinary comment, breaks the pairing.

use crate::comment::is_private;
use crate::signature::format_signature;
use crate::writer::{DocumentWriter, EntryKind};
use phpautodoc_api::Declaration;

/// Emit entries for `siblings` and everything nested below them.
///
/// Returns the number of entries written.
pub fn traverse(siblings: &[Declaration], writer: &mut DocumentWriter) -> usize {
    walk(siblings, 0, writer)
}

fn walk(siblings: &[Declaration], depth: usize, writer: &mut DocumentWriter) -> usize {
    let (_, written) = siblings.iter().fold((None, 0), |(previous, written), node| {
        (Some(node), written + visit(node, previous, depth, writer))
    });
    written
}

fn visit(
    node: &Declaration,
    previous: Option<&Declaration>,
    depth: usize,
    writer: &mut DocumentWriter,
) -> usize {
    match node {
        Declaration::Function(func) => usize::from(writer.emit_entry(
            EntryKind::Function,
            &format_signature(func),
            previous,
            depth,
        )),
        Declaration::Class(class) => {
            let mut written =
                usize::from(writer.emit_entry(EntryKind::Class, &class.name, previous, depth));
            // A private class hides its whole member list
            if !previous.is_some_and(is_private) {
                written += walk(&class.body, depth + 1, writer);
            }
            written
        }
        Declaration::Method(method) => usize::from(writer.emit_entry(
            EntryKind::Method,
            &format_signature(method),
            previous,
            depth,
        )),
        Declaration::ClassVariableGroup(group) => group
            .names
            .iter()
            .filter(|name| writer.emit_entry(EntryKind::Attr, name, previous, depth))
            .count(),
        Declaration::Comment(_) | Declaration::Other(_) => 0,
    }
}
