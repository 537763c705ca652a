//! Parsing and syntax-error detection for PHP source code

use phpautodoc_api::{Declaration, ParserError};
use std::path::Path;
use tree_sitter::{Node, Parser};

use crate::lowering::Lowering;

/// Parse PHP source and lower it into top-level declarations
pub fn extract(source: &str, file_path: &Path) -> Result<Vec<Declaration>, ParserError> {
    let mut parser = Parser::new();
    let language = tree_sitter_php::language_php();
    parser
        .set_language(&language)
        .map_err(|e| ParserError::ParseError(file_path.to_path_buf(), e.to_string()))?;

    let tree = parser.parse(source, None).ok_or_else(|| {
        ParserError::ParseError(file_path.to_path_buf(), "Failed to parse".to_string())
    })?;

    let root_node = tree.root_node();

    if root_node.has_error() {
        let (line, column, message) = match first_error(root_node) {
            Some(node) if node.is_missing() => {
                let pos = node.start_position();
                (pos.row + 1, pos.column + 1, format!("missing {}", node.kind()))
            }
            Some(node) => {
                let pos = node.start_position();
                (pos.row + 1, pos.column + 1, "unexpected input".to_string())
            }
            None => (0, 0, "Syntax error".to_string()),
        };
        return Err(ParserError::SyntaxError(
            file_path.to_path_buf(),
            line,
            column,
            message,
        ));
    }

    let lowering = Lowering::new(source.as_bytes());
    Ok(lowering.lower_program(root_node))
}

/// Depth-first search for the first error or missing node
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phpautodoc_api::{Comment, Expr, Function, Parameter};

    #[test]
    fn test_extract_simple_function() {
        let source = r#"<?php
function hello() {
    echo "Hello, world!";
}
"#;
        let tree = extract(source, Path::new("test.php")).unwrap();

        assert_eq!(tree, vec![Declaration::Function(Function::new("hello"))]);
    }

    #[test]
    fn test_extract_keeps_doc_comment_as_sibling() {
        let source = "<?php\n/** Adds two numbers */\nfunction add($a, $b) {}\n";
        let tree = extract(source, Path::new("test.php")).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(
            tree[0],
            Declaration::Comment(Comment::new("/** Adds two numbers */"))
        );
        assert_eq!(
            tree[1],
            Declaration::Function(
                Function::new("add")
                    .with_param(Parameter::new("$a"))
                    .with_param(Parameter::new("$b"))
            )
        );
    }

    #[test]
    fn test_extract_default_values() {
        let source = "<?php\nfunction f($a = null, $b = 1, $c = array(1, 'k' => PHP_EOL)) {}\n";
        let tree = extract(source, Path::new("test.php")).unwrap();

        let Declaration::Function(func) = &tree[0] else {
            panic!("expected function, got {:?}", tree[0]);
        };
        assert_eq!(func.params[0].default, Some(Expr::Constant("null".into())));
        assert_eq!(func.params[1].default, Some(Expr::Literal("1".into())));
        let Some(Expr::Array(elements)) = &func.params[2].default else {
            panic!("expected array default");
        };
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].key, None);
        assert_eq!(elements[1].key, Some(Expr::Literal("'k'".into())));
        assert_eq!(elements[1].value, Expr::Constant("PHP_EOL".into()));
    }

    #[test]
    fn test_extract_statements_become_other() {
        let source = "<?php\n$x = 1;\necho $x;\n";
        let tree = extract(source, Path::new("test.php")).unwrap();

        assert_eq!(tree.len(), 2);
        assert!(tree
            .iter()
            .all(|node| matches!(node, Declaration::Other(_))));
    }

    #[test]
    fn test_extract_syntax_error() {
        let source = "<?php\nfunction broken( {\n";
        let result = extract(source, Path::new("broken.php"));

        match result {
            Err(ParserError::SyntaxError(path, line, _, _)) => {
                assert_eq!(path, Path::new("broken.php"));
                assert!(line >= 1);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
