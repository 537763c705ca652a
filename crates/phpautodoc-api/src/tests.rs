//! Tests for parser API types and utilities

use crate::*;
use std::path::{Path, PathBuf};

struct FixedParser;

impl SourceParser for FixedParser {
    fn language(&self) -> &str {
        "php"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".php", ".inc"]
    }

    fn parse_source(&self, source: &str, _file_path: &Path) -> ParserResult<Vec<Declaration>> {
        Ok(vec![Declaration::Comment(Comment::new(source))])
    }
}

#[test]
fn test_can_parse_by_extension() {
    let parser = FixedParser;
    assert!(parser.can_parse(Path::new("lib/index.php")));
    assert!(parser.can_parse(Path::new("config.inc")));
    assert!(!parser.can_parse(Path::new("README.md")));
    assert!(!parser.can_parse(Path::new("Makefile")));
}

#[test]
fn test_parse_file_missing_is_io_error() {
    let parser = FixedParser;
    let result = parser.parse_file(&PathBuf::from("/nonexistent/nowhere.php"));
    assert!(matches!(result, Err(ParserError::IoError(_, _))));
}

#[test]
fn test_default_config_domain() {
    let config = AutodocConfig::default();
    assert_eq!(config.domain, "php");
    assert_eq!(config.with_domain("js").domain, "js");
}

#[test]
fn test_config_missing_field_uses_default() {
    let config: AutodocConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, AutodocConfig::default());
}

#[test]
fn test_declaration_kind_labels() {
    assert_eq!(Declaration::Function(Function::new("f")).kind(), "function");
    assert_eq!(Declaration::Method(Function::new("m")).kind(), "method");
    assert_eq!(
        Declaration::Other(Other::new("echo_statement")).kind(),
        "echo_statement"
    );
}

#[test]
fn test_node_count_includes_class_members() {
    let class = Class::new("Foo")
        .with_member(Declaration::Comment(Comment::new("/** doc */")))
        .with_member(Declaration::Method(Function::new("bar")))
        .with_member(Declaration::ClassVariableGroup(ClassVariableGroup::new([
            "$a", "$b",
        ])));
    assert_eq!(Declaration::Class(class).node_count(), 4);
}

#[test]
fn test_declaration_tree_serde_round_trip() {
    let tree = vec![
        Declaration::Comment(Comment::new("/** Adds two numbers */")),
        Declaration::Function(
            Function::new("add")
                .with_param(Parameter::new("$a"))
                .with_param(Parameter::new("$b").with_default(Expr::Array(vec![
                    ArrayElement::keyed(Expr::Literal("'x'".into()), Expr::Constant("null".into())),
                ]))),
        ),
        Declaration::Other(Other::new("echo_statement")),
    ];

    let json = serde_json::to_string(&tree).unwrap();
    let back: Vec<Declaration> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_metrics_record() {
    let mut metrics = ParserMetrics::default();
    assert_eq!(metrics, ParserMetrics::default());

    metrics.record(true, std::time::Duration::from_millis(5), 3);
    metrics.record(false, std::time::Duration::from_millis(1), 0);

    assert_eq!(metrics.files_attempted, 2);
    assert_eq!(metrics.files_succeeded, 1);
    assert_eq!(metrics.files_failed, 1);
    assert_eq!(metrics.total_declarations, 3);
    assert_eq!(metrics.total_parse_time, std::time::Duration::from_millis(6));
}
