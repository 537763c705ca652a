//! Lowering from the tree-sitter-php syntax tree to declarations

use phpautodoc_api::{
    ArrayElement, Class, ClassVariableGroup, Comment, Declaration, Expr, Function, Other,
    Parameter,
};
use tree_sitter::Node;

pub struct Lowering<'a> {
    source: &'a [u8],
}

impl<'a> Lowering<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source }
    }

    fn node_text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or("").to_string()
    }

    /// Lower the root `program` node into its top-level siblings
    pub fn lower_program(&self, root: Node) -> Vec<Declaration> {
        self.lower_siblings(root)
    }

    /// Lower every named child of `node`, preserving source order
    fn lower_siblings(&self, node: Node) -> Vec<Declaration> {
        let mut cursor = node.walk();
        let siblings = node
            .named_children(&mut cursor)
            .filter_map(|child| self.lower_node(child))
            .collect();
        siblings
    }

    fn lower_node(&self, node: Node) -> Option<Declaration> {
        let declaration = match node.kind() {
            // The opening tag is not a statement
            "php_tag" => return None,
            "comment" => Declaration::Comment(Comment::new(self.node_text(node))),
            "function_definition" => Declaration::Function(self.lower_function(node)),
            "method_declaration" => Declaration::Method(self.lower_function(node)),
            "class_declaration" => Declaration::Class(self.lower_class(node)),
            "property_declaration" => {
                Declaration::ClassVariableGroup(self.lower_property_declaration(node))
            }
            kind => Declaration::Other(Other::new(kind)),
        };
        Some(declaration)
    }

    fn lower_function(&self, node: Node) -> Function {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.node_text(n))
            .unwrap_or_else(|| "anonymous".to_string());

        Function {
            name,
            params: self.lower_parameters(node),
        }
    }

    fn lower_class(&self, node: Node) -> Class {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.node_text(n))
            .unwrap_or_else(|| "Class".to_string());

        let body = node
            .child_by_field_name("body")
            .map(|body| self.lower_siblings(body))
            .unwrap_or_default();

        Class { name, body }
    }

    /// `public $a = 1, $b;` declares one group with two names
    fn lower_property_declaration(&self, node: Node) -> ClassVariableGroup {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() != "property_element" {
                continue;
            }
            let mut element_cursor = child.walk();
            let variable = child
                .named_children(&mut element_cursor)
                .find(|n| n.kind() == "variable_name");
            if let Some(variable) = variable {
                names.push(self.node_text(variable));
            }
        }
        ClassVariableGroup { names }
    }

    fn lower_parameters(&self, node: Node) -> Vec<Parameter> {
        let mut params = Vec::new();
        let Some(params_node) = node.child_by_field_name("parameters") else {
            return params;
        };

        let mut cursor = params_node.walk();
        for child in params_node.named_children(&mut cursor) {
            let kind = child.kind();
            if !matches!(
                kind,
                "simple_parameter" | "variadic_parameter" | "property_promotion_parameter"
            ) {
                continue;
            }
            let Some(name_node) = child.child_by_field_name("name") else {
                continue;
            };

            let mut param = Parameter::new(self.node_text(name_node));
            if let Some(default) = child.child_by_field_name("default_value") {
                param = param.with_default(self.lower_expression(default));
            }
            if kind == "variadic_parameter" {
                param = param.variadic();
            }
            if self.has_reference_modifier(child) {
                param = param.by_ref();
            }
            params.push(param);
        }
        params
    }

    fn has_reference_modifier(&self, node: Node) -> bool {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .any(|child| matches!(child.kind(), "reference_modifier" | "&"));
        found
    }

    fn lower_expression(&self, node: Node) -> Expr {
        match node.kind() {
            "name" | "qualified_name" | "null" | "boolean" => Expr::Constant(self.node_text(node)),
            "array_creation_expression" => Expr::Array(self.lower_array_elements(node)),
            "parenthesized_expression" => match node.named_child(0) {
                Some(inner) => self.lower_expression(inner),
                None => Expr::Literal(self.node_text(node)),
            },
            _ => Expr::Literal(self.node_text(node)),
        }
    }

    fn lower_array_elements(&self, node: Node) -> Vec<ArrayElement> {
        let mut elements = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() != "array_element_initializer" {
                continue;
            }
            let mut element_cursor = child.walk();
            let parts: Vec<Node> = child
                .named_children(&mut element_cursor)
                .filter(|n| n.kind() != "comment" && n.kind() != "reference_modifier")
                .collect();
            let element = match parts.as_slice() {
                [key, value] => ArrayElement::keyed(
                    self.lower_expression(*key),
                    self.lower_expression(*value),
                ),
                [value] => ArrayElement::value(self.lower_expression(*value)),
                _ => ArrayElement::value(Expr::Literal(self.node_text(child))),
            };
            elements.push(element);
        }
        elements
    }
}
