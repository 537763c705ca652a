//! Textual signatures for directive headers.

use phpautodoc_api::{ArrayElement, Declaration, Expr, Function, Parameter};

/// Anything that can be written into a directive header.
pub trait Signature {
    fn signature(&self) -> String;
}

/// Format any signature-bearing node.
pub fn format_signature<T: Signature + ?Sized>(node: &T) -> String {
    node.signature()
}

fn join<T: Signature>(items: &[T]) -> String {
    items
        .iter()
        .map(Signature::signature)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Signature for Expr {
    fn signature(&self) -> String {
        match self {
            Expr::Constant(name) => name.clone(),
            Expr::Array(elements) => format!("array({})", join(elements)),
            Expr::Literal(text) => text.clone(),
        }
    }
}

impl Signature for ArrayElement {
    fn signature(&self) -> String {
        match &self.key {
            Some(key) => format!("{} => {}", key.signature(), self.value.signature()),
            None => self.value.signature(),
        }
    }
}

impl Signature for Parameter {
    fn signature(&self) -> String {
        let mut out = String::new();
        if self.by_ref {
            out.push('&');
        }
        if self.is_variadic {
            out.push_str("...");
        }
        out.push_str(&self.name);
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(&default.signature());
        }
        out
    }
}

impl Signature for Function {
    fn signature(&self) -> String {
        if self.params.is_empty() {
            self.name.clone()
        } else {
            format!("{}({})", self.name, join(&self.params))
        }
    }
}

impl Signature for Declaration {
    fn signature(&self) -> String {
        match self {
            Declaration::Function(func) | Declaration::Method(func) => func.signature(),
            Declaration::Class(class) => class.name.clone(),
            Declaration::ClassVariableGroup(group) => group.names.join(", "),
            Declaration::Comment(comment) => comment.text.clone(),
            Declaration::Other(other) => other.kind.clone(),
        }
    }
}
