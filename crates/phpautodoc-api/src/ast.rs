//! Declaration tree produced by a [`SourceParser`](crate::SourceParser).
//!
//! The tree is a closed variant: every node a parser emits is one of the
//! [`Declaration`] kinds below, and anything the documentation extractor has
//! no use for is carried as [`Declaration::Other`] so that sibling order is
//! preserved.

use serde::{Deserialize, Serialize};

/// One parsed syntactic construct, in source order among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Declaration {
    /// Free function
    Function(Function),

    /// Class with its member declarations
    Class(Class),

    /// Method declared inside a class body
    Method(Function),

    /// One property statement, possibly declaring several variables
    ClassVariableGroup(ClassVariableGroup),

    /// Any comment, documentation or ordinary
    Comment(Comment),

    /// Every other statement
    Other(Other),
}

impl Declaration {
    /// Short label of the node kind, used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Declaration::Function(_) => "function",
            Declaration::Class(_) => "class",
            Declaration::Method(_) => "method",
            Declaration::ClassVariableGroup(_) => "class_variable_group",
            Declaration::Comment(_) => "comment",
            Declaration::Other(other) => &other.kind,
        }
    }

    /// Comment text if this node is a comment.
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Declaration::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Declaration::Class(class) => {
                1 + class.body.iter().map(Declaration::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }
}

/// A function or method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,

    /// Formal parameters in declaration order
    pub params: Vec<Parameter>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }
}

/// A class and the declarations found in its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub body: Vec<Declaration>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: Declaration) -> Self {
        self.body.push(member);
        self
    }
}

/// Variables declared by a single property statement, e.g. `public $a, $b;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassVariableGroup {
    /// Variable names including the `$` sigil
    pub names: Vec<String>,
}

impl ClassVariableGroup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw comment text, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A statement the extractor does not document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Other {
    /// Parser node kind, e.g. `expression_statement`
    pub kind: String,
}

impl Other {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// A formal parameter of a function or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name including the `$` sigil
    pub name: String,

    /// Default value expression (if any)
    pub default: Option<Expr>,

    /// Declared as `...$name`
    pub is_variadic: bool,

    /// Declared as `&$name`
    pub by_ref: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            is_variadic: false,
            by_ref: false,
        }
    }

    pub fn with_default(mut self, default: Expr) -> Self {
        self.default = Some(default);
        self
    }

    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    pub fn by_ref(mut self) -> Self {
        self.by_ref = true;
        self
    }
}

/// Default-value expression of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expr {
    /// Named constant such as `null`, `true` or `PHP_EOL`
    Constant(String),

    /// `array(...)` or `[...]` literal
    Array(Vec<ArrayElement>),

    /// Any other expression, kept as its source text
    Literal(String),
}

/// One element of an array literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayElement {
    pub key: Option<Expr>,
    pub value: Expr,
}

impl ArrayElement {
    pub fn value(value: Expr) -> Self {
        Self { key: None, value }
    }

    pub fn keyed(key: Expr, value: Expr) -> Self {
        Self {
            key: Some(key),
            value,
        }
    }
}
