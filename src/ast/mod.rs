//! Abstract syntax tree for the s-expression language
//!
//! Nodes form a strict tree: no sharing, no back-references, no cycles. The
//! parser is the only producer, and nothing mutates a node afterwards.

use serde::{Deserialize, Serialize};

/// Top-level AST: zero or more expressions in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Node>,
}

/// Expression node
///
/// The serialized form is tagged with `"type"`, so dumped artifacts carry
/// the variant name alongside the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// An unsigned integer literal, kept as its source digit text.
    NumberLiteral { value: String },
    /// A parenthesized application `(name args...)`; `params` may be empty.
    CallExpression { name: String, params: Vec<Node> },
}

impl Node {
    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral {
            value: value.into(),
        }
    }

    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::CallExpression {
            name: name.into(),
            params,
        }
    }
}
