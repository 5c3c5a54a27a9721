//! Typed tree for a parsed filter document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A whole filter document: the implicit AND of its top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub nodes: Vec<Node>,
}

impl Filter {
    pub fn new(nodes: Vec<Node>) -> Self {
        Filter { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// One atomic condition on a field.
    Condition(Condition),

    /// A parenthesized `$and` / `$or` group.
    Group(Group),
}

impl Node {
    pub fn condition(field: impl Into<String>, op: Op) -> Self {
        Node::Condition(Condition {
            field: field.into(),
            op,
        })
    }

    pub fn and(items: Vec<Node>) -> Self {
        Node::Group(Group {
            kind: GroupKind::And,
            items,
        })
    }

    pub fn or(items: Vec<Node>) -> Self {
        Node::Group(Group {
            kind: GroupKind::Or,
            items,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub op: Op,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub kind: GroupKind,
    pub items: Vec<Node>,
}

/// The operation applied to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    /// Bare value, either a scalar or a sequence.
    Eq(Value),
    NotEq(Value),
    In(Vec<Value>),
    NotIn(Vec<Value>),
    /// Pattern with `%` as the multi-character wildcard.
    Like(String),
    Gt(Value),
    Gte(Value),
    Lt(Value),
    Lte(Value),
    Between(Value, Value),
    IsNull,
    IsNotNull,
}
