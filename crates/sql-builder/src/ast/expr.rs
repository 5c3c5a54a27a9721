//! Defines the AST for SQL expressions and predicates.

use crate::ast::predicate::PredicateGroup;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column identifier, e.g. `id`, `users.id` or `public.users.id`.
    Identifier(Ident),

    /// `*`
    Wildcard,

    /// A literal value, such as a string, number, boolean, or NULL.
    Value(Value),

    /// A binary comparison, e.g., `column = 'value'`.
    BinaryOp(Box<BinaryOp>),

    /// `expr [NOT] IN (a, b, ...)`
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    /// `expr LIKE pattern`
    Like { expr: Box<Expr>, pattern: Box<Expr> },

    /// `expr BETWEEN low AND high`, inclusive at both ends.
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
    },

    /// `expr IS [NOT] NULL`
    IsNull { expr: Box<Expr>, negated: bool },

    /// A parenthesized group of predicates.
    Nested(PredicateGroup),
}

/// A possibly qualified name; each part is quoted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<String>,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Ident {
            parts: vec![name.into()],
        }
    }

    /// Splits `schema.table.column` at every dot. A path with an empty
    /// segment is kept as one name.
    pub fn from_path(path: &str) -> Self {
        let parts: Vec<&str> = path.split('.').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Ident::new(path);
        }
        Ident {
            parts: parts.into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,    // =
    NotEq, // !=
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
}

impl Expr {
    fn binary(self, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: self,
            op,
            right,
        }))
    }

    pub fn equal_to(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::Eq, right)
    }

    pub fn not_equal_to(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::NotEq, right)
    }

    pub fn less_than(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::Lt, right)
    }

    pub fn less_than_or_equal_to(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::LtEq, right)
    }

    pub fn greater_than(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::Gt, right)
    }

    pub fn greater_than_or_equal_to(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::GtEq, right)
    }

    pub fn in_list(self, list: Vec<Expr>) -> Expr {
        Expr::InList {
            expr: Box::new(self),
            list,
            negated: false,
        }
    }

    pub fn not_in_list(self, list: Vec<Expr>) -> Expr {
        Expr::InList {
            expr: Box::new(self),
            list,
            negated: true,
        }
    }

    pub fn like(self, pattern: Expr) -> Expr {
        Expr::Like {
            expr: Box::new(self),
            pattern: Box::new(pattern),
        }
    }

    pub fn between(self, low: Expr, high: Expr) -> Expr {
        Expr::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    pub fn is_null(self) -> Expr {
        Expr::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    pub fn is_not_null(self) -> Expr {
        Expr::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }
}
