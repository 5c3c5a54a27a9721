//! The closed set of reserved tokens understood by the query language.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

const OP_NOT: &str = "$not";
const OP_IN: &str = "$in";
const OP_NOT_IN: &str = "$nin";
const OP_LIKE: &str = "$like";
const OP_OR: &str = "$or";
const OP_AND: &str = "$and";
const OP_NULL: &str = "$null";
const OP_NOT_NULL: &str = "$notnull";
const OP_NOT_NULL_SHORT: &str = "$nnull";

const OP_GREATER: &str = "$gt";
const OP_GREATER_EQUAL: &str = "$gte";
const OP_LESS: &str = "$lt";
const OP_LESS_EQUAL: &str = "$lte";
const OP_BETWEEN: &str = "$bt";

const HINT_SORT: &str = "$sort";
const HINT_LIMIT: &str = "$limit";
const HINT_SKIP: &str = "$skip";

const ORDER_ASC: [&str; 3] = ["asc", "ASC", "1"];
const ORDER_DESC: [&str; 3] = ["desc", "DESC", "-1"];

/// Family an operator belongs to; used to route it to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    Logical,
    Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Logical
    Not,
    In,
    NotIn,
    Like,
    Or,
    And,
    Null,
    NotNull,

    // Comparison
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Between,
}

impl Operator {
    pub const ALL: [Operator; 13] = [
        Operator::Not,
        Operator::In,
        Operator::NotIn,
        Operator::Like,
        Operator::Or,
        Operator::And,
        Operator::Null,
        Operator::NotNull,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::Between,
    ];

    pub fn class(&self) -> OperatorClass {
        match self {
            Operator::Not
            | Operator::In
            | Operator::NotIn
            | Operator::Like
            | Operator::Or
            | Operator::And
            | Operator::Null
            | Operator::NotNull => OperatorClass::Logical,
            Operator::Greater
            | Operator::GreaterEqual
            | Operator::Less
            | Operator::LessEqual
            | Operator::Between => OperatorClass::Comparison,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Operator::Not => OP_NOT,
            Operator::In => OP_IN,
            Operator::NotIn => OP_NOT_IN,
            Operator::Like => OP_LIKE,
            Operator::Or => OP_OR,
            Operator::And => OP_AND,
            Operator::Null => OP_NULL,
            Operator::NotNull => OP_NOT_NULL,
            Operator::Greater => OP_GREATER,
            Operator::GreaterEqual => OP_GREATER_EQUAL,
            Operator::Less => OP_LESS,
            Operator::LessEqual => OP_LESS_EQUAL,
            Operator::Between => OP_BETWEEN,
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            OP_NOT => Ok(Operator::Not),
            OP_IN => Ok(Operator::In),
            OP_NOT_IN => Ok(Operator::NotIn),
            OP_LIKE => Ok(Operator::Like),
            OP_OR => Ok(Operator::Or),
            OP_AND => Ok(Operator::And),
            OP_NULL => Ok(Operator::Null),
            OP_NOT_NULL | OP_NOT_NULL_SHORT => Ok(Operator::NotNull),
            OP_GREATER => Ok(Operator::Greater),
            OP_GREATER_EQUAL => Ok(Operator::GreaterEqual),
            OP_LESS => Ok(Operator::Less),
            OP_LESS_EQUAL => Ok(Operator::LessEqual),
            OP_BETWEEN => Ok(Operator::Between),
            _ => Err(format!("Unknown operator: {s}")),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Keys of the hint document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKey {
    Sort,
    Limit,
    Skip,
}

impl HintKey {
    pub fn token(&self) -> &'static str {
        match self {
            HintKey::Sort => HINT_SORT,
            HintKey::Limit => HINT_LIMIT,
            HintKey::Skip => HINT_SKIP,
        }
    }
}

impl FromStr for HintKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            HINT_SORT => Ok(HintKey::Sort),
            HINT_LIMIT => Ok(HintKey::Limit),
            HINT_SKIP => Ok(HintKey::Skip),
            _ => Err(format!("Unknown hint: {s}")),
        }
    }
}

impl fmt::Display for HintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Resolves a direction token. Anything outside the ascending alias set
    /// is descending.
    pub fn from_token(token: &Value) -> Self {
        if is_ascending(token) {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Whether `token` is one of the explicit descending aliases.
    pub fn is_descending_alias(token: &Value) -> bool {
        match token {
            Value::String(s) => ORDER_DESC.contains(&s.as_str()),
            Value::Number(n) => n.as_f64() == Some(-1.0),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

fn is_ascending(token: &Value) -> bool {
    match token {
        Value::String(s) => ORDER_ASC.contains(&s.as_str()),
        Value::Number(n) => n.as_f64() == Some(1.0),
        _ => false,
    }
}
