//! Typed form of a hint document.

use crate::operator::SortDirection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sort {
    /// `{"$sort": "field"}`
    Field(String),

    /// `{"$sort": {"a": "asc", "b": -1}}`, in document order.
    Keys(Vec<SortKey>),
}

impl Sort {
    /// Ordered (field, direction) pairs; a bare field sorts ascending.
    pub fn keys(&self) -> Vec<SortKey> {
        match self {
            Sort::Field(field) => vec![SortKey::new(field.clone(), SortDirection::Ascending)],
            Sort::Keys(keys) => keys.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        SortKey {
            field: field.into(),
            direction,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hints {
    pub sort: Option<Sort>,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
}

impl Hints {
    pub fn is_empty(&self) -> bool {
        self.sort.is_none() && self.limit.is_none() && self.skip.is_none()
    }
}
