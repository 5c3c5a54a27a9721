//! Serializable shape of a search request:
//! `{ body: { query: { constant_score: { filter: { bool: {...} } } } }, sort?, size?, from? }`.

use serde::Serialize;
use serde_json::Value;

/// The bool clause a predicate is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    Must,
    Filter,
    Should,
    MustNot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<u32>,
}

impl BoolQuery {
    pub fn push(&mut self, occur: Occur, clause: Value) {
        match occur {
            Occur::Must => self.must.push(clause),
            Occur::Filter => self.filter.push(clause),
            Occur::Should => {
                self.should.push(clause);
                // Keep OR groups mandatory next to must/filter clauses.
                self.minimum_should_match = Some(1);
            }
            Occur::MustNot => self.must_not.push(clause),
        }
    }

    /// Total number of clauses across all occurrence types.
    pub fn len(&self) -> usize {
        self.must.len() + self.filter.len() + self.should.len() + self.must_not.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchRequest {
    pub body: SearchBody,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
}

impl SearchRequest {
    pub fn new(bool_query: BoolQuery) -> Self {
        SearchRequest {
            body: SearchBody {
                query: QueryClause {
                    constant_score: ConstantScore {
                        filter: BoolFilter { bool_query },
                    },
                },
            },
            ..Default::default()
        }
    }

    pub fn bool_query(&self) -> &BoolQuery {
        &self.body.query.constant_score.filter.bool_query
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchBody {
    pub query: QueryClause,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryClause {
    pub constant_score: ConstantScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConstantScore {
    pub filter: BoolFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoolFilter {
    #[serde(rename = "bool")]
    pub bool_query: BoolQuery,
}
