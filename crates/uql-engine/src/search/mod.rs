//! Search backend: compiles a parsed filter into a constant-score bool query.

pub mod query;

use crate::{
    compiler::QueryCompiler,
    config::{BetweenBounds, TranslatorConfig},
};
use query::{BoolQuery, Occur, SearchRequest};
use serde_json::{Map, Value, json};
use tracing::debug;
use uql_syntax::ast::{
    filter::{Condition, Filter, Group, GroupKind, Node, Op},
    hint::{Hints, Sort},
};

#[derive(Debug, Clone, Default)]
pub struct SearchCompiler {
    config: TranslatorConfig,
}

impl SearchCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the bool query for `filter` alone.
    pub fn bool_query(&self, filter: &Filter) -> BoolQuery {
        let mut query = BoolQuery::default();

        for node in &filter.nodes {
            match node {
                Node::Condition(condition) => {
                    let (occur, clause) = self.leaf(condition);
                    query.push(occur, clause);
                }
                Node::Group(group) => match group.kind {
                    GroupKind::And => {
                        for item in &group.items {
                            query.push(Occur::Must, self.nested(item));
                        }
                    }
                    GroupKind::Or if query.should.is_empty() => {
                        for item in &group.items {
                            query.push(Occur::Should, self.nested(item));
                        }
                    }
                    GroupKind::Or => query.push(Occur::Must, self.group(group)),
                },
            }
        }

        query
    }

    /// Routes a top-level condition to its bool clause.
    fn leaf(&self, condition: &Condition) -> (Occur, Value) {
        let field = condition.field.as_str();
        match &condition.op {
            Op::Eq(value) => (Occur::Must, equality(field, value)),
            Op::Like(pattern) => (Occur::Must, wildcard(field, pattern)),
            Op::NotEq(value) => (Occur::MustNot, equality(field, value)),
            Op::NotIn(values) => (Occur::MustNot, terms(field, values)),
            Op::IsNull => (Occur::MustNot, exists(field)),
            Op::In(values) => (Occur::Filter, terms(field, values)),
            Op::IsNotNull => (Occur::Filter, exists(field)),
            Op::Gt(value) => (Occur::Filter, range(field, &[("gt", value)])),
            Op::Gte(value) => (Occur::Filter, range(field, &[("gte", value)])),
            Op::Lt(value) => (Occur::Filter, range(field, &[("lt", value)])),
            Op::Lte(value) => (Occur::Filter, range(field, &[("lte", value)])),
            Op::Between(lower, upper) => {
                let (lo, hi) = match self.config.search_between {
                    BetweenBounds::Exclusive => ("gt", "lt"),
                    BetweenBounds::Inclusive => ("gte", "lte"),
                };
                (Occur::Filter, range(field, &[(lo, lower), (hi, upper)]))
            }
        }
    }

    /// A node inside a group, as one self-contained clause.
    fn nested(&self, node: &Node) -> Value {
        match node {
            Node::Condition(condition) => match self.leaf(condition) {
                (Occur::MustNot, clause) => json!({"bool": {"must_not": [clause]}}),
                (_, clause) => clause,
            },
            Node::Group(group) => self.group(group),
        }
    }

    fn group(&self, group: &Group) -> Value {
        let clauses: Vec<Value> = group.items.iter().map(|item| self.nested(item)).collect();
        match group.kind {
            GroupKind::And => json!({"bool": {"must": clauses}}),
            GroupKind::Or => json!({"bool": {"should": clauses, "minimum_should_match": 1}}),
        }
    }
}

impl QueryCompiler for SearchCompiler {
    type Query = SearchRequest;

    fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    fn compile(&self, filter: &Filter, hints: &Hints) -> SearchRequest {
        let mut request = SearchRequest::new(self.bool_query(filter));

        request.sort = hints.sort.as_ref().map(sort_clauses);
        request.size = hints.limit;
        request.from = hints.skip;

        debug!(
            "Compiled search query with {} clauses from {} filter nodes",
            request.bool_query().len(),
            filter.len()
        );
        request
    }
}

fn sort_clauses(sort: &Sort) -> Vec<Value> {
    match sort {
        Sort::Field(field) => vec![Value::String(field.clone())],
        Sort::Keys(keys) => keys
            .iter()
            .map(|key| {
                json!({ key.field.as_str(): { "order": key.direction.as_str() } })
            })
            .collect(),
    }
}

fn equality(field: &str, value: &Value) -> Value {
    match value {
        Value::Array(values) => terms(field, values),
        other => json!({"term": { field: other }}),
    }
}

fn terms(field: &str, values: &[Value]) -> Value {
    json!({"terms": { field: values }})
}

fn wildcard(field: &str, pattern: &str) -> Value {
    json!({"wildcard": { field: pattern.replace('%', "*") }})
}

fn exists(field: &str) -> Value {
    json!({"exists": {"field": field}})
}

fn range(field: &str, bounds: &[(&str, &Value)]) -> Value {
    let bounds: Map<String, Value> = bounds
        .iter()
        .map(|(key, value)| (key.to_string(), (*value).clone()))
        .collect();
    json!({"range": { field: bounds }})
}
