//! Relational backend: compiles a parsed filter into the `WHERE` predicates of
//! a `Select` statement, and hints into `ORDER BY` / `LIMIT` / `OFFSET`.

use crate::{
    compiler::QueryCompiler,
    config::{BetweenBounds, TranslatorConfig},
};
use serde_json::Value;
use sql_builder::{
    ast::{
        common::OrderDir,
        expr::Expr,
        predicate::{Combinator, PredicateGroup},
        select::{OrderByExpr, Select},
    },
    builder::select::{Bound, SelectBuilder},
    ident_path, value,
};
use tracing::debug;
use uql_syntax::{
    ast::{
        filter::{Condition, Filter, GroupKind, Node, Op},
        hint::Hints,
    },
    operator::SortDirection,
};

/// Compiles documents against a base `Select` template.
///
/// The template is cloned on every call, so its own predicates, ordering and
/// pagination are kept and the compiler stays reusable.
#[derive(Debug, Clone)]
pub struct SqlCompiler {
    template: Select,
    config: TranslatorConfig,
}

impl SqlCompiler {
    pub fn new(template: Select) -> Self {
        SqlCompiler {
            template,
            config: TranslatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn template(&self) -> &Select {
        &self.template
    }

    /// The AND group of all top-level predicates of `filter`.
    pub fn predicates(&self, filter: &Filter) -> PredicateGroup {
        let mut group = PredicateGroup::and();
        for node in &filter.nodes {
            group.push(self.node(node));
        }
        group
    }

    /// Predicates plus ordering and pagination, detached from any statement.
    pub fn relational_query(&self, filter: &Filter, hints: &Hints) -> RelationalQuery {
        let order_by = hints
            .sort
            .as_ref()
            .map(|sort| {
                sort.keys()
                    .into_iter()
                    .map(|key| OrderByExpr {
                        expr: ident_path(&key.field),
                        direction: match key.direction {
                            SortDirection::Ascending => OrderDir::Asc,
                            SortDirection::Descending => OrderDir::Desc,
                        },
                    })
                    .collect()
            })
            .unwrap_or_default();

        RelationalQuery {
            where_clause: self.predicates(filter),
            order_by,
            limit: hints.limit,
            offset: hints.skip,
        }
    }

    fn node(&self, node: &Node) -> Expr {
        match node {
            Node::Condition(condition) => self.condition(condition),
            Node::Group(group) => {
                let combinator = match group.kind {
                    GroupKind::And => Combinator::And,
                    GroupKind::Or => Combinator::Or,
                };
                let mut nested = PredicateGroup::new(combinator);
                for item in &group.items {
                    nested.push(self.node(item));
                }
                Expr::Nested(nested)
            }
        }
    }

    fn condition(&self, condition: &Condition) -> Expr {
        let field = ident_path(&condition.field);
        match &condition.op {
            Op::Eq(Value::Array(values)) => field.in_list(values_of(values)),
            Op::Eq(operand) => field.equal_to(value(operand.clone())),
            Op::NotEq(Value::Array(values)) => field.not_in_list(values_of(values)),
            Op::NotEq(operand) => field.not_equal_to(value(operand.clone())),
            Op::In(values) => field.in_list(values_of(values)),
            Op::NotIn(values) => field.not_in_list(values_of(values)),
            Op::Like(pattern) => field.like(value(Value::String(pattern.clone()))),
            Op::Gt(operand) => field.greater_than(value(operand.clone())),
            Op::Gte(operand) => field.greater_than_or_equal_to(value(operand.clone())),
            Op::Lt(operand) => field.less_than(value(operand.clone())),
            Op::Lte(operand) => field.less_than_or_equal_to(value(operand.clone())),
            Op::Between(lower, upper) => match self.config.relational_between {
                BetweenBounds::Inclusive => {
                    field.between(value(lower.clone()), value(upper.clone()))
                }
                BetweenBounds::Exclusive => Expr::Nested(
                    PredicateGroup::and()
                        .with(field.clone().greater_than(value(lower.clone())))
                        .with(field.less_than(value(upper.clone()))),
                ),
            },
            Op::IsNull => field.is_null(),
            Op::IsNotNull => field.is_not_null(),
        }
    }
}

impl QueryCompiler for SqlCompiler {
    type Query = Select;

    fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    fn compile(&self, filter: &Filter, hints: &Hints) -> Select {
        let query = self.relational_query(filter, hints);
        debug!(
            "Compiled relational query with {} predicates, {} sort keys",
            query.where_clause.count(),
            query.order_by.len()
        );
        query.apply(self.template.clone())
    }
}

/// The relational part of a compiled request, ready to be applied to a
/// statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationalQuery {
    pub where_clause: PredicateGroup,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl RelationalQuery {
    /// Merges into `select`: predicates are AND-ed with its existing `WHERE`,
    /// sort keys are appended, and pagination replaces any existing values.
    pub fn apply(self, select: Select) -> Select {
        self.apply_to(SelectBuilder::resume(select)).build()
    }

    /// Same as [`RelationalQuery::apply`], on a builder that has its table.
    pub fn apply_to(self, builder: SelectBuilder<Bound>) -> SelectBuilder<Bound> {
        let mut builder = builder.filter(self.where_clause);
        for key in self.order_by {
            builder = builder.order_by(key.expr, key.direction);
        }
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }
        if let Some(offset) = self.offset {
            builder = builder.offset(offset);
        }
        builder
    }
}

fn values_of(values: &[Value]) -> Vec<Expr> {
    values.iter().cloned().map(value).collect()
}
