//! Typestate builder for `Select` statements.
//!
//! A statement must name its table before filters, ordering or pagination
//! can be attached, so `SelectBuilder<Unbound>` only offers `columns` and
//! `from`.

use std::marker::PhantomData;

use crate::ast::{
    common::{OrderDir, TableRef},
    expr::Expr,
    predicate::{Combinator, PredicateGroup},
    select::{OrderByExpr, Select},
};

/// No table chosen yet.
#[derive(Debug, Clone)]
pub struct Unbound;

/// Table chosen; clauses can be attached.
#[derive(Debug, Clone)]
pub struct Bound;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    state: PhantomData<State>,
}

impl Default for SelectBuilder<Unbound> {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder<Unbound> {
    /// Starts a `SELECT *`.
    pub fn new() -> Self {
        Self {
            ast: Select {
                columns: vec![Expr::Wildcard],
                ..Default::default()
            },
            state: PhantomData,
        }
    }

    pub fn columns(mut self, columns: Vec<Expr>) -> Self {
        self.ast.columns = columns;
        self
    }

    pub fn from(mut self, table: TableRef) -> SelectBuilder<Bound> {
        self.ast.from = Some(table);
        SelectBuilder {
            ast: self.ast,
            state: PhantomData,
        }
    }
}

impl SelectBuilder<Bound> {
    /// Continues from an existing statement, e.g. a shared template.
    pub fn resume(ast: Select) -> Self {
        Self {
            ast,
            state: PhantomData,
        }
    }

    /// AND-s `group` with the current `WHERE` predicates.
    ///
    /// An existing AND group is extended in place; an existing OR group is
    /// parenthesized first so its precedence survives.
    pub fn filter(mut self, group: PredicateGroup) -> Self {
        if group.is_empty() {
            return self;
        }

        let current = std::mem::take(&mut self.ast.where_clause);
        self.ast.where_clause = if current.is_empty() {
            group
        } else if current.combinator == Combinator::And {
            let mut merged = current;
            merged.extend(group);
            merged
        } else {
            let mut merged = PredicateGroup::and();
            merged.nest(current);
            merged.extend(group);
            merged
        };
        self
    }

    /// Appends a sort key after any existing ones.
    pub fn order_by(mut self, expr: Expr, direction: OrderDir) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    pub fn build(self) -> Select {
        self.ast
    }
}
