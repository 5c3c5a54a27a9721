//! A single-table `SELECT` with filtering, ordering and pagination.

use crate::ast::{
    common::{OrderDir, TableRef},
    expr::Expr,
    predicate::PredicateGroup,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// Projected columns; `*` when built through `SelectBuilder`.
    pub columns: Vec<Expr>,

    pub from: Option<TableRef>,

    /// The WHERE predicates; omitted when empty.
    pub where_clause: PredicateGroup,

    pub order_by: Vec<OrderByExpr>,

    /// Page size and offset, bound as parameters when rendered.
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: OrderDir,
}
