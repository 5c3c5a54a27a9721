//! A composable group of predicates joined by one combinator.

use crate::ast::expr::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

/// Predicates joined with `AND` or `OR`. When nested inside another group it
/// renders in parentheses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredicateGroup {
    pub combinator: Combinator,
    pub predicates: Vec<Expr>,
}

impl PredicateGroup {
    pub fn new(combinator: Combinator) -> Self {
        PredicateGroup {
            combinator,
            predicates: Vec::new(),
        }
    }

    pub fn and() -> Self {
        Self::new(Combinator::And)
    }

    pub fn or() -> Self {
        Self::new(Combinator::Or)
    }

    /// Number of direct predicates; a nested group counts once.
    pub fn count(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn push(&mut self, predicate: Expr) {
        self.predicates.push(predicate);
    }

    pub fn with(mut self, predicate: Expr) -> Self {
        self.push(predicate);
        self
    }

    /// Appends `group` as a single parenthesized predicate.
    pub fn nest(&mut self, group: PredicateGroup) {
        self.predicates.push(Expr::Nested(group));
    }

    /// Appends all predicates of `other` to this group.
    pub fn extend(&mut self, other: PredicateGroup) {
        self.predicates.extend(other.predicates);
    }
}
