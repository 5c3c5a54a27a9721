use crate::ast::expr::{Expr, Ident};
use serde_json::Value;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod macros;
pub mod renderer;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident::new(name))
}

/// Identifier from a possibly dotted path, e.g. `users.id`.
/// Every segment is quoted separately.
pub fn ident_path(path: &str) -> Expr {
    Expr::Identifier(Ident::from_path(path))
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}
