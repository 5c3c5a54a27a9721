pub mod common;
pub mod expr;
pub mod predicate;
pub mod select;
