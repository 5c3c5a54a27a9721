//! Grammar of the filter/hint query language.
//!
//! A filter document such as `{"age": {"$gte": 18}, "$or": [{"role": "admin"}]}`
//! is parsed once into a typed [`ast::filter::Filter`] tree, and a hint document
//! such as `{"$sort": {"name": "asc"}, "$limit": 20}` into [`ast::hint::Hints`].
//! Backends never look at the raw JSON again.

pub mod ast;
pub mod error;
pub mod operator;
pub mod parser;

pub use serde_json::{Map, Value};

/// A decoded JSON object, as produced by the request adapter.
pub type Document = Map<String, Value>;
