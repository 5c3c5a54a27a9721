//! Translates filter and hint documents into backend-native queries.
//!
//! Two backends consume the same parsed documents:
//! - [`search::SearchCompiler`] emits a search-engine bool query request.
//! - [`relational::SqlCompiler`] emits a relational `Select` statement.
//!
//! Both implement [`compiler::QueryCompiler`], so callers can go from raw
//! request parameters to a finished query with `from_request`.

pub mod compiler;
pub mod config;
pub mod error;
pub mod relational;
pub mod request;
pub mod search;

pub use compiler::QueryCompiler;
pub use config::{BetweenBounds, TranslatorConfig};
pub use uql_syntax::error::UqlError;
