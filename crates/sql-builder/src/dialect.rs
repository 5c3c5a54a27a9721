//! Defines the `Dialect` trait for database-specific SQL syntax.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Quotes a string literal for inline rendering.
    fn quote_literal(&self, literal: &str) -> String {
        format!("'{}'", literal.replace('\'', "''"))
    }

    /// `LIMIT` text to emit when only an offset is set, for dialects that
    /// reject a bare `OFFSET`.
    fn offset_without_limit(&self) -> Option<&'static str> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn quote_literal(&self, literal: &str) -> String {
        format!("'{}'", literal.replace('\\', "\\\\").replace('\'', "\\'"))
    }

    fn offset_without_limit(&self) -> Option<&'static str> {
        // Largest BIGINT UNSIGNED, the documented "all remaining rows".
        Some("18446744073709551615")
    }
}

/// Plain SQL-92: double-quoted identifiers and `?` placeholders.
#[derive(Debug, Clone)]
pub struct Ansi;

impl Dialect for Ansi {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }
}
