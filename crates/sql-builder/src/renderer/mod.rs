//! Defines the core rendering trait and context for converting AST to SQL.

use serde_json::Value;

use crate::dialect::Dialect;

pub mod expr;
pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// How values are written into the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// Dialect placeholders, values collected in `params`.
    Bind,
    /// Quoted literals written directly into the SQL; for logs and tests only.
    Inline,
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    pub style: ParamStyle,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            style: ParamStyle::Bind,
        }
    }

    pub fn inline(dialect: &'a dyn Dialect) -> Self {
        Self {
            style: ParamStyle::Inline,
            ..Self::new(dialect)
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        match self.style {
            ParamStyle::Bind => {
                self.params.push(value);
                let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
                self.sql.push_str(&placeholder);
            }
            ParamStyle::Inline => {
                let literal = self.literal(&value);
                self.sql.push_str(&literal);
            }
        }
    }

    fn literal(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".into(),
            Value::Bool(true) => "TRUE".into(),
            Value::Bool(false) => "FALSE".into(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => self.dialect.quote_literal(s),
            other => self.dialect.quote_literal(&other.to_string()),
        }
    }
}

/// Renders `node` with bound parameters.
pub fn to_sql(node: &impl Render, dialect: &dyn Dialect) -> (String, Vec<Value>) {
    let mut renderer = Renderer::new(dialect);
    node.render(&mut renderer);
    renderer.finish()
}

/// Renders `node` with values inlined as literals.
pub fn to_inline_sql(node: &impl Render, dialect: &dyn Dialect) -> String {
    let mut renderer = Renderer::inline(dialect);
    node.render(&mut renderer);
    renderer.finish().0
}
