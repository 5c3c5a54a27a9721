use serde_json::Value;

use crate::{
    ast::{
        common::{OrderDir, TableRef},
        select::{OrderByExpr, Select},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");
        comma_separated(r, &self.columns);

        if let Some(table) = &self.from {
            r.sql.push_str(" FROM ");
            table.render(r);
        }

        if !self.where_clause.is_empty() {
            r.sql.push_str(" WHERE ");
            self.where_clause.render(r);
        }

        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            comma_separated(r, &self.order_by);
        }

        render_pagination(r, self.limit, self.offset);
    }
}

impl Render for TableRef {
    fn render(&self, r: &mut Renderer) {
        if let Some(schema) = &self.schema {
            r.sql.push_str(&r.dialect.quote_identifier(schema));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        r.sql.push_str(match self.direction {
            OrderDir::Asc => " ASC",
            OrderDir::Desc => " DESC",
        });
    }
}

fn comma_separated<T: Render>(r: &mut Renderer, items: &[T]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        item.render(r);
    }
}

/// `LIMIT` then `OFFSET`. An offset alone gets the dialect's "no limit"
/// value when it has one.
fn render_pagination(r: &mut Renderer, limit: Option<u64>, offset: Option<u64>) {
    match (limit, offset) {
        (Some(limit), _) => {
            r.sql.push_str(" LIMIT ");
            r.add_param(Value::from(limit));
        }
        (None, Some(_)) => {
            if let Some(all_rows) = r.dialect.offset_without_limit() {
                r.sql.push_str(" LIMIT ");
                r.sql.push_str(all_rows);
            }
        }
        (None, None) => {}
    }

    if let Some(offset) = offset {
        r.sql.push_str(" OFFSET ");
        r.add_param(Value::from(offset));
    }
}
