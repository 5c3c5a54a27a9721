use crate::{
    ast::{
        expr::{BinaryOp, BinaryOperator, Expr, Ident},
        predicate::{Combinator, PredicateGroup},
    },
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Wildcard => r.sql.push('*'),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::BinaryOp(op) => op.render(r),
            Expr::InList {
                expr,
                list,
                negated,
            } => {
                expr.render(r);
                r.sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    item.render(r);
                }
                r.sql.push(')');
            }
            Expr::Like { expr, pattern } => {
                expr.render(r);
                r.sql.push_str(" LIKE ");
                pattern.render(r);
            }
            Expr::Between { expr, low, high } => {
                expr.render(r);
                r.sql.push_str(" BETWEEN ");
                low.render(r);
                r.sql.push_str(" AND ");
                high.render(r);
            }
            Expr::IsNull { expr, negated } => {
                expr.render(r);
                r.sql
                    .push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Expr::Nested(group) => {
                r.sql.push('(');
                group.render(r);
                r.sql.push(')');
            }
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                r.sql.push('.');
            }
            r.sql.push_str(&r.dialect.quote_identifier(part));
        }
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " != ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
    }
}

impl Render for PredicateGroup {
    fn render(&self, r: &mut Renderer) {
        let sep = match self.combinator {
            Combinator::And => " AND ",
            Combinator::Or => " OR ",
        };

        // Empty nested groups would render as `()`.
        let predicates = self
            .predicates
            .iter()
            .filter(|p| !matches!(p, Expr::Nested(group) if group.is_empty()));

        for (i, predicate) in predicates.enumerate() {
            if i > 0 {
                r.sql.push_str(sep);
            }
            predicate.render(r);
        }
    }
}
