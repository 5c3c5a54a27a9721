use super::helpers::{base_select, doc, init_tracing};
use serde_json::json;
use sql_builder::{
    ast::{expr::Expr, predicate::Combinator},
    dialect::{Ansi, MySql, Postgres},
    renderer::{to_inline_sql, to_sql},
};
use uql_engine::{
    BetweenBounds, QueryCompiler, TranslatorConfig, UqlError, relational::SqlCompiler,
};
use uql_syntax::parser::parse_filter;

fn compile(filter: serde_json::Value, hint: serde_json::Value) -> String {
    init_tracing();
    let select = SqlCompiler::new(base_select())
        .from_params(&doc(filter), &doc(hint))
        .unwrap();
    to_inline_sql(&select, &Ansi)
}

#[test]
fn test_not_and_like() {
    let compiler = SqlCompiler::new(base_select());
    let filter = parse_filter(&doc(json!({"id": {"$not": 1}, "name": {"$like": "test%"}}))).unwrap();

    let group = compiler.predicates(&filter);
    assert_eq!(group.combinator, Combinator::And);
    assert_eq!(group.count(), 2);
    assert_eq!(to_inline_sql(&group, &Ansi), r#""id" != 1 AND "name" LIKE 'test%'"#);
}

#[test]
fn test_simple_in() {
    assert_eq!(
        compile(json!({"names": {"$in": ["john", "doe"]}}), json!({})),
        r#"SELECT * FROM "test" WHERE "names" IN ('john', 'doe')"#
    );
}

#[test]
fn test_and_or_groups() {
    assert_eq!(
        compile(
            json!({"$and": [{"name": "john"}, {"$or": [{"id": 1}, {"id": 2}]}]}),
            json!({})
        ),
        r#"SELECT * FROM "test" WHERE ("name" = 'john' AND ("id" = 1 OR "id" = 2))"#
    );
}

#[test]
fn test_null_checks_and_comparisons() {
    assert_eq!(
        compile(
            json!({"$null": "deleted_at", "$notnull": "email", "age": {"$gte": 18}, "rank": {"$lt": 5}}),
            json!({})
        ),
        r#"SELECT * FROM "test" WHERE "deleted_at" IS NULL AND "email" IS NOT NULL AND "age" >= 18 AND "rank" < 5"#
    );
}

#[test]
fn test_not_in_and_bare_sequence() {
    assert_eq!(
        compile(json!({"a": {"$nin": [1, 2]}, "b": [3, 4]}), json!({})),
        r#"SELECT * FROM "test" WHERE "a" NOT IN (1, 2) AND "b" IN (3, 4)"#
    );
}

#[test]
fn test_between_divergence() {
    let filter = json!({"price": {"$bt": [100, 200]}});
    assert_eq!(
        compile(filter.clone(), json!({})),
        r#"SELECT * FROM "test" WHERE "price" BETWEEN 100 AND 200"#
    );

    let config = TranslatorConfig::default().with_relational_between(BetweenBounds::Exclusive);
    let select = SqlCompiler::new(base_select())
        .with_config(config)
        .from_params(&doc(filter), &doc(json!({})))
        .unwrap();
    assert_eq!(
        to_inline_sql(&select, &Ansi),
        r#"SELECT * FROM "test" WHERE ("price" > 100 AND "price" < 200)"#
    );
}

#[test]
fn test_hints() {
    assert_eq!(
        compile(
            json!({"id": {"$gt": 1}}),
            json!({"$sort": {"id": "asc", "name": -1}, "$limit": 10, "$skip": 5})
        ),
        r#"SELECT * FROM "test" WHERE "id" > 1 ORDER BY "id" ASC, "name" DESC LIMIT 10 OFFSET 5"#
    );
}

#[test]
fn test_bound_parameters() {
    let select = SqlCompiler::new(base_select())
        .from_params(&doc(json!({"users.name": "o'brien", "age": {"$lte": 40}})), &doc(json!({})))
        .unwrap();

    let (sql, params) = to_sql(&select, &Postgres);
    assert_eq!(sql, r#"SELECT * FROM "test" WHERE "users"."name" = $1 AND "age" <= $2"#);
    assert_eq!(params, vec![json!("o'brien"), json!(40)]);

    let (sql, _) = to_sql(&select, &MySql);
    assert_eq!(sql, "SELECT * FROM `test` WHERE `users`.`name` = ? AND `age` <= ?");
}

#[test]
fn test_unknown_operator_yields_no_predicates() {
    let compiler = SqlCompiler::new(base_select());
    let filter = parse_filter(&doc(json!({"$abc": {"$a": 1}}))).unwrap();
    assert_eq!(compiler.predicates(&filter).count(), 0);

    assert_eq!(compile(json!({"$abc": {"$a": 1}}), json!({})), r#"SELECT * FROM "test""#);
}

#[test]
fn test_reentrancy() {
    init_tracing();
    let compiler = SqlCompiler::new(base_select());
    let empty = doc(json!({}));

    let first = compiler.from_params(&doc(json!({"a": 1, "b": 2})), &empty).unwrap();
    let second = compiler.from_params(&doc(json!({"c": 3})), &empty).unwrap();

    assert_eq!(first.where_clause.count(), 2);
    assert_eq!(second.where_clause.count(), 1);
    assert!(matches!(second.where_clause.predicates[0], Expr::BinaryOp(_)));
    assert!(compiler.template().where_clause.is_empty());
    assert_eq!(
        compiler.from_params(&doc(json!({"a": 1, "b": 2})), &empty).unwrap(),
        first
    );
}

#[test]
fn test_malformed_input() {
    let compiler = SqlCompiler::new(base_select());
    let params = [("q", "not json"), ("h", "{}")];
    assert!(matches!(
        compiler.from_request(&params[..]),
        Err(UqlError::MalformedInput(_))
    ));

    let params = [("q", "{}"), ("h", "\"id\"")];
    assert!(matches!(
        compiler.from_request(&params[..]),
        Err(UqlError::MalformedInput(_))
    ));
}

#[test]
fn test_invalid_operand() {
    let compiler = SqlCompiler::new(base_select());
    let result = compiler.from_params(&doc(json!({"price": {"$bt": [1]}})), &doc(json!({})));
    assert!(matches!(result, Err(UqlError::InvalidOperand { .. })));
}

#[test]
fn test_not_with_sequence_is_not_in() {
    assert_eq!(
        compile(json!({"tags": {"$not": ["a", "b"]}}), json!({})),
        r#"SELECT * FROM "test" WHERE "tags" NOT IN ('a', 'b')"#
    );
}

#[test]
fn test_qualified_paths_quote_every_segment() {
    assert_eq!(
        compile(json!({"s.t.c": 1}), json!({"$sort": {"s.t.c": 1}})),
        r#"SELECT * FROM "test" WHERE "s"."t"."c" = 1 ORDER BY "s"."t"."c" ASC"#
    );
}

#[test]
fn test_skip_without_limit_on_mysql() {
    let select = SqlCompiler::new(base_select())
        .from_params(&doc(json!({})), &doc(json!({"$skip": 10})))
        .unwrap();

    let (sql, params) = to_sql(&select, &MySql);
    assert_eq!(sql, "SELECT * FROM `test` LIMIT 18446744073709551615 OFFSET ?");
    assert_eq!(params, vec![json!(10)]);

    let (sql, _) = to_sql(&select, &Postgres);
    assert_eq!(sql, r#"SELECT * FROM "test" OFFSET $1"#);
}
