use std::collections::HashMap;

use serde_json::json;
use sql_builder::{dialect::Ansi, renderer::to_inline_sql};
use uql_engine::{
    QueryCompiler, TranslatorConfig, UqlError, relational::SqlCompiler, search::SearchCompiler,
};

use super::helpers::{base_select, init_tracing};

#[test]
fn test_missing_parameters_default_to_empty() {
    init_tracing();
    let params: HashMap<String, String> = HashMap::new();

    let select = SqlCompiler::new(base_select()).from_request(&params).unwrap();
    assert_eq!(to_inline_sql(&select, &Ansi), r#"SELECT * FROM "test""#);

    let request = SearchCompiler::new().from_request(&params).unwrap();
    assert!(request.bool_query().is_empty());
    assert!(request.sort.is_none());
}

#[test]
fn test_custom_parameter_names() {
    let config = TranslatorConfig::from_json(r#"{"query_param": "filter", "hint_param": "opts"}"#)
        .unwrap();
    let params = [
        ("q", r#"{"ignored": 1}"#),
        ("filter", r#"{"id": {"$in": [1, 2]}}"#),
        ("opts", r#"{"$limit": 3}"#),
    ];

    let select = SqlCompiler::new(base_select())
        .with_config(config.clone())
        .from_request(&params[..])
        .unwrap();
    assert_eq!(
        to_inline_sql(&select, &Ansi),
        r#"SELECT * FROM "test" WHERE "id" IN (1, 2) LIMIT 3"#
    );

    let request = SearchCompiler::new()
        .with_config(config)
        .from_request(&params[..])
        .unwrap()
        .to_value()
        .unwrap();
    assert_eq!(request["size"], json!(3));
}

#[test]
fn test_error_names_the_parameter() {
    let params = [("q", "{}"), ("h", "[]")];
    match SearchCompiler::new().from_request(&params[..]) {
        Err(UqlError::MalformedInput(msg)) => assert!(msg.starts_with("parameter 'h'")),
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn test_invalid_hint() {
    let params = [("h", r#"{"$limit": -1}"#)];
    assert!(matches!(
        SqlCompiler::new(base_select()).from_request(&params[..]),
        Err(UqlError::InvalidHint { .. })
    ));
}
