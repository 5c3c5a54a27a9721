use serde_json::json;
use uql_syntax::{
    ast::filter::{GroupKind, Node, Op},
    error::UqlError,
    parser::{parse_document, parse_filter},
};

#[test]
fn test_parse_not_and_like() {
    let doc = parse_document(r#"{"id":{"$not":1},"name":{"$like":"test%"}}"#).unwrap();
    let filter = parse_filter(&doc).unwrap();

    assert_eq!(
        filter.nodes,
        vec![
            Node::condition("id", Op::NotEq(json!(1))),
            Node::condition("name", Op::Like("test%".to_string())),
        ]
    );
}

#[test]
fn test_parse_membership_keeps_order() {
    let doc = parse_document(r#"{"names": {"$in": ["john", "doe"]}, "id": {"$nin": [2, 1]}}"#)
        .unwrap();
    let filter = parse_filter(&doc).unwrap();

    assert_eq!(
        filter.nodes,
        vec![
            Node::condition("names", Op::In(vec![json!("john"), json!("doe")])),
            Node::condition("id", Op::NotIn(vec![json!(2), json!(1)])),
        ]
    );
}

#[test]
fn test_parse_comparisons() {
    let doc = parse_document(
        r#"{"a":{"$gt":1},"b":{"$gte":2},"c":{"$lt":3},"d":{"$lte":4},"e":{"$bt":[5,6]}}"#,
    )
    .unwrap();
    let filter = parse_filter(&doc).unwrap();

    assert_eq!(
        filter.nodes,
        vec![
            Node::condition("a", Op::Gt(json!(1))),
            Node::condition("b", Op::Gte(json!(2))),
            Node::condition("c", Op::Lt(json!(3))),
            Node::condition("d", Op::Lte(json!(4))),
            Node::condition("e", Op::Between(json!(5), json!(6))),
        ]
    );
}

#[test]
fn test_parse_double_nested_groups() {
    let doc = parse_document(
        r#"{"$or":[{"$and":[{"id":1},{"name":"test"}]},{"id":{"$not":1}},{"name":"test"}]}"#,
    )
    .unwrap();
    let filter = parse_filter(&doc).unwrap();

    assert_eq!(filter.len(), 1);
    let Node::Group(outer) = &filter.nodes[0] else {
        panic!("expected a group, got {:?}", filter.nodes[0]);
    };
    assert_eq!(outer.kind, GroupKind::Or);
    assert_eq!(outer.items.len(), 3);

    let Node::Group(inner) = &outer.items[0] else {
        panic!("expected a nested group, got {:?}", outer.items[0]);
    };
    assert_eq!(inner.kind, GroupKind::And);
    assert_eq!(
        inner.items,
        vec![
            Node::condition("id", Op::Eq(json!(1))),
            Node::condition("name", Op::Eq(json!("test"))),
        ]
    );
}

#[test]
fn test_parse_mixed_top_level() {
    let doc = parse_document(
        r#"{"id":{"$not":1},"$or":[{"id":2},{"id":"3"}],"$and":[{"id":2},{"name":"test"}]}"#,
    )
    .unwrap();
    let filter = parse_filter(&doc).unwrap();

    assert_eq!(
        filter.nodes,
        vec![
            Node::condition("id", Op::NotEq(json!(1))),
            Node::or(vec![
                Node::condition("id", Op::Eq(json!(2))),
                Node::condition("id", Op::Eq(json!("3"))),
            ]),
            Node::and(vec![
                Node::condition("id", Op::Eq(json!(2))),
                Node::condition("name", Op::Eq(json!("test"))),
            ]),
        ]
    );
}

#[test]
fn test_parse_is_deterministic() {
    let raw = r#"{"$and":[{"a":{"$in":[1,2]}},{"$or":[{"b":1},{"c":{"$bt":[1,2]}}]}]}"#;
    let first = parse_filter(&parse_document(raw).unwrap()).unwrap();
    let second = parse_filter(&parse_document(raw).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_rejects_bad_like_pattern() {
    let doc = parse_document(r#"{"name":{"$like":5}}"#).unwrap();
    let err = parse_filter(&doc).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid operand for '$like' on field 'name': expected a string pattern, found a number"
    );
}

#[test]
fn test_malformed_documents() {
    for raw in ["a", "", "1", "\"q\"", "null", "[{}]", "{\"a\":"] {
        assert!(
            matches!(parse_document(raw), Err(UqlError::MalformedInput(_))),
            "expected MalformedInput for {raw:?}"
        );
    }
}
