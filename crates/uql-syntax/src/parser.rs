//! Turns decoded JSON documents into the typed filter and hint trees.
//!
//! Every dispatch decision (null checks, groups, bare equality, operator
//! pairs) is taken here exactly once, so backends only pattern-match over
//! [`Node`] and [`Op`].

use crate::{
    Document,
    ast::{
        filter::{Filter, GroupKind, Node, Op},
        hint::{Hints, Sort, SortKey},
    },
    error::UqlError,
    operator::{HintKey, Operator, OperatorClass, SortDirection},
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Decodes a raw JSON string that must hold an object.
pub fn parse_document(raw: &str) -> Result<Document, UqlError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| UqlError::malformed(format!("invalid JSON: {e}")))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(UqlError::malformed(format!(
            "expected a JSON object, found {}",
            kind_of(&other)
        ))),
    }
}

/// Parses a filter document. Top-level entries are implicitly AND-ed.
pub fn parse_filter(doc: &Document) -> Result<Filter, UqlError> {
    let mut nodes = Vec::with_capacity(doc.len());
    for (key, value) in doc {
        if let Some(node) = parse_entry(key, value)? {
            nodes.push(node);
        }
    }
    Ok(Filter::new(nodes))
}

/// Parses one `key: value` pair of a filter document.
///
/// Returns `Ok(None)` when the entry contributes no predicate (unknown
/// operator, empty operator map, empty group).
pub fn parse_entry(key: &str, value: &Value) -> Result<Option<Node>, UqlError> {
    match key.parse::<Operator>() {
        Ok(Operator::Null) => {
            let field = field_name(Operator::Null, value)?;
            return Ok(Some(Node::condition(field, Op::IsNull)));
        }
        Ok(Operator::NotNull) => {
            let field = field_name(Operator::NotNull, value)?;
            return Ok(Some(Node::condition(field, Op::IsNotNull)));
        }
        Ok(op @ (Operator::And | Operator::Or)) => {
            if let Value::Array(items) = value {
                let kind = if op == Operator::And {
                    GroupKind::And
                } else {
                    GroupKind::Or
                };
                return parse_group(op, kind, items);
            }
        }
        _ => {}
    }

    match value {
        Value::Object(pair) => parse_operator_pair(key, pair),
        // Scalars and sequences without an operator wrapper are equality.
        other => Ok(Some(Node::condition(key, Op::Eq(other.clone())))),
    }
}

fn parse_group(op: Operator, kind: GroupKind, items: &[Value]) -> Result<Option<Node>, UqlError> {
    let mut nodes = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(sub) = item else {
            return Err(UqlError::invalid_operand(
                op.token(),
                op,
                format!("group elements must be objects, found {}", kind_of(item)),
            ));
        };

        // Each element contributes its first entry only.
        let Some((key, value)) = sub.iter().next() else {
            debug!("Skipping empty element in {} group", op);
            continue;
        };

        if let Some(node) = parse_entry(key, value)? {
            nodes.push(node);
        }
    }

    if nodes.is_empty() {
        debug!("Dropping {} group without predicates", op);
        return Ok(None);
    }

    Ok(Some(match kind {
        GroupKind::And => Node::and(nodes),
        GroupKind::Or => Node::or(nodes),
    }))
}

fn parse_operator_pair(field: &str, pair: &Map<String, Value>) -> Result<Option<Node>, UqlError> {
    // Only the first operator of the map is honored.
    let Some((token, operand)) = pair.iter().next() else {
        debug!("Skipping field '{}' with an empty operator map", field);
        return Ok(None);
    };

    let op = match token.parse::<Operator>() {
        Ok(op) => op,
        Err(_) => {
            debug!("Skipping unknown operator '{}' on field '{}'", token, field);
            return Ok(None);
        }
    };

    let op = match op.class() {
        OperatorClass::Logical => parse_logical(field, op, operand)?,
        OperatorClass::Comparison => Some(parse_comparison(field, op, operand)?),
    };

    Ok(op.map(|op| Node::condition(field, op)))
}

fn parse_logical(field: &str, op: Operator, operand: &Value) -> Result<Option<Op>, UqlError> {
    let parsed = match op {
        Operator::Not => {
            if operand.is_object() {
                return Err(UqlError::invalid_operand(field, op, "expected a value"));
            }
            Op::NotEq(operand.clone())
        }
        Operator::In => Op::In(sequence(field, op, operand)?),
        Operator::NotIn => Op::NotIn(sequence(field, op, operand)?),
        Operator::Like => match operand {
            Value::String(pattern) => Op::Like(pattern.clone()),
            other => {
                return Err(UqlError::invalid_operand(
                    field,
                    op,
                    format!("expected a string pattern, found {}", kind_of(other)),
                ));
            }
        },
        Operator::Or | Operator::And | Operator::Null | Operator::NotNull => {
            debug!("Operator '{}' is not valid inside field '{}'", op, field);
            return Ok(None);
        }
        _ => unreachable!("comparison operator routed as logical"),
    };

    Ok(Some(parsed))
}

fn parse_comparison(field: &str, op: Operator, operand: &Value) -> Result<Op, UqlError> {
    if op == Operator::Between {
        let bounds = sequence(field, op, operand)?;
        return match <[Value; 2]>::try_from(bounds) {
            Ok([lower, upper]) => Ok(Op::Between(lower, upper)),
            Err(bounds) => Err(UqlError::invalid_operand(
                field,
                op,
                format!("expected [lower, upper], found {} elements", bounds.len()),
            )),
        };
    }

    if operand.is_array() || operand.is_object() {
        return Err(UqlError::invalid_operand(
            field,
            op,
            format!("expected a scalar, found {}", kind_of(operand)),
        ));
    }

    let value = operand.clone();
    Ok(match op {
        Operator::Greater => Op::Gt(value),
        Operator::GreaterEqual => Op::Gte(value),
        Operator::Less => Op::Lt(value),
        Operator::LessEqual => Op::Lte(value),
        _ => unreachable!("logical operator routed as comparison"),
    })
}

fn sequence(field: &str, op: Operator, operand: &Value) -> Result<Vec<Value>, UqlError> {
    match operand {
        Value::Array(values) => Ok(values.clone()),
        other => Err(UqlError::invalid_operand(
            field,
            op,
            format!("expected an array, found {}", kind_of(other)),
        )),
    }
}

fn field_name(op: Operator, value: &Value) -> Result<String, UqlError> {
    match value {
        Value::String(field) => Ok(field.clone()),
        other => Err(UqlError::invalid_operand(
            op.token(),
            op,
            format!("expected a field name, found {}", kind_of(other)),
        )),
    }
}

/// Parses a hint document. Unknown keys are ignored.
pub fn parse_hints(doc: &Document) -> Result<Hints, UqlError> {
    let mut hints = Hints::default();

    for (key, value) in doc {
        match key.parse::<HintKey>() {
            Ok(HintKey::Sort) => hints.sort = parse_sort(value),
            Ok(hint @ HintKey::Limit) => hints.limit = Some(parse_count(hint, value)?),
            Ok(hint @ HintKey::Skip) => hints.skip = Some(parse_count(hint, value)?),
            Err(_) => warn!("Ignoring unknown hint '{}'", key),
        }
    }

    Ok(hints)
}

fn parse_sort(value: &Value) -> Option<Sort> {
    match value {
        Value::String(field) => Some(Sort::Field(field.clone())),
        Value::Object(keys) => {
            let keys = keys
                .iter()
                .map(|(field, token)| {
                    let direction = SortDirection::from_token(token);
                    if direction == SortDirection::Descending
                        && !SortDirection::is_descending_alias(token)
                    {
                        debug!("Unrecognized sort direction {} for '{}', using desc", token, field);
                    }
                    SortKey::new(field.clone(), direction)
                })
                .collect();
            Some(Sort::Keys(keys))
        }
        other => {
            warn!("Ignoring {} sort hint, expected a field or an object", kind_of(other));
            None
        }
    }
}

fn parse_count(hint: HintKey, value: &Value) -> Result<u64, UqlError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| UqlError::InvalidHint {
        hint: hint.to_string(),
        reason: format!("expected a non-negative integer, found {value}"),
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
