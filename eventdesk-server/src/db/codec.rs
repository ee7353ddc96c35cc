//! Record codec - wire values to storage columns and back
//!
//! Scalars pass through unchanged. List fields are stored as a compact JSON
//! array of strings; an empty list is stored as NULL, so "empty" and
//! "absent" are indistinguishable once persisted. Reads always produce a
//! list, never null, and a malformed stored list degrades to `[]`.

use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::models::{FieldKind, FieldValue, Fields, RecordInput, RecordSchema};

/// Storage-side value of a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Null,
    Text(String),
    Integer(i64),
    Real(f64),
}

/// Encode a validated input into column values, in schema field order.
pub fn encode(input: &RecordInput) -> Result<Vec<StoredValue>, serde_json::Error> {
    input.values().iter().map(encode_value).collect()
}

fn encode_value(value: &FieldValue) -> Result<StoredValue, serde_json::Error> {
    Ok(match value {
        FieldValue::Null => StoredValue::Null,
        FieldValue::Text(s) => StoredValue::Text(s.clone()),
        FieldValue::Integer(n) => StoredValue::Integer(*n),
        FieldValue::Real(n) => StoredValue::Real(*n),
        FieldValue::List(items) if items.is_empty() => StoredValue::Null,
        FieldValue::List(items) => StoredValue::Text(serde_json::to_string(items)?),
    })
}

/// Decode column values (schema field order) into wire fields.
pub fn decode(schema: &RecordSchema, stored: Vec<StoredValue>) -> Fields {
    schema
        .fields
        .iter()
        .zip(stored)
        .map(|(spec, value)| {
            let json = match spec.kind {
                FieldKind::TextList => Value::from(decode_list(&value)),
                _ => scalar_to_json(value),
            };
            (spec.name.to_owned(), json)
        })
        .collect()
}

/// Wire fields for a validated input, normalized the way a read would
/// return them.
pub fn to_fields(input: &RecordInput) -> Fields {
    input
        .schema()
        .fields
        .iter()
        .zip(input.values())
        .map(|(spec, value)| {
            let json = match (spec.kind, value) {
                (FieldKind::TextList, FieldValue::Null) => Value::Array(Vec::new()),
                (_, value) => value.to_json(),
            };
            (spec.name.to_owned(), json)
        })
        .collect()
}

/// Parse a stored list column. Never fails.
pub fn decode_list(value: &StoredValue) -> Vec<String> {
    let StoredValue::Text(raw) = value else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items.into_iter().filter_map(element_to_string).collect(),
        _ => Vec::new(),
    }
}

fn element_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn scalar_to_json(value: StoredValue) -> Value {
    match value {
        StoredValue::Null => Value::Null,
        StoredValue::Text(s) => Value::String(s),
        StoredValue::Integer(n) => Value::from(n),
        StoredValue::Real(n) => Value::from(n),
    }
}

/// Read the business columns of `row` by name, in schema field order.
pub fn read_row(schema: &RecordSchema, row: &SqliteRow) -> Result<Vec<StoredValue>, sqlx::Error> {
    schema
        .fields
        .iter()
        .map(|spec| {
            let value = match spec.kind {
                FieldKind::Text | FieldKind::TextList => row
                    .try_get::<Option<String>, _>(spec.column)?
                    .map(StoredValue::Text),
                FieldKind::Integer => row
                    .try_get::<Option<i64>, _>(spec.column)?
                    .map(StoredValue::Integer),
                FieldKind::Real => row
                    .try_get::<Option<f64>, _>(spec.column)?
                    .map(StoredValue::Real),
            };
            Ok(value.unwrap_or(StoredValue::Null))
        })
        .collect()
}
