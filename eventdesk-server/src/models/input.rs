//! Validated record payloads
//!
//! A [`RecordInput`] can only be built through [`RecordInput::parse`], so
//! the repository never sees a payload without its required field or with
//! mistyped scalars.

use serde_json::{Map, Value};

use super::schema::{FieldKind, FieldSpec, RecordSchema};
use super::ValidationError;

/// Wire-side value of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Real(f64),
    List(Vec<String>),
}

impl FieldValue {
    /// JSON rendering. Lists always render as arrays, never null.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Text(s) => Value::String(s.clone()),
            Self::Integer(n) => Value::from(*n),
            Self::Real(n) => Value::from(*n),
            Self::List(items) => Value::from(items.clone()),
        }
    }
}

/// Payload that passed validation against a [`RecordSchema`].
///
/// Values are held in schema field order.
#[derive(Debug, Clone)]
pub struct RecordInput {
    schema: &'static RecordSchema,
    values: Vec<FieldValue>,
}

impl RecordInput {
    /// Validate a JSON body against `schema`.
    ///
    /// Unknown keys are ignored. Keys that are absent take the field's
    /// default, or null; an explicit `null` is kept as null.
    pub fn parse(schema: &'static RecordSchema, body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or(ValidationError::InvalidFormat {
            field: "body",
            reason: "expected a JSON object",
        })?;

        let values = schema
            .fields
            .iter()
            .map(|spec| parse_field(spec, object))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { schema, values })
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// Values in schema field order.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Value of the field with wire name `name`.
    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&FieldValue> {
        self.schema
            .fields
            .iter()
            .position(|f| f.name == name)
            .map(|i| &self.values[i])
    }
}

fn parse_field(spec: &FieldSpec, object: &Map<String, Value>) -> Result<FieldValue, ValidationError> {
    let value = match object.get(spec.name) {
        None if spec.required => return Err(ValidationError::Missing { field: spec.name }),
        None => {
            return Ok(spec
                .default
                .map(|d| FieldValue::Text(d.to_owned()))
                .unwrap_or(FieldValue::Null));
        }
        Some(Value::Null) if spec.required => {
            return Err(ValidationError::Missing { field: spec.name })
        }
        Some(Value::Null) => return Ok(FieldValue::Null),
        Some(value) => value,
    };

    let invalid = || ValidationError::InvalidType {
        field: spec.name,
        expected: spec.kind.expected(),
    };

    let parsed = match spec.kind {
        FieldKind::Text => FieldValue::Text(value.as_str().ok_or_else(invalid)?.to_owned()),
        FieldKind::Integer => FieldValue::Integer(as_integer(value).ok_or_else(invalid)?),
        FieldKind::Real => FieldValue::Real(value.as_f64().ok_or_else(invalid)?),
        FieldKind::TextList => {
            let items = value.as_array().ok_or_else(invalid)?;
            let strings = items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(invalid)?;
            FieldValue::List(strings)
        }
    };

    if spec.required {
        if let FieldValue::Text(s) = &parsed {
            if s.trim().is_empty() {
                return Err(ValidationError::Empty { field: spec.name });
            }
        }
    }

    Ok(parsed)
}

/// Integral JSON numbers, including floats with no fractional part.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
