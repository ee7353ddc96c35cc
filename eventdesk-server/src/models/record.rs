//! Record as returned to callers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Business fields keyed by wire name.
pub type Fields = Map<String, Value>;

/// A stored record: generated identity, timestamp and its business fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Fields,
    pub updated_at: String,
}

impl Record {
    /// Field value by wire name; `None` when the schema has no such field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat() {
        let mut fields = Fields::new();
        fields.insert("name".into(), json!("Launch Party"));
        fields.insert("assign_employees".into(), json!([]));
        let record = Record {
            id: "abc".into(),
            fields,
            updated_at: "2025-01-01T00:00:00.000000Z".into(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "abc",
                "name": "Launch Party",
                "assign_employees": [],
                "updated_at": "2025-01-01T00:00:00.000000Z"
            })
        );
    }
}
