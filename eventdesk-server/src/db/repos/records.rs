//! Record repository
//!
//! One generic CRUD engine for every resource, parameterized by its static
//! [`RecordSchema`]:
//! - list: single SELECT, most recently updated first
//! - create: generated UUID + timestamp, full-row INSERT
//! - update: full-row replace; zero affected rows means not found
//! - delete: unconditional; zero affected rows means not found

use chrono::{SecondsFormat, Utc};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use uuid::Uuid;

use crate::db::codec::{self, StoredValue};
use crate::db::Database;
use crate::models::{Record, RecordInput, RecordSchema};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("{found} payload passed to the {expected} store")]
    SchemaMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// SQL text generated once per schema.
#[derive(Debug, Clone)]
struct Statements {
    select_all: String,
    insert: String,
    update: String,
    delete: String,
}

impl Statements {
    fn new(schema: &RecordSchema) -> Self {
        let table = schema.collection;
        let columns: Vec<&str> = schema.columns().collect();

        let placeholders = vec!["?"; columns.len() + 2].join(", ");
        let assignments: String = columns
            .iter()
            .map(|c| format!("{c} = ?, "))
            .collect();

        Self {
            select_all: format!(
                "SELECT id, {}, updated_at FROM {table} ORDER BY updated_at DESC, rowid DESC",
                columns.join(", ")
            ),
            insert: format!(
                "INSERT INTO {table} (id, {}, updated_at) VALUES ({placeholders})",
                columns.join(", ")
            ),
            update: format!("UPDATE {table} SET {assignments}updated_at = ? WHERE id = ?"),
            delete: format!("DELETE FROM {table} WHERE id = ?"),
        }
    }
}

/// Record repository for a single resource
#[derive(Debug, Clone)]
pub struct RecordRepo {
    db: Database,
    schema: &'static RecordSchema,
    sql: Statements,
}

impl RecordRepo {
    /// Build a repository over `db`. The table must already exist
    /// (see [`crate::db::open_store`]).
    pub fn new(db: Database, schema: &'static RecordSchema) -> Self {
        Self {
            db,
            schema,
            sql: Statements::new(schema),
        }
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// All records, most recently updated first.
    pub async fn list(&self) -> Result<Vec<Record>, DbError> {
        let mut conn = self.db.acquire().await?;
        let rows = sqlx::query(&self.sql.select_all)
            .fetch_all(&mut conn)
            .await?;

        let records = rows
            .iter()
            .map(|row| {
                let stored = codec::read_row(self.schema, row)?;
                Ok(Record {
                    id: sqlx::Row::try_get(row, "id")?,
                    fields: codec::decode(self.schema, stored),
                    updated_at: sqlx::Row::try_get(row, "updated_at")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        tracing::debug!(resource = self.schema.collection, count = records.len(), "listed records");
        Ok(records)
    }

    /// Insert a new record with a generated id.
    ///
    /// Returns the record synthesized from the input; it is not re-read.
    pub async fn create(&self, input: RecordInput) -> Result<Record, DbError> {
        self.check_schema(&input)?;

        let id = Uuid::new_v4().to_string();
        let updated_at = now_timestamp();
        let stored = codec::encode(&input)?;

        let mut query = sqlx::query(&self.sql.insert).bind(id.clone());
        for value in stored {
            query = bind_value(query, value);
        }
        query = query.bind(updated_at.clone());

        let mut conn = self.db.acquire().await?;
        query.execute(&mut conn).await?;

        tracing::debug!(resource = self.schema.collection, %id, "created record");
        Ok(Record {
            id,
            fields: codec::to_fields(&input),
            updated_at,
        })
    }

    /// Replace every field of an existing record.
    ///
    /// Fields missing from `input` were already resolved to null (or their
    /// default) during validation, so this never merges with stored values.
    pub async fn update(&self, id: &str, input: RecordInput) -> Result<Record, DbError> {
        self.check_schema(&input)?;

        let updated_at = now_timestamp();
        let stored = codec::encode(&input)?;

        let mut query = sqlx::query(&self.sql.update);
        for value in stored {
            query = bind_value(query, value);
        }
        query = query.bind(updated_at.clone()).bind(id.to_owned());

        let mut conn = self.db.acquire().await?;
        let result = query.execute(&mut conn).await?;

        if result.rows_affected() == 0 {
            return Err(self.not_found(id));
        }

        tracing::debug!(resource = self.schema.collection, %id, "updated record");
        Ok(Record {
            id: id.to_owned(),
            fields: codec::to_fields(&input),
            updated_at,
        })
    }

    /// Delete a record by id.
    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(&self.sql.delete)
            .bind(id.to_owned())
            .execute(&mut conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(self.not_found(id));
        }

        tracing::debug!(resource = self.schema.collection, %id, "deleted record");
        Ok(())
    }

    /// Create each input in order.
    ///
    /// Not atomic: a storage fault part-way leaves the earlier records in place.
    pub async fn import(&self, inputs: Vec<RecordInput>) -> Result<Vec<Record>, DbError> {
        for input in &inputs {
            self.check_schema(input)?;
        }

        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(self.create(input).await?);
        }

        tracing::info!(resource = self.schema.collection, count = created.len(), "imported records");
        Ok(created)
    }

    fn not_found(&self, id: &str) -> DbError {
        DbError::NotFound {
            resource: self.schema.label,
            id: id.to_owned(),
        }
    }

    /// Inputs are bound positionally, so one validated against another
    /// schema must never reach the statement.
    fn check_schema(&self, input: &RecordInput) -> Result<(), DbError> {
        if std::ptr::eq(input.schema(), self.schema) {
            Ok(())
        } else {
            Err(DbError::SchemaMismatch {
                expected: self.schema.label,
                found: input.schema().label,
            })
        }
    }
}

/// Current UTC time, fixed width so lexical order is chronological.
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: StoredValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        StoredValue::Null => query.bind(None::<String>),
        StoredValue::Text(s) => query.bind(s),
        StoredValue::Integer(n) => query.bind(n),
        StoredValue::Real(n) => query.bind(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EVENTS;

    #[test]
    fn statements_cover_every_column() {
        let sql = Statements::new(&EVENTS);
        let placeholders = |s: &str| s.matches('?').count();

        assert_eq!(placeholders(&sql.insert), EVENTS.fields.len() + 2);
        assert_eq!(placeholders(&sql.update), EVENTS.fields.len() + 2);
        assert!(sql.update.ends_with("updated_at = ? WHERE id = ?"));
        assert!(sql.select_all.ends_with("ORDER BY updated_at DESC, rowid DESC"));
    }

    #[test]
    fn timestamps_are_fixed_width_utc() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2025-01-01T00:00:00.000000Z".len());
        assert!(ts.ends_with('Z'));
    }
}
