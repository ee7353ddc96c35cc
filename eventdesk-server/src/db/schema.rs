//! Schema manager
//!
//! Tables are generated from the static record schema. Creation is
//! idempotent; an existing table is left as-is even if its columns differ.

use sqlx::sqlite::SqliteConnection;

use crate::models::RecordSchema;

/// DDL for the table backing `schema`.
pub fn create_table_sql(schema: &RecordSchema) -> String {
    let mut columns = vec!["id TEXT PRIMARY KEY".to_owned()];
    columns.extend(schema.fields.iter().map(|f| {
        let not_null = if f.required { " NOT NULL" } else { "" };
        format!("{} {}{}", f.column, f.kind.sql_type(), not_null)
    }));
    columns.push("updated_at TEXT NOT NULL".to_owned());

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        schema.collection,
        columns.join(",\n    ")
    )
}

/// Create the records table if it does not exist yet.
pub async fn ensure_schema(
    conn: &mut SqliteConnection,
    schema: &RecordSchema,
) -> Result<(), sqlx::Error> {
    let sql = create_table_sql(schema);
    sqlx::query(&sql).execute(&mut *conn).await?;
    tracing::debug!(table = schema.collection, "schema ensured");
    Ok(())
}
