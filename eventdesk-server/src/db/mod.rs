//! Database layer - connection provider, schema manager, codec, repositories
//!
//! # Design Principles
//!
//! - One connection per operation, released on drop - no pool, no shared handle
//! - Rows are addressed by column name
//! - Update/delete decide existence from the affected-row count - no check-then-act

pub mod codec;
pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::Database;
pub use repos::*;
pub use schema::ensure_schema;

use std::path::Path;

use crate::models::RecordSchema;

/// Open the store at `path` and make sure its table exists.
pub async fn open_store(
    path: impl AsRef<Path>,
    schema: &'static RecordSchema,
) -> Result<RecordRepo, DbError> {
    let db = Database::open(path).await?;
    let mut conn = db.acquire().await?;
    ensure_schema(&mut conn, schema).await?;
    tracing::info!(
        resource = schema.collection,
        path = %db.path().display(),
        "store ready"
    );
    Ok(RecordRepo::new(db, schema))
}
