//! Record endpoints, mounted once per resource
//!
//! - `GET    /{collection}`          list, most recently updated first
//! - `POST   /{collection}`          create
//! - `POST   /{collection}/import`   bulk create
//! - `PUT    /{collection}/{id}`     full replace
//! - `DELETE /{collection}/{id}`     delete

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::db::repos::RecordRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{Record, RecordInput, RecordSchema, ValidationError};

/// Delete acknowledgement
#[derive(Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// GET /{collection}
async fn list_records(
    State(repo): State<Arc<RecordRepo>>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let records = repo.list().await?;
    Ok(Json(records))
}

/// POST /{collection}
async fn create_record(
    State(repo): State<Arc<RecordRepo>>,
    JsonBody(body): JsonBody,
) -> Result<Json<Record>, ApiError> {
    let input = RecordInput::parse(repo.schema(), &body)?;
    let record = repo.create(input).await?;
    Ok(Json(record))
}

/// PUT /{collection}/{id}
async fn update_record(
    State(repo): State<Arc<RecordRepo>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Record>, ApiError> {
    let input = RecordInput::parse(repo.schema(), &body)?;
    let record = repo.update(&id, input).await?;
    Ok(Json(record))
}

/// DELETE /{collection}/{id}
async fn delete_record(
    State(repo): State<Arc<RecordRepo>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    repo.delete(&id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}

/// POST /{collection}/import
///
/// Every entry is validated before anything is written.
async fn import_records(
    State(repo): State<Arc<RecordRepo>>,
    JsonBody(body): JsonBody,
) -> Result<Json<Vec<Record>>, ApiError> {
    let inputs = parse_import(repo.schema(), &body)?;
    let records = repo.import(inputs).await?;
    Ok(Json(records))
}

/// Parse `{"<collection>": [record, ...]}`.
fn parse_import(
    schema: &'static RecordSchema,
    body: &Value,
) -> Result<Vec<RecordInput>, ValidationError> {
    let entries = match body.get(schema.collection) {
        None | Some(Value::Null) => {
            return Err(ValidationError::Missing {
                field: schema.collection,
            })
        }
        Some(value) => value.as_array().ok_or(ValidationError::InvalidType {
            field: schema.collection,
            expected: "an array of records",
        })?,
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            RecordInput::parse(schema, entry).map_err(|e| ValidationError::Entry {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Routes for the resource served by `repo`.
pub fn router<S>(repo: Arc<RecordRepo>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let collection = repo.schema().collection;

    Router::new()
        .route(
            &format!("/{collection}"),
            get(list_records).post(create_record),
        )
        .route(&format!("/{collection}/import"), post(import_records))
        .route(
            &format!("/{collection}/{{id}}"),
            put(update_record).delete(delete_record),
        )
        .with_state(repo)
}
