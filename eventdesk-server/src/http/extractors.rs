//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON request body. Malformed JSON is reported as a validation error;
/// other rejections keep axum's status code.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    tracing::debug!(%rejection, "rejected request body");
    match rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "body",
                reason: "expected a JSON request body",
            })
        }
        other => ApiError::Rejected {
            status: other.status(),
            message: other.body_text(),
        },
    }
}
