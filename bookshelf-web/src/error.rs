//! Handler-boundary error type and its HTTP mapping.
//!
//! Nothing propagates past a handler: every failure is decoded here
//! into a status code and a JSON body, and the underlying cause is
//! logged server-side only.

use crate::service::ServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced book does not exist.
    #[error("book not found")]
    NotFound,

    /// Anything else that went wrong while handling the request.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: ServiceError,
    },
}

impl ApiError {
    /// Wraps a service failure under a per-route context string,
    /// keeping not-found as its own response.
    pub fn from_service(context: &'static str, source: ServiceError) -> Self {
        match source {
            ServiceError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal {
                context,
                source: other,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Book not found" })),
            )
                .into_response(),
            ApiError::Internal { context, source } => {
                error!("{context}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": context })),
                )
                    .into_response()
            }
        }
    }
}
