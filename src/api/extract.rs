//! Request extractors.
//!
//! - [`TodoIdPath`]: the `{id}` path segment of `/todos/{id}`. Only ASCII
//!   digits are routed; anything else answers 404 without touching the
//!   repository.
//! - [`JsonBody`]: a JSON request body. Every decoding failure answers
//!   400 with the same message, and no `Content-Type` header is required.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::ApiErrorResponse;
use crate::domain::{TodoId, TodoIdError};

// =============================================================================
// TodoIdPath
// =============================================================================

/// Todo identifier taken from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND.into_response())?;

        raw.parse::<TodoId>().map(Self).map_err(id_rejection)
    }
}

/// Maps an identifier parse failure to its response.
///
/// A segment with non-digit characters does not match the route at all, so
/// it gets a bare 404 like any unknown path.
fn id_rejection(error: TodoIdError) -> Response {
    match error {
        TodoIdError::NotNumeric => StatusCode::NOT_FOUND.into_response(),
        TodoIdError::Empty => ApiErrorResponse::bad_request("ID is required").into_response(),
        TodoIdError::OutOfRange => {
            ApiErrorResponse::bad_request("Invalid ID format").into_response()
        }
    }
}

// =============================================================================
// JsonBody
// =============================================================================

pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";

/// JSON request body decoded with `serde_json`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state).await.map_err(|error| {
            tracing::debug!(%error, "Failed to read request body");
            ApiErrorResponse::bad_request(INVALID_PAYLOAD_MESSAGE)
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|error| {
            tracing::debug!(%error, "Failed to decode request body");
            ApiErrorResponse::bad_request(INVALID_PAYLOAD_MESSAGE)
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
