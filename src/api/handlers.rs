//! HTTP handlers for the Todo API.
//!
//! Each handler decodes its input, calls the repository once, and writes
//! exactly one response. Repository failures are mapped to
//! [`ApiErrorResponse`] here and never escape the handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;

use super::dto::{CreateTodoRequest, TodoListResponse, TodoResponse, UpdateTodoRequest};
use super::error::ApiErrorResponse;
use super::extract::{JsonBody, TodoIdPath};
use crate::infrastructure::SharedTodoRepository;

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
///
/// Built once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository selected by the factory.
    pub todo_repository: SharedTodoRepository,
}

impl AppState {
    #[must_use]
    pub fn new(todo_repository: SharedTodoRepository) -> Self {
        Self { todo_repository }
    }
}

// =============================================================================
// POST /todos Handler
// =============================================================================

/// Creates a new todo.
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Buy milk",
///   "desc": "Optional description",
///   "due_date": "2024-07-01T00:00:00Z",
///   "is_completed": false
/// }
/// ```
///
/// # Response
///
/// - **201 Created**: Todo created successfully
/// - **400 Bad Request**: Undecodable body or invalid title
/// - **500 Internal Server Error**: Database error
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] for the failures listed above.
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiErrorResponse> {
    let new_todo = request.into_new_todo(Utc::now())?;

    let todo = state
        .todo_repository
        .create(new_todo)
        .await
        .map_err(|_| ApiErrorResponse::internal_error("Unable to create todo"))?;

    tracing::info!(id = %todo.id, "Created todo");

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

// =============================================================================
// GET /todos Handler
// =============================================================================

/// Lists every todo.
///
/// # Errors
///
/// Returns 500 if the repository fails.
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<TodoListResponse>, ApiErrorResponse> {
    let todos = state
        .todo_repository
        .list_all()
        .await
        .map_err(|_| ApiErrorResponse::internal_error("Unable to fetch todos"))?;

    Ok(Json(TodoListResponse::from(todos)))
}

// =============================================================================
// GET /todos/{id} Handler
// =============================================================================

/// Fetches a single todo.
///
/// # Errors
///
/// Returns 404 if no todo has the identifier and 500 on database errors.
pub async fn get_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Json<TodoResponse>, ApiErrorResponse> {
    let todo = state
        .todo_repository
        .find_by_id(id)
        .await
        .map_err(|error| ApiErrorResponse::from_repository("Unable to fetch todo", &error))?;

    Ok(Json(TodoResponse::from(todo)))
}

// =============================================================================
// PUT /todos/{id} Handler
// =============================================================================

/// Replaces the mutable fields of a todo.
///
/// `id` and `created_at` never change. Omitted optional fields are cleared.
///
/// # Errors
///
/// Returns 400 for an undecodable body or invalid title, 404 if no todo
/// has the identifier, and 500 on database errors.
pub async fn update_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
    JsonBody(request): JsonBody<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiErrorResponse> {
    let changes = request.into_changes()?;

    let todo = state
        .todo_repository
        .update(id, changes)
        .await
        .map_err(|error| ApiErrorResponse::from_repository("Unable to update todo", &error))?;

    tracing::info!(id = %todo.id, "Updated todo");

    Ok(Json(TodoResponse::from(todo)))
}

// =============================================================================
// DELETE /todos/{id} Handler
// =============================================================================

/// Deletes a todo. Deleting an identifier with no todo still succeeds.
///
/// # Errors
///
/// Returns 500 on database errors.
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<StatusCode, ApiErrorResponse> {
    state
        .todo_repository
        .delete(id)
        .await
        .map_err(|error| ApiErrorResponse::from_repository("Unable to delete todo", &error))?;

    tracing::info!(%id, "Deleted todo");

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// GET /health Handler
// =============================================================================

/// Health check response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check endpoint.
///
/// Pings the repository so the result reflects database reachability.
///
/// # Response
///
/// - **200 OK**: `{"status": "healthy", "version": "0.1.0"}`
/// - **503 Service Unavailable**: `{"status": "unhealthy", ...}`
pub async fn health_check(State(state): State<AppState>) -> Response {
    let version = env!("CARGO_PKG_VERSION");

    match state.todo_repository.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy",
            version,
        })
        .into_response(),
        Err(error) => {
            tracing::warn!(%error, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    version,
                }),
            )
                .into_response()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
