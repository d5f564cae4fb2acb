//! HTTP layer: request decoding, handlers, error responses and routing.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use dto::{CreateTodoRequest, TodoListResponse, TodoResponse, UpdateTodoRequest};
pub use error::{ApiError, ApiErrorResponse, FieldError, ValidationError};
pub use extract::{JsonBody, TodoIdPath};
pub use handlers::{
    AppState, HealthResponse, create_todo, delete_todo, get_todo, health_check, list_todos,
    update_todo,
};
pub use routes::create_router;
