//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs carry the client-editable fields only. The server assigns
//! `id` and `created_at`; a `created_at` sent by a client is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use crate::domain::{NewTodo, Todo, TodoChanges};

// =============================================================================
// Request DTOs
// =============================================================================

/// Request DTO for creating a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_completed: bool,
}

impl CreateTodoRequest {
    /// Validates the request and stamps it with the creation time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the title is blank.
    pub fn into_new_todo(self, created_at: DateTime<Utc>) -> Result<NewTodo, ValidationError> {
        validate_title(&self.title)?;
        Ok(NewTodo::new(
            self.title,
            self.desc,
            created_at,
            self.due_date,
            self.is_completed,
        ))
    }
}

/// Request DTO for updating a todo.
///
/// Every mutable field is replaced. Omitting `desc` or `due_date` clears it
/// and omitting `is_completed` sets it to `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_completed: bool,
}

impl UpdateTodoRequest {
    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the title is blank.
    pub fn into_changes(self) -> Result<TodoChanges, ValidationError> {
        validate_title(&self.title)?;
        Ok(TodoChanges::new(
            self.title,
            self.desc,
            self.due_date,
            self.is_completed,
        ))
    }
}

// =============================================================================
// Response DTOs
// =============================================================================

/// Response DTO for a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub desc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.value(),
            title: todo.title,
            desc: todo.desc,
            created_at: todo.created_at,
            due_date: todo.due_date,
            is_completed: todo.is_completed,
        }
    }
}

/// Response DTO for `GET /todos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub todos: Vec<TodoResponse>,
}

impl From<Vec<Todo>> for TodoListResponse {
    fn from(todos: Vec<Todo>) -> Self {
        Self {
            todos: todos.into_iter().map(TodoResponse::from).collect(),
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Validates a todo title.
///
/// A title must contain something other than whitespace. The title is
/// stored exactly as sent; surrounding whitespace is kept.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the `title` field.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::single("title", "Title is required"));
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
