//! Repository trait for todo persistence.
//!
//! Every method returns a boxed future so the trait stays object safe and
//! handlers can hold an `Arc<dyn TodoRepository + Send + Sync>` regardless of
//! which backend was selected at startup.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::domain::{NewTodo, Todo, TodoChanges, TodoId};

// =============================================================================
// Repository Error
// =============================================================================

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No todo exists with the given identifier.
    #[error("todo with id {0} not found")]
    NotFound(TodoId),

    /// The database rejected or failed to run a statement.
    #[error("{0}")]
    DatabaseError(String),
}

// =============================================================================
// Todo Repository
// =============================================================================

/// Persistence capability for todos.
///
/// # Contract
///
/// - `create` assigns the identifier and returns the full stored record.
/// - `list_all` returns every todo in insertion order.
/// - `find_by_id` and `update` fail with [`RepositoryError::NotFound`] when
///   the identifier has no row.
/// - `delete` succeeds whether or not a row was removed.
pub trait TodoRepository: Send + Sync {
    /// Inserts a todo and returns the stored record.
    fn create(&self, todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>>;

    /// Lists every stored todo.
    fn list_all(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>>;

    /// Finds a todo by its identifier.
    fn find_by_id(&self, id: TodoId) -> BoxFuture<'_, Result<Todo, RepositoryError>>;

    /// Replaces the mutable fields of a todo and returns the updated record.
    fn update(
        &self,
        id: TodoId,
        changes: TodoChanges,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>>;

    /// Removes a todo.
    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>>;

    /// Checks that the backing store is reachable.
    fn ping(&self) -> BoxFuture<'_, Result<(), RepositoryError>>;

    /// Releases the backing store. Called once at shutdown.
    fn close(&self) -> BoxFuture<'_, ()>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_repository_error_display() {
        let error = RepositoryError::NotFound(TodoId::new(12));
        assert_eq!(format!("{error}"), "todo with id 12 not found");

        let error = RepositoryError::DatabaseError("connection refused".to_string());
        assert_eq!(format!("{error}"), "connection refused");
    }
}
