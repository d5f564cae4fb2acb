//! In-memory repository implementation.
//!
//! Stores todos in a `BTreeMap` behind a `tokio::sync::RwLock`. Used by the
//! handler tests and by `STORAGE_MODE=in_memory` for local development.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use super::repository::{RepositoryError, TodoRepository};
use crate::domain::{NewTodo, Todo, TodoChanges, TodoId};

#[derive(Debug, Default)]
struct Store {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i64,
}

/// In-memory implementation of [`TodoRepository`].
///
/// Identifiers start at 1 and are never reused, matching a `BIGSERIAL`
/// column. Clones share the same storage.
///
/// # Example
///
/// ```ignore
/// let repository = InMemoryTodoRepository::new();
/// let todo = repository.create(new_todo).await?;
/// assert_eq!(todo.id, TodoId::new(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTodoRepository {
    /// Creates a new empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn create(&self, todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let mut store = self.store.write().await;
            store.last_id += 1;
            let id = TodoId::new(store.last_id);
            let created = Todo::from_new(id, todo);
            store.todos.insert(id, created.clone());
            Ok(created)
        })
    }

    fn list_all(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>> {
        Box::pin(async move {
            let store = self.store.read().await;
            Ok(store.todos.values().cloned().collect())
        })
    }

    fn find_by_id(&self, id: TodoId) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let store = self.store.read().await;
            store
                .todos
                .get(&id)
                .cloned()
                .ok_or(RepositoryError::NotFound(id))
        })
    }

    fn update(
        &self,
        id: TodoId,
        changes: TodoChanges,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let mut store = self.store.write().await;
            let existing = store
                .todos
                .remove(&id)
                .ok_or(RepositoryError::NotFound(id))?;
            let updated = existing.with_changes(changes);
            store.todos.insert(id, updated.clone());
            Ok(updated)
        })
    }

    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async move {
            let removed = self.store.write().await.todos.remove(&id);
            if removed.is_none() {
                tracing::debug!(%id, "delete matched no rows");
            }
            Ok(())
        })
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async { Ok(()) })
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}

// =============================================================================
// Tests
// =============================================================================
