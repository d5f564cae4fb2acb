//! `PostgreSQL` repository implementation.
//!
//! This module provides the `PostgreSQL`-backed [`TodoRepository`] using
//! `sqlx` for database access. Every statement binds its inputs as
//! parameters; nothing supplied by a client is spliced into SQL text.
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE todos (
//!     id           BIGSERIAL PRIMARY KEY,
//!     title        TEXT        NOT NULL,
//!     "desc"       TEXT,
//!     created_at   TIMESTAMPTZ NOT NULL,
//!     due_date     TIMESTAMPTZ,
//!     is_completed BOOLEAN     NOT NULL DEFAULT FALSE
//! );
//! ```
//!
//! `desc` is a reserved word in SQL, so the column is always quoted.

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::config::PostgresPoolConfig;
use super::repository::{RepositoryError, TodoRepository};
use crate::domain::{NewTodo, Todo, TodoChanges, TodoId};

// =============================================================================
// SQL Statements
// =============================================================================

const INSERT_TODO: &str = r#"INSERT INTO todos (title, "desc", created_at, due_date, is_completed)
VALUES ($1, $2, $3, $4, $5)
RETURNING id, title, "desc", created_at, due_date, is_completed"#;

const SELECT_ALL_TODOS: &str = r#"SELECT id, title, "desc", created_at, due_date, is_completed
FROM todos
ORDER BY id"#;

const SELECT_TODO_BY_ID: &str = r#"SELECT id, title, "desc", created_at, due_date, is_completed
FROM todos
WHERE id = $1"#;

const UPDATE_TODO: &str = r#"UPDATE todos
SET title = $1, "desc" = $2, due_date = $3, is_completed = $4
WHERE id = $5
RETURNING id, title, "desc", created_at, due_date, is_completed"#;

const DELETE_TODO: &str = "DELETE FROM todos WHERE id = $1";

const PING: &str = "SELECT 1";

// =============================================================================
// Row Mapping
// =============================================================================

/// A row of the `todos` table as returned by `sqlx`.
#[derive(Debug, Clone, sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    desc: Option<String>,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
    is_completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: TodoId::new(row.id),
            title: row.title,
            desc: row.desc,
            created_at: row.created_at,
            due_date: row.due_date,
            is_completed: row.is_completed,
        }
    }
}

/// Logs a failed statement and wraps it as a [`RepositoryError::DatabaseError`].
fn database_error(context: &str, error: &sqlx::Error) -> RepositoryError {
    tracing::error!(%error, "{context}");
    RepositoryError::DatabaseError(format!("{context}: {error}"))
}

// =============================================================================
// PostgreSQL Todo Repository
// =============================================================================

/// `PostgreSQL` implementation of [`TodoRepository`].
///
/// Cloning is cheap: clones share the same connection pool.
///
/// # Example
///
/// ```ignore
/// let config = PostgresPoolConfig::with_url("postgres://localhost/todos");
/// let repository = PostgresTodoRepository::connect(&config).await?;
///
/// let todo = repository.create(new_todo).await?;
/// let found = repository.find_by_id(todo.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// Creates a repository from an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool and verifies the database answers.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DatabaseError`] if the pool cannot be
    /// created or the database does not respond to a ping.
    pub async fn connect(config: &PostgresPoolConfig) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.url)
            .await
            .map_err(|error| database_error("unable to connect to the database", &error))?;

        let repository = Self::new(pool);
        repository.ping().await?;
        Ok(repository)
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl TodoRepository for PostgresTodoRepository {
    fn create(&self, todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let row: TodoRow = sqlx::query_as(INSERT_TODO)
                .bind(todo.title)
                .bind(todo.desc)
                .bind(todo.created_at)
                .bind(todo.due_date)
                .bind(todo.is_completed)
                .fetch_one(&self.pool)
                .await
                .map_err(|error| {
                    database_error("unable to insert todo into the database", &error)
                })?;

            Ok(Todo::from(row))
        })
    }

    fn list_all(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>> {
        Box::pin(async move {
            let rows: Vec<TodoRow> = sqlx::query_as(SELECT_ALL_TODOS)
                .fetch_all(&self.pool)
                .await
                .map_err(|error| database_error("unable to fetch todos", &error))?;

            Ok(rows.into_iter().map(Todo::from).collect())
        })
    }

    fn find_by_id(&self, id: TodoId) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let row: Option<TodoRow> = sqlx::query_as(SELECT_TODO_BY_ID)
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(|error| database_error("unable to scan todo", &error))?;

            row.map(Todo::from).ok_or(RepositoryError::NotFound(id))
        })
    }

    fn update(
        &self,
        id: TodoId,
        changes: TodoChanges,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        Box::pin(async move {
            let row: Option<TodoRow> = sqlx::query_as(UPDATE_TODO)
                .bind(changes.title)
                .bind(changes.desc)
                .bind(changes.due_date)
                .bind(changes.is_completed)
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(|error| {
                    database_error(&format!("unable to update todo with id {id}"), &error)
                })?;

            row.map(Todo::from).ok_or(RepositoryError::NotFound(id))
        })
    }

    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async move {
            let result = sqlx::query(DELETE_TODO)
                .bind(id.value())
                .execute(&self.pool)
                .await
                .map_err(|error| {
                    database_error(&format!("unable to delete todo with id {id}"), &error)
                })?;

            if result.rows_affected() == 0 {
                tracing::debug!(%id, "delete matched no rows");
            }

            Ok(())
        })
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async move {
            sqlx::query(PING)
                .execute(&self.pool)
                .await
                .map_err(|error| database_error("unable to ping the database", &error))?;
            Ok(())
        })
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.pool.close().await;
            tracing::info!("Database connection pool closed");
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
