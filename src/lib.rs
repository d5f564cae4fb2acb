//! # todo-api
//!
//! A CRUD HTTP API for todo items backed by `PostgreSQL`.
//!
//! ## Layout
//!
//! - [`domain`]: the todo record and its validated inputs
//! - [`infrastructure`]: configuration, repository trait and its
//!   `PostgreSQL` and in-memory implementations
//! - [`api`]: extractors, handlers, error responses and the router
//! - [`server`]: listener and graceful shutdown
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use todo_api::api::{AppState, create_router};
//! use todo_api::infrastructure::InMemoryTodoRepository;
//!
//! let router = create_router(AppState::new(Arc::new(InMemoryTodoRepository::new())));
//! ```

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod server;
