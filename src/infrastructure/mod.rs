//! Infrastructure module for external services.
//!
//! This module contains configuration loading, the repository trait and its
//! `PostgreSQL` and in-memory implementations.

pub mod config;
pub mod factory;
pub mod in_memory;
pub mod postgres;
pub mod repository;

pub use config::{AppConfig, ConfigurationError, PostgresPoolConfig, StorageMode};
pub use factory::{FactoryError, RepositoryFactory, SharedTodoRepository};
pub use in_memory::InMemoryTodoRepository;
pub use postgres::PostgresTodoRepository;
pub use repository::{RepositoryError, TodoRepository};
