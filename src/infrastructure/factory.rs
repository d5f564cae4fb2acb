//! Repository factory for runtime backend selection.
//!
//! Chooses between the `PostgreSQL` and in-memory repositories based on
//! [`AppConfig::storage_mode`].
//!
//! # Example
//!
//! ```ignore
//! let config = AppConfig::from_env()?;
//! let repository = RepositoryFactory::new(config).create().await?;
//! let todos = repository.list_all().await?;
//! ```

use std::sync::Arc;

use thiserror::Error;

use super::config::{AppConfig, ConfigurationError, StorageMode};
use super::{InMemoryTodoRepository, PostgresTodoRepository, RepositoryError, TodoRepository};

/// Shared handle to whichever repository was selected.
pub type SharedTodoRepository = Arc<dyn TodoRepository + Send + Sync>;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur during factory initialization.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] RepositoryError),
}

// =============================================================================
// Repository Factory
// =============================================================================

/// Factory for creating the repository described by an [`AppConfig`].
#[derive(Debug, Clone)]
pub struct RepositoryFactory {
    config: AppConfig,
}

impl RepositoryFactory {
    /// Creates a new repository factory with the given configuration.
    #[must_use]
    pub const fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Creates the repository, connecting to `PostgreSQL` when required.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] if the `PostgreSQL` settings are missing or
    /// the database cannot be reached.
    pub async fn create(&self) -> Result<SharedTodoRepository, FactoryError> {
        match self.config.storage_mode {
            StorageMode::InMemory => {
                tracing::warn!("Using in-memory storage; data will not survive a restart");
                Ok(Arc::new(InMemoryTodoRepository::new()))
            }
            StorageMode::Postgres => {
                let pool_config = self
                    .config
                    .database
                    .as_ref()
                    .ok_or(ConfigurationError::MissingDatabaseUrl)?;

                tracing::info!(
                    max_connections = pool_config.max_connections,
                    connect_timeout = ?pool_config.connect_timeout,
                    "Connecting to PostgreSQL"
                );

                let repository = PostgresTodoRepository::connect(pool_config).await?;
                tracing::info!("Database connection established");
                Ok(Arc::new(repository))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
