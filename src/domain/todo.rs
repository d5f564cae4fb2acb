//! Todo domain model.
//!
//! This module contains the stored todo record together with the validated
//! inputs used to create and update it.

use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// TodoId
// =============================================================================

/// Unique identifier for a todo.
///
/// Identifiers are generated by the store on insert and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Errors produced when parsing a [`TodoId`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoIdError {
    /// The input was empty.
    #[error("ID is required")]
    Empty,

    /// The input contained something other than ASCII digits.
    #[error("ID must contain only digits")]
    NotNumeric,

    /// The input was all digits but does not fit in an `i64`.
    #[error("ID is out of range")]
    OutOfRange,
}

impl FromStr for TodoId {
    type Err = TodoIdError;

    /// Parses a decimal identifier.
    ///
    /// Signs, whitespace and other non-digit characters are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TodoIdError`] describing why the input is not an identifier.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(TodoIdError::Empty);
        }

        if !value.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(TodoIdError::NotNumeric);
        }

        value
            .parse::<i64>()
            .map(Self)
            .map_err(|_| TodoIdError::OutOfRange)
    }
}

// =============================================================================
// Todo
// =============================================================================

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub desc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
}

impl Todo {
    /// Builds the record a store produces when it inserts `new_todo` under `id`.
    #[must_use]
    pub fn from_new(id: TodoId, new_todo: NewTodo) -> Self {
        Self {
            id,
            title: new_todo.title,
            desc: new_todo.desc,
            created_at: new_todo.created_at,
            due_date: new_todo.due_date,
            is_completed: new_todo.is_completed,
        }
    }

    /// Returns a copy with every mutable field replaced by `changes`.
    ///
    /// `id` and `created_at` are carried over untouched.
    #[must_use]
    pub fn with_changes(self, changes: TodoChanges) -> Self {
        Self {
            title: changes.title,
            desc: changes.desc,
            due_date: changes.due_date,
            is_completed: changes.is_completed,
            ..self
        }
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Validated input for inserting a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub desc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
}

impl NewTodo {
    /// Creates a new todo input stamped with `created_at`.
    ///
    /// Timestamps are truncated to microseconds, the resolution of
    /// `TIMESTAMPTZ`, so every store hands back the value it was given.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        desc: Option<String>,
        created_at: DateTime<Utc>,
        due_date: Option<DateTime<Utc>>,
        is_completed: bool,
    ) -> Self {
        Self {
            title: title.into(),
            desc,
            created_at: created_at.trunc_subsecs(6),
            due_date: due_date.map(|due| due.trunc_subsecs(6)),
            is_completed,
        }
    }
}

/// Validated replacement values for the mutable fields of a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: String,
    pub desc: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
}

impl TodoChanges {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        desc: Option<String>,
        due_date: Option<DateTime<Utc>>,
        is_completed: bool,
    ) -> Self {
        Self {
            title: title.into(),
            desc,
            due_date: due_date.map(|due| due.trunc_subsecs(6)),
            is_completed,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
