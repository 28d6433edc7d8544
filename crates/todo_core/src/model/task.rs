//! Task domain model.
//!
//! # Responsibility
//! - Define the single record stored in the todo list.
//! - Normalize user text at construction time.
//!
//! # Invariants
//! - `id` is stable for the task lifetime and never reused within a list.
//! - `text` produced by `Task::new` is trimmed and non-empty.
//! - Tasks are immutable after creation; removal is a hard delete.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque task identifier.
///
/// Serialized as a bare JSON string to match the persisted list format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Validation failures for task construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Identifier is an empty string.
    EmptyId,
    /// Text is empty after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id cannot be empty"),
            Self::EmptyText => write!(f, "task text cannot be empty after trimming"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
///
/// Deserialization is intentionally structural only: persisted lists are
/// loaded as-is and never re-validated entry by entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

impl Task {
    /// Creates a task with trimmed text.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty.
    /// - `EmptyText` when `text` is empty or whitespace only.
    pub fn new(id: TaskId, text: &str) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: text.trim().to_string(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks id and text invariants on an existing record.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.as_str().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskId, TaskValidationError};

    #[test]
    fn new_trims_text() {
        let task = Task::new(TaskId::from("7"), "  Buy milk \n").unwrap();
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.id.as_str(), "7");
    }

    #[test]
    fn new_rejects_blank_text_and_empty_id() {
        assert_eq!(
            Task::new(TaskId::from("1"), " \t ").unwrap_err(),
            TaskValidationError::EmptyText
        );
        assert_eq!(
            Task::new(TaskId::from(""), "x").unwrap_err(),
            TaskValidationError::EmptyId
        );
    }
}
