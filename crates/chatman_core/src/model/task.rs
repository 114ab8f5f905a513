//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by every command.
//! - Render the one-line display form used by `list`, `find` and add/remove
//!   confirmations.
//!
//! # Invariants
//! - `id` is stable and never nil.
//! - `description` is non-empty after trimming.
//! - For events, `to` is not earlier than `from`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier used as the storage key of a task.
///
/// Display order is positional; the id never leaks into user-facing output.
pub type TaskId = Uuid;

/// Render format for schedule timestamps, e.g. `Dec 02 2019, 18:00`.
pub const DISPLAY_DATE_TIME_FORMAT: &str = "%b %d %Y, %H:%M";

/// Scheduling shape of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain task without any date.
    Todo,
    /// Task that must be done before `by`.
    Deadline { by: NaiveDateTime },
    /// Task occupying the window `from..=to`.
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter tag shown in the display form.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// Task validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    EmptyDescription,
    InvalidEventWindow {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyDescription => write!(f, "task description must not be empty"),
            Self::InvalidEventWindow { from, to } => {
                write!(f, "event end ({to}) must not be earlier than start ({from})")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// One entry of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    #[serde(flatten)]
    pub kind: TaskKind,
    pub description: String,
    pub is_done: bool,
}

/// Unvalidated wire shape; converted through [`Task::validate`].
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    #[serde(flatten)]
    kind: TaskKind,
    description: String,
    is_done: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            id: value.id,
            kind: value.kind,
            description: value.description,
            is_done: value.is_done,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Task {
    /// Creates a validated task with a generated id.
    pub fn new(
        kind: TaskKind,
        description: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), kind, description)
    }

    /// Creates a todo task.
    pub fn todo(description: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::new(TaskKind::Todo, description)
    }

    /// Creates a deadline task due at `by`.
    pub fn deadline(
        description: impl Into<String>,
        by: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        Self::new(TaskKind::Deadline { by }, description)
    }

    /// Creates an event task spanning `from..=to`.
    pub fn event(
        description: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        Self::new(TaskKind::Event { from, to }, description)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by the repository when rebuilding rows.
    pub fn with_id(
        id: TaskId,
        kind: TaskKind,
        description: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            kind,
            description: description.into(),
            is_done: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the model invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        if let TaskKind::Event { from, to } = self.kind {
            if to < from {
                return Err(TaskValidationError::InvalidEventWindow { from, to });
            }
        }
        Ok(())
    }

    /// Text matched by `find`.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn mark_done(&mut self) {
        self.is_done = true;
    }

    pub fn mark_undone(&mut self) {
        self.is_done = false;
    }

    fn status_icon(&self) -> char {
        if self.is_done {
            'X'
        } else {
            ' '
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        )?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => {
                write!(f, " (by: {})", by.format(DISPLAY_DATE_TIME_FORMAT))
            }
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                from.format(DISPLAY_DATE_TIME_FORMAT),
                to.format(DISPLAY_DATE_TIME_FORMAT)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskValidationError};
    use chrono::NaiveDate;

    #[test]
    fn display_includes_kind_and_status() {
        let mut task = Task::todo("read book").unwrap();
        assert_eq!(task.to_string(), "[T][ ] read book");
        task.mark_done();
        assert_eq!(task.to_string(), "[T][X] read book");
    }

    #[test]
    fn deadline_display_formats_due_time() {
        let by = NaiveDate::from_ymd_opt(2019, 12, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let task = Task::deadline("return book", by).unwrap();
        assert_eq!(task.to_string(), "[D][ ] return book (by: Dec 02 2019, 18:00)");
    }

    #[test]
    fn blank_description_is_rejected() {
        let err = Task::todo("   ").unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyDescription);
    }
}
