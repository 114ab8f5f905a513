//! Ordered, index-addressed task collection.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Indices are contiguous `0..len()`; removal shifts later tasks down.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskListResult<T> = Result<T, TaskListError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "task index {index} out of range for list of {len}")
            }
        }
    }
}

impl Error for TaskListError {}

/// In-memory task list owned by one chat session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task at zero-based `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Appends a task and returns its zero-based index.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Removes and returns the task at `index`, shifting later tasks down.
    pub fn remove(&mut self, index: usize) -> TaskListResult<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    pub fn mark_done(&mut self, index: usize) -> TaskListResult<&Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.mark_done();
        Ok(task)
    }

    pub fn mark_undone(&mut self, index: usize) -> TaskListResult<&Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.mark_undone();
        Ok(task)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    fn check_index(&self, index: usize) -> TaskListResult<()> {
        if index >= self.tasks.len() {
            return Err(TaskListError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
