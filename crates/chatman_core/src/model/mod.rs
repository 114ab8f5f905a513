//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and the ordered in-memory task list.
//!
//! # Invariants
//! - Tasks are owned exclusively by a `TaskList` at their index position.
//! - List indices stay contiguous after removal.

pub mod task;
pub mod task_list;
