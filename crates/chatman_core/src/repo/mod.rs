//! Repository layer for task persistence.
//!
//! # Responsibility
//! - Define the storage contract consumed by the chat session.
//! - Isolate SQLite query details from command execution.
//!
//! # Invariants
//! - Repository writes enforce `Task::validate()` before persistence.

pub mod task_repo;
