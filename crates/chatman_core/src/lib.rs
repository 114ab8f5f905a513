//! Core logic for the ChatMan task-list assistant.
//! This crate owns the task model, command grammar and persistence.

pub mod command;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod ui;

pub use command::{execute_line, Command, CommandError, CommandName, CommandOutput, CommandResult};
pub use config::{ChatConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskKind, TaskValidationError};
pub use model::task_list::{TaskList, TaskListError};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use search::keyword::{find_matches, SearchHit};
pub use service::chat_service::{ChatSession, SessionError, SessionResult};
pub use ui::Ui;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
