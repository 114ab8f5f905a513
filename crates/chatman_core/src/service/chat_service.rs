//! Chat session use-case service.
//!
//! # Responsibility
//! - Own the task list for one interactive session.
//! - Route each input line to a command and persist after mutations.
//!
//! # Invariants
//! - Failed commands never reach the repository.
//! - Read-only commands (`list`, `find`, `bye`) never write.
//! - A save failure keeps the in-memory mutation; the next successful save
//!   writes it out.

use crate::command::{Command, CommandError, CommandOutput};
use crate::model::task_list::TaskList;
use crate::repo::task_repo::{RepoError, TaskRepository};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Failure of one session step.
#[derive(Debug)]
pub enum SessionError {
    /// The line was rejected; nothing changed.
    Command(CommandError),
    /// The command ran but its result could not be persisted.
    Storage(RepoError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "failed to save your tasks: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Command(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<CommandError> for SessionError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

/// One interactive session bound to a repository.
pub struct ChatSession<R: TaskRepository> {
    repo: R,
    tasks: TaskList,
}

impl<R: TaskRepository> ChatSession<R> {
    /// Loads the persisted task list and starts a session.
    pub fn open(repo: R) -> SessionResult<Self> {
        let tasks = TaskList::from(repo.load_tasks()?);
        info!(
            "event=session_open module=service status=ok task_count={}",
            tasks.len()
        );
        Ok(Self { repo, tasks })
    }

    /// Starts a session over an explicit list without loading.
    pub fn with_tasks(repo: R, tasks: TaskList) -> Self {
        Self { repo, tasks }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Parses, executes and, when the list changed, persists one line.
    pub fn handle_line(&mut self, line: &str) -> SessionResult<CommandOutput> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                warn!(
                    "event=command_rejected module=service status=error error_code={}",
                    err.code()
                );
                return Err(err.into());
            }
        };
        let name = command.name();

        let output = match command.execute(&mut self.tasks) {
            Ok(output) => output,
            Err(err) => {
                warn!(
                    "event=command_failed module=service status=error command={} error_code={}",
                    name,
                    err.code()
                );
                return Err(err.into());
            }
        };

        debug!(
            "event=command_done module=service status=ok command={} mutated={} task_count={}",
            name,
            output.mutated,
            self.tasks.len()
        );

        if output.mutated {
            self.repo.save_tasks(self.tasks.as_slice())?;
        }
        Ok(output)
    }
}
