//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load the persisted task list in display order.
//! - Replace the persisted task list after a mutation.
//!
//! # Invariants
//! - Rows are written with contiguous positions `0..len`.
//! - Write paths call `Task::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::task::{Task, TaskKind, TaskValidationError};
use chrono::NaiveDateTime;
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use uuid::Uuid;

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    kind,
    description,
    is_done,
    due_at,
    starts_at,
    ends_at
FROM tasks
ORDER BY position ASC;";

const STORED_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-list persistence used by the chat session.
pub trait TaskRepository {
    fn load_tasks(&self) -> RepoResult<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(TASK_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        info!(
            "event=tasks_load module=repo status=ok count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        let started_at = Instant::now();
        for task in tasks {
            task.validate()?;
        }

        let result = replace_all(self.conn, tasks);
        match &result {
            Ok(()) => info!(
                "event=tasks_save module=repo status=ok count={} duration_ms={}",
                tasks.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=tasks_save module=repo status=error count={} duration_ms={} error={}",
                tasks.len(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

fn replace_all(conn: &Connection, tasks: &[Task]) -> RepoResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM tasks;", [])?;
    {
        let mut insert = tx.prepare(
            "INSERT INTO tasks (
                uuid,
                position,
                kind,
                description,
                is_done,
                due_at,
                starts_at,
                ends_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
        )?;

        for (position, task) in tasks.iter().enumerate() {
            let (due_at, starts_at, ends_at) = match task.kind {
                TaskKind::Todo => (None, None, None),
                TaskKind::Deadline { by } => (Some(format_stored(by)), None, None),
                TaskKind::Event { from, to } => {
                    (None, Some(format_stored(from)), Some(format_stored(to)))
                }
            };
            let position = i64::try_from(position).map_err(|_| {
                RepoError::InvalidData(format!("task position {position} exceeds storage range"))
            })?;
            insert.execute(params![
                task.id.to_string(),
                position,
                task_kind_to_db(&task.kind),
                task.description.as_str(),
                bool_to_int(task.is_done),
                due_at,
                starts_at,
                ends_at,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in tasks.uuid"))
    })?;

    let kind_text: String = row.get("kind")?;
    let kind = match kind_text.as_str() {
        "todo" => TaskKind::Todo,
        "deadline" => TaskKind::Deadline {
            by: required_date_time(row, "due_at")?,
        },
        "event" => TaskKind::Event {
            from: required_date_time(row, "starts_at")?,
            to: required_date_time(row, "ends_at")?,
        },
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid task kind `{other}` in tasks.kind"
            )));
        }
    };

    let is_done = match row.get::<_, i64>("is_done")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_done value `{other}` in tasks.is_done"
            )));
        }
    };

    let description: String = row.get("description")?;
    let mut task = Task::with_id(id, kind, description)?;
    task.is_done = is_done;
    Ok(task)
}

fn required_date_time(row: &Row<'_>, column: &str) -> RepoResult<NaiveDateTime> {
    let Some(text) = row.get::<_, Option<String>>(column)? else {
        return Err(RepoError::InvalidData(format!(
            "missing value in tasks.{column}"
        )));
    };
    NaiveDateTime::parse_from_str(&text, STORED_DATE_TIME_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid date-time `{text}` in tasks.{column}"))
    })
}

fn format_stored(value: NaiveDateTime) -> String {
    value.format(STORED_DATE_TIME_FORMAT).to_string()
}

fn task_kind_to_db(kind: &TaskKind) -> &'static str {
    match kind {
        TaskKind::Todo => "todo",
        TaskKind::Deadline { .. } => "deadline",
        TaskKind::Event { .. } => "event",
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
