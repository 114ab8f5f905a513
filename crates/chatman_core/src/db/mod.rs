//! Task store bootstrap: connection setup and schema migrations.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Tasks are not read or written before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to reach a usable task store.
#[derive(Debug)]
pub enum DbError {
    /// The directory holding the database file could not be created.
    DataDir { path: PathBuf, source: io::Error },
    /// The task store was written by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    Sqlite(rusqlite::Error),
}

impl DbError {
    /// Stable code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataDir { .. } => "db_dir_failed",
            Self::SchemaTooNew { .. } => "db_schema_too_new",
            Self::Sqlite(_) => "db_sqlite_failed",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataDir { path, source } => write!(
                f,
                "cannot create task store directory `{}`: {source}",
                path.display()
            ),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "task store uses schema version {found}, this build supports up to {supported}"
            ),
            Self::Sqlite(err) => write!(f, "task store error: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DataDir { source, .. } => Some(source),
            Self::SchemaTooNew { .. } => None,
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
