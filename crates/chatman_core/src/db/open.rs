//! Connection bootstrap for the task database.
//!
//! # Invariants
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) the task database file and applies pending migrations.
///
/// # Side effects
/// - Creates the parent directory when missing.
/// - Emits `db_open` log events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if let Err(source) = std::fs::create_dir_all(parent) {
            let err = DbError::DataDir {
                path: parent.to_path_buf(),
                source,
            };
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            return Err(err);
        }
    }

    let conn = Connection::open(path);
    finish_open(conn, "file", started_at)
}

/// Opens an in-memory task database, used by tests and throwaway sessions.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");
    finish_open(Connection::open_in_memory(), "memory", started_at)
}

fn finish_open(
    conn: rusqlite::Result<Connection>,
    mode: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    let mut conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code={} error={}",
                mode,
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}
