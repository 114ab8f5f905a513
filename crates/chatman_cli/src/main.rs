//! Interactive read loop for ChatMan.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the task database.
//! - Feed stdin lines to a chat session and print responses.
//!
//! Command errors are reported and the loop continues; only startup failures
//! end the process with a non-zero status.

use chatman_core::db::open_db;
use chatman_core::{init_logging, ChatConfig, ChatSession, SqliteTaskRepository, Ui};
use log::info;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("chatman: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = ChatConfig::from_env().map_err(|err| err.to_string())?;
    init_logging(config.log_level, &config.log_dir)?;

    let conn = open_db(&config.db_path).map_err(|err| {
        format!(
            "failed to open task database `{}`: {err}",
            config.db_path.display()
        )
    })?;
    let mut session = ChatSession::open(SqliteTaskRepository::new(&conn))
        .map_err(|err| format!("failed to load tasks: {err}"))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    print_lines(&mut stdout, &Ui::greeting())?;

    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("failed to read input: {err}"))?;
        match session.handle_line(&line) {
            Ok(output) => {
                print_lines(&mut stdout, &output.lines)?;
                if output.exit {
                    break;
                }
            }
            Err(err) => print_lines(&mut stdout, &Ui::error_report(&err.to_string()))?,
        }
    }

    info!("event=session_end module=cli status=ok");
    Ok(())
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> Result<(), String> {
    for line in lines {
        writeln!(out, "{line}").map_err(|err| format!("failed to write output: {err}"))?;
    }
    out.flush()
        .map_err(|err| format!("failed to write output: {err}"))
}
