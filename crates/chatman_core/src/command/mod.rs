//! Line command parsing and execution.
//!
//! # Responsibility
//! - Route a raw input line to one command variant by its leading keyword.
//! - Validate the whole line before any output is produced.
//! - Execute against an injected `TaskList` and return output lines.
//!
//! # Invariants
//! - The leading keyword is the text before the first space, matched exactly.
//! - A command that fails leaves the task list unchanged.

pub mod add;
pub mod datetime;
pub mod error;
pub mod find;
pub mod index;
pub mod session;

pub use add::{DeadlineCommand, EventCommand, TodoCommand};
pub use error::{CommandError, CommandName, CommandResult};
pub use find::FindCommand;
pub use index::{IndexAction, IndexCommand};
pub use session::{ByeCommand, ListCommand};

use crate::model::task_list::TaskList;

/// Lines produced by one successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    /// Whether the task list changed and must be persisted.
    pub mutated: bool,
    /// Whether the session should end after printing.
    pub exit: bool,
}

impl CommandOutput {
    pub fn read_only(lines: Vec<String>) -> Self {
        Self {
            lines,
            mutated: false,
            exit: false,
        }
    }

    pub fn mutation(lines: Vec<String>) -> Self {
        Self {
            lines,
            mutated: true,
            exit: false,
        }
    }
}

/// One parsed user instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Todo(TodoCommand),
    Deadline(DeadlineCommand),
    Event(EventCommand),
    List(ListCommand),
    Index(IndexCommand),
    Find(FindCommand),
    Bye(ByeCommand),
}

impl Command {
    /// Picks the variant for `line` and validates its arguments.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let keyword = leading_keyword(line);
        let Some(name) = CommandName::from_keyword(keyword) else {
            return Err(CommandError::UnknownCommand(keyword.to_string()));
        };

        let command = match name {
            CommandName::Todo => Self::Todo(TodoCommand::parse(line)?),
            CommandName::Deadline => Self::Deadline(DeadlineCommand::parse(line)?),
            CommandName::Event => Self::Event(EventCommand::parse(line)?),
            CommandName::List => Self::List(ListCommand::parse(line)?),
            CommandName::Mark => Self::Index(IndexCommand::parse(IndexAction::Mark, line)?),
            CommandName::Unmark => Self::Index(IndexCommand::parse(IndexAction::Unmark, line)?),
            CommandName::Delete => Self::Index(IndexCommand::parse(IndexAction::Delete, line)?),
            CommandName::Find => Self::Find(FindCommand::parse(line)?),
            CommandName::Bye => Self::Bye(ByeCommand::parse(line)?),
        };
        Ok(command)
    }

    pub fn name(&self) -> CommandName {
        match self {
            Self::Todo(_) => CommandName::Todo,
            Self::Deadline(_) => CommandName::Deadline,
            Self::Event(_) => CommandName::Event,
            Self::List(_) => CommandName::List,
            Self::Index(command) => command.action().command_name(),
            Self::Find(_) => CommandName::Find,
            Self::Bye(_) => CommandName::Bye,
        }
    }

    /// Runs the command against `tasks`.
    pub fn execute(self, tasks: &mut TaskList) -> CommandResult<CommandOutput> {
        match self {
            Self::Todo(command) => Ok(command.execute(tasks)),
            Self::Deadline(command) => Ok(command.execute(tasks)),
            Self::Event(command) => Ok(command.execute(tasks)),
            Self::List(command) => command.execute(tasks),
            Self::Index(command) => command.execute(tasks),
            Self::Find(command) => Ok(command.execute(tasks)),
            Self::Bye(command) => Ok(command.execute()),
        }
    }
}

/// Parses and executes `line` in one step.
pub fn execute_line(line: &str, tasks: &mut TaskList) -> CommandResult<CommandOutput> {
    Command::parse(line)?.execute(tasks)
}

fn leading_keyword(line: &str) -> &str {
    line.split(' ').next().unwrap_or_default()
}

/// Splits `line` on the first space into the command word and the remainder.
///
/// A line without any space yields no remainder; `"find "` yields an empty
/// remainder.
pub(crate) fn split_once_space(line: &str) -> (&str, Option<&str>) {
    match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    }
}

/// Validation shared by commands taking one free-text argument.
///
/// Returns the trimmed argument.
///
/// # Errors
/// - `ArgumentCount` with the full line when no remainder exists.
/// - `ArgumentCount` with the offending segment when either raw segment
///   contains `/`.
/// - `Format` with the full line when the trimmed remainder is empty.
pub(crate) fn single_argument(command: CommandName, line: &str) -> CommandResult<&str> {
    let (word, rest) = split_once_space(line);
    let Some(rest) = rest else {
        return Err(CommandError::argument_count(command, line));
    };

    for segment in [word, rest] {
        if segment.contains('/') {
            return Err(CommandError::argument_count(command, segment));
        }
    }

    let argument = rest.trim();
    if argument.is_empty() {
        return Err(CommandError::format(command, line));
    }
    Ok(argument)
}

/// Validation for commands that take no argument.
///
/// Trailing whitespace is tolerated; any other remainder is rejected.
pub(crate) fn no_argument(command: CommandName, line: &str) -> CommandResult<()> {
    match split_once_space(line) {
        (_, Some(rest)) if !rest.trim().is_empty() => {
            Err(CommandError::argument_count(command, line))
        }
        _ => Ok(()),
    }
}

pub(crate) fn task_count_line(len: usize) -> String {
    let noun = if len == 1 { "task" } else { "tasks" };
    format!("Now you have {len} {noun} in the list.")
}
