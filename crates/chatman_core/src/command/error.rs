//! Command error vocabulary.
//!
//! # Invariants
//! - Every variant is recoverable; the read loop reports it and continues.
//! - Errors are raised before a command produces any output.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// Upper-case command names used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Todo,
    Deadline,
    Event,
    List,
    Mark,
    Unmark,
    Delete,
    Find,
    Bye,
}

impl CommandName {
    pub const ALL: [CommandName; 9] = [
        Self::Todo,
        Self::Deadline,
        Self::Event,
        Self::List,
        Self::Mark,
        Self::Unmark,
        Self::Delete,
        Self::Find,
        Self::Bye,
    ];

    /// Leading keyword typed by the user.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::List => "list",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Delete => "delete",
            Self::Find => "find",
            Self::Bye => "bye",
        }
    }

    /// Name shown in error messages, e.g. `FIND`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Deadline => "DEADLINE",
            Self::Event => "EVENT",
            Self::List => "LIST",
            Self::Mark => "MARK",
            Self::Unmark => "UNMARK",
            Self::Delete => "DELETE",
            Self::Find => "FIND",
            Self::Bye => "BYE",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.keyword() == keyword)
    }
}

impl Display for CommandName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed failure of one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Argument missing, or a segment carries an unsupported `/` option.
    ArgumentCount { command: CommandName, text: String },
    /// Argument present but malformed (blank, not a number, bad date).
    Format { command: CommandName, text: String },
    /// Command needs at least one task.
    EmptyList { command: CommandName },
    /// One-based task number outside `1..=len`.
    InvalidIndex {
        command: CommandName,
        /// Number as typed; negative values are kept.
        index: i64,
        len: usize,
    },
    /// Leading keyword matches no command.
    UnknownCommand(String),
}

impl CommandError {
    pub fn argument_count(command: CommandName, text: impl Into<String>) -> Self {
        Self::ArgumentCount {
            command,
            text: text.into(),
        }
    }

    pub fn format(command: CommandName, text: impl Into<String>) -> Self {
        Self::Format {
            command,
            text: text.into(),
        }
    }

    /// Stable code for log lines; never includes user text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArgumentCount { .. } => "argument_count",
            Self::Format { .. } => "format",
            Self::EmptyList { .. } => "empty_list",
            Self::InvalidIndex { .. } => "invalid_index",
            Self::UnknownCommand(_) => "unknown_command",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArgumentCount { command, text } => write!(
                f,
                "incorrect number of arguments for {command}: `{text}`"
            ),
            Self::Format { command, text } => {
                write!(f, "incorrect format for {command}: `{text}`")
            }
            Self::EmptyList { command } => {
                write!(f, "cannot {command}: your task list is empty")
            }
            Self::InvalidIndex {
                command,
                index,
                len,
            } => write!(
                f,
                "{command} expects a task number between 1 and {len}, got {index}"
            ),
            Self::UnknownCommand(keyword) => {
                write!(f, "I'm sorry, but I don't know what `{keyword}` means")
            }
        }
    }
}

impl Error for CommandError {}
