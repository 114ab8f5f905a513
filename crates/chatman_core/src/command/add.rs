//! Task-creating commands: `todo`, `deadline` and `event`.
//!
//! The task is built and validated during parsing, so `execute` cannot fail.

use crate::command::datetime::parse_date_time;
use crate::command::error::{CommandError, CommandName, CommandResult};
use crate::command::{single_argument, split_once_space, task_count_line, CommandOutput};
use crate::model::task::Task;
use crate::model::task_list::TaskList;
use crate::ui::Ui;
use once_cell::sync::Lazy;
use regex::Regex;

static DEADLINE_ARGS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<description>[^/]*?)\s*/by\s+(?P<by>[^/]+)$").expect("valid deadline regex")
});
static EVENT_ARGS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<description>[^/]*?)\s*/from\s+(?P<from>[^/]+?)\s*/to\s+(?P<to>[^/]+)$")
        .expect("valid event regex")
});

/// `todo <description>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoCommand {
    task: Task,
}

impl TodoCommand {
    pub fn parse(line: &str) -> CommandResult<Self> {
        let description = single_argument(CommandName::Todo, line)?;
        let task = Task::todo(description)
            .map_err(|_| CommandError::format(CommandName::Todo, line))?;
        Ok(Self { task })
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn execute(self, tasks: &mut TaskList) -> CommandOutput {
        added(tasks, self.task)
    }
}

/// `deadline <description> /by <when>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineCommand {
    task: Task,
}

impl DeadlineCommand {
    pub fn parse(line: &str) -> CommandResult<Self> {
        let command = CommandName::Deadline;
        let rest = scheduled_remainder(command, line)?;
        let captures = DEADLINE_ARGS_RE
            .captures(rest)
            .ok_or_else(|| CommandError::argument_count(command, rest))?;

        let description = captures["description"].trim();
        if description.is_empty() {
            return Err(CommandError::format(command, line));
        }
        let by = parse_date_time(&captures["by"])
            .ok_or_else(|| CommandError::format(command, captures["by"].trim()))?;

        let task = Task::deadline(description, by)
            .map_err(|_| CommandError::format(command, line))?;
        Ok(Self { task })
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn execute(self, tasks: &mut TaskList) -> CommandOutput {
        added(tasks, self.task)
    }
}

/// `event <description> /from <when> /to <when>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCommand {
    task: Task,
}

impl EventCommand {
    pub fn parse(line: &str) -> CommandResult<Self> {
        let command = CommandName::Event;
        let rest = scheduled_remainder(command, line)?;
        let captures = EVENT_ARGS_RE
            .captures(rest)
            .ok_or_else(|| CommandError::argument_count(command, rest))?;

        let description = captures["description"].trim();
        if description.is_empty() {
            return Err(CommandError::format(command, line));
        }
        let from = parse_date_time(&captures["from"])
            .ok_or_else(|| CommandError::format(command, captures["from"].trim()))?;
        let to = parse_date_time(&captures["to"])
            .ok_or_else(|| CommandError::format(command, captures["to"].trim()))?;

        // Reversed windows surface here as a validation failure.
        let task = Task::event(description, from, to)
            .map_err(|_| CommandError::format(command, line))?;
        Ok(Self { task })
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn execute(self, tasks: &mut TaskList) -> CommandOutput {
        added(tasks, self.task)
    }
}

/// Remainder of a command whose options are introduced by `/`.
fn scheduled_remainder(command: CommandName, line: &str) -> CommandResult<&str> {
    let (word, rest) = split_once_space(line);
    let Some(rest) = rest else {
        return Err(CommandError::argument_count(command, line));
    };
    if word.contains('/') {
        return Err(CommandError::argument_count(command, word));
    }
    if rest.trim().is_empty() {
        return Err(CommandError::format(command, line));
    }
    Ok(rest)
}

fn added(tasks: &mut TaskList, task: Task) -> CommandOutput {
    let index = tasks.add(task);
    let rendered = tasks
        .get(index)
        .map(ToString::to_string)
        .unwrap_or_default();
    CommandOutput::mutation(vec![
        Ui::chatbot_separator().to_string(),
        "Got it. I've added this task:".to_string(),
        format!("  {rendered}"),
        task_count_line(tasks.len()),
    ])
}
