//! Commands addressing one task by its one-based number:
//! `mark <n>`, `unmark <n>` and `delete <n>`.

use crate::command::error::{CommandError, CommandName, CommandResult};
use crate::command::{single_argument, task_count_line, CommandOutput};
use crate::model::task_list::{TaskList, TaskListError};
use crate::ui::Ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAction {
    Mark,
    Unmark,
    Delete,
}

impl IndexAction {
    pub fn command_name(self) -> CommandName {
        match self {
            Self::Mark => CommandName::Mark,
            Self::Unmark => CommandName::Unmark,
            Self::Delete => CommandName::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCommand {
    action: IndexAction,
    /// One-based, as typed by the user; may be out of range or negative.
    number: i64,
}

impl IndexCommand {
    pub fn parse(action: IndexAction, line: &str) -> CommandResult<Self> {
        let command = action.command_name();
        let argument = single_argument(command, line)?;
        let number = argument
            .parse::<i64>()
            .map_err(|_| CommandError::format(command, line))?;
        Ok(Self { action, number })
    }

    pub fn action(&self) -> IndexAction {
        self.action
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn execute(&self, tasks: &mut TaskList) -> CommandResult<CommandOutput> {
        let command = self.action.command_name();
        if tasks.is_empty() {
            return Err(CommandError::EmptyList { command });
        }
        let invalid_index = || CommandError::InvalidIndex {
            command,
            index: self.number,
            len: tasks.len(),
        };
        let index = self
            .number
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .filter(|index| *index < tasks.len())
            .ok_or_else(invalid_index)?;

        let separator = Ui::chatbot_separator().to_string();
        let lines = match self.action {
            IndexAction::Mark => {
                let task = tasks.mark_done(index).map_err(|err| self.list_error(err))?;
                vec![
                    separator,
                    "Nice! I've marked this task as done:".to_string(),
                    format!("  {task}"),
                ]
            }
            IndexAction::Unmark => {
                let task = tasks.mark_undone(index).map_err(|err| self.list_error(err))?;
                vec![
                    separator,
                    "OK, I've marked this task as not done yet:".to_string(),
                    format!("  {task}"),
                ]
            }
            IndexAction::Delete => {
                let task = tasks.remove(index).map_err(|err| self.list_error(err))?;
                vec![
                    separator,
                    "Noted. I've removed this task:".to_string(),
                    format!("  {task}"),
                    task_count_line(tasks.len()),
                ]
            }
        };
        Ok(CommandOutput::mutation(lines))
    }

    fn list_error(&self, err: TaskListError) -> CommandError {
        match err {
            TaskListError::IndexOutOfRange { len, .. } => CommandError::InvalidIndex {
                command: self.action.command_name(),
                index: self.number,
                len,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IndexAction, IndexCommand};
    use crate::command::error::{CommandError, CommandName};
    use crate::model::task::Task;
    use crate::model::task_list::TaskList;

    #[test]
    fn non_numeric_argument_is_a_format_error() {
        let err = IndexCommand::parse(IndexAction::Mark, "mark two").unwrap_err();
        assert_eq!(err, CommandError::format(CommandName::Mark, "mark two"));
    }

    #[test]
    fn zero_is_an_invalid_index() {
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("a").unwrap());
        let command = IndexCommand::parse(IndexAction::Delete, "delete 0").unwrap();
        let err = command.execute(&mut tasks).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidIndex {
                command: CommandName::Delete,
                index: 0,
                len: 1,
            }
        );
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn negative_number_parses_and_is_out_of_range() {
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("a").unwrap());
        let command = IndexCommand::parse(IndexAction::Mark, "mark -3").unwrap();
        assert_eq!(command.number(), -3);
        let err = command.execute(&mut tasks).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidIndex {
                command: CommandName::Mark,
                index: -3,
                len: 1,
            }
        );
        assert!(!tasks.get(0).unwrap().is_done);
    }

    #[test]
    fn empty_list_is_reported_before_range() {
        let mut tasks = TaskList::new();
        let command = IndexCommand::parse(IndexAction::Unmark, "unmark 3").unwrap();
        let err = command.execute(&mut tasks).unwrap_err();
        assert_eq!(
            err,
            CommandError::EmptyList {
                command: CommandName::Unmark
            }
        );
    }
}
