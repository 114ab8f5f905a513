//! Session-level commands without task arguments: `list` and `bye`.

use crate::command::error::{CommandError, CommandName, CommandResult};
use crate::command::{no_argument, CommandOutput};
use crate::model::task_list::TaskList;
use crate::ui::Ui;

/// `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub fn parse(line: &str) -> CommandResult<Self> {
        no_argument(CommandName::List, line)?;
        Ok(Self)
    }

    pub fn execute(&self, tasks: &TaskList) -> CommandResult<CommandOutput> {
        if tasks.is_empty() {
            return Err(CommandError::EmptyList {
                command: CommandName::List,
            });
        }

        let mut lines = vec![
            Ui::chatbot_separator().to_string(),
            "Here are the tasks in your list:".to_string(),
        ];
        lines.extend(
            tasks
                .iter()
                .enumerate()
                .map(|(index, task)| format!("{}.{task}", index + 1)),
        );
        Ok(CommandOutput::read_only(lines))
    }
}

/// `bye`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByeCommand;

impl ByeCommand {
    pub fn parse(line: &str) -> CommandResult<Self> {
        no_argument(CommandName::Bye, line)?;
        Ok(Self)
    }

    pub fn execute(&self) -> CommandOutput {
        CommandOutput {
            lines: vec![
                Ui::chatbot_separator().to_string(),
                "Bye. Hope to see you again soon!".to_string(),
            ],
            mutated: false,
            exit: true,
        }
    }
}
