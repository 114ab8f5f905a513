//! `find <keyword>`: literal substring search over task descriptions.

use crate::command::error::{CommandName, CommandResult};
use crate::command::{single_argument, CommandOutput};
use crate::model::task_list::TaskList;
use crate::search::keyword::find_matches;
use crate::ui::Ui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keyword: String,
}

impl FindCommand {
    /// Validates `find <keyword>` and extracts the trimmed keyword.
    ///
    /// The `/` check runs on the raw segments before trimming, so `find a/b`
    /// is rejected while `find   milk  ` searches for `milk`.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let keyword = single_argument(CommandName::Find, line)?;
        Ok(Self {
            keyword: keyword.to_string(),
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Renders the header and one `<n>.<task>` line per match.
    ///
    /// Zero matches is not an error: only the header is emitted.
    pub fn execute(&self, tasks: &TaskList) -> CommandOutput {
        let mut lines = vec![
            Ui::chatbot_separator().to_string(),
            format!(
                "Here are the full matches in your list for '{}':",
                self.keyword
            ),
        ];
        lines.extend(
            find_matches(tasks, &self.keyword)
                .into_iter()
                .map(|hit| format!("{}.{}", hit.display_number(), hit.task)),
        );
        CommandOutput::read_only(lines)
    }
}
