//! Literal keyword scan over task descriptions.
//!
//! # Responsibility
//! - Return every task whose description contains a keyword.
//!
//! # Invariants
//! - Matching is case-sensitive substring containment; descriptions are not
//!   trimmed or tokenized.
//! - Hits are ordered by ascending list index.

use crate::model::task::Task;
use crate::model::task_list::TaskList;

/// Single match returned by [`find_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// Zero-based position in the task list.
    pub index: usize,
    pub task: &'a Task,
}

impl SearchHit<'_> {
    /// One-based position as shown to the user.
    pub fn display_number(&self) -> usize {
        self.index + 1
    }
}

/// Scans `list` in order and collects tasks whose description contains
/// `keyword`.
pub fn find_matches<'a>(list: &'a TaskList, keyword: &str) -> Vec<SearchHit<'a>> {
    list.iter()
        .enumerate()
        .filter(|(_, task)| task.description().contains(keyword))
        .map(|(index, task)| SearchHit { index, task })
        .collect()
}
