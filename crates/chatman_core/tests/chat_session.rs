use chatman_core::db::open_db_in_memory;
use chatman_core::{
    ChatSession, CommandError, RepoResult, SessionError, SqliteTaskRepository, Task, TaskList,
    TaskRepository,
};
use std::cell::{Cell, RefCell};

/// Records saves and can be told to fail them.
#[derive(Default)]
struct RecordingRepository {
    stored: RefCell<Vec<Task>>,
    saves: Cell<usize>,
}

impl TaskRepository for &RecordingRepository {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        Ok(self.stored.borrow().clone())
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        self.saves.set(self.saves.get() + 1);
        *self.stored.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}

#[test]
fn mutating_commands_are_persisted() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut session = ChatSession::open(SqliteTaskRepository::new(&conn)).unwrap();
        session.handle_line("todo buy milk").unwrap();
        session.handle_line("deadline pay rent /by 2024-06-01").unwrap();
        session.handle_line("mark 1").unwrap();
    }

    let session = ChatSession::open(SqliteTaskRepository::new(&conn)).unwrap();
    let tasks = session.tasks();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.get(0).unwrap().is_done);
    assert_eq!(tasks.get(1).unwrap().description(), "pay rent");
}

#[test]
fn read_only_commands_do_not_save() {
    let repo = RecordingRepository::default();
    let mut session = ChatSession::open(&repo).unwrap();

    session.handle_line("todo read book").unwrap();
    assert_eq!(repo.saves.get(), 1);

    session.handle_line("list").unwrap();
    session.handle_line("find book").unwrap();
    session.handle_line("find nothing-here").unwrap();
    assert_eq!(repo.saves.get(), 1);
}

#[test]
fn rejected_lines_leave_list_and_storage_untouched() {
    let repo = RecordingRepository::default();
    let mut session = ChatSession::open(&repo).unwrap();
    session.handle_line("todo one").unwrap();

    for line in ["find", "find a/b", "delete 7", "todo", "dance"] {
        let err = session.handle_line(line).unwrap_err();
        assert!(matches!(err, SessionError::Command(_)), "line `{line}`");
    }

    assert_eq!(session.tasks().len(), 1);
    assert_eq!(repo.saves.get(), 1);
}

#[test]
fn session_reports_command_error_kind() {
    let repo = RecordingRepository::default();
    let mut session = ChatSession::with_tasks(&repo, TaskList::new());

    match session.handle_line("find   ") {
        Err(SessionError::Command(CommandError::Format { text, .. })) => {
            assert_eq!(text, "find   ");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn bye_requests_exit() {
    let repo = RecordingRepository::default();
    let mut session = ChatSession::open(&repo).unwrap();
    let output = session.handle_line("bye").unwrap();
    assert!(output.exit);
    assert_eq!(repo.saves.get(), 0);
}

#[test]
fn open_loads_existing_tasks_in_order() {
    let repo = RecordingRepository::default();
    *repo.stored.borrow_mut() = vec![Task::todo("first").unwrap(), Task::todo("second").unwrap()];

    let mut session = ChatSession::open(&repo).unwrap();
    let output = session.handle_line("find sec").unwrap();
    assert_eq!(output.lines[2], "2.[T][ ] second");
}
