use chatman_core::{execute_line, Command, CommandError, CommandName, TaskKind, TaskList};

#[test]
fn todo_adds_task_and_reports_count() {
    let mut list = TaskList::new();
    let output = execute_line("todo read book", &mut list).unwrap();

    assert_eq!(
        &output.lines[1..],
        [
            "Got it. I've added this task:".to_string(),
            "  [T][ ] read book".to_string(),
            "Now you have 1 task in the list.".to_string(),
        ]
    );
    assert!(output.mutated);

    let output = execute_line("todo write essay", &mut list).unwrap();
    assert_eq!(output.lines[3], "Now you have 2 tasks in the list.");
}

#[test]
fn deadline_and_event_render_schedules() {
    let mut list = TaskList::new();
    execute_line("deadline return book /by 2019-12-02 1800", &mut list).unwrap();
    execute_line(
        "event project meeting /from 2019-12-02 14:00 /to 2019-12-02 1600",
        &mut list,
    )
    .unwrap();

    let output = execute_line("list", &mut list).unwrap();
    assert_eq!(
        &output.lines[1..],
        [
            "Here are the tasks in your list:".to_string(),
            "1.[D][ ] return book (by: Dec 02 2019, 18:00)".to_string(),
            "2.[E][ ] project meeting (from: Dec 02 2019, 14:00 to: Dec 02 2019, 16:00)".to_string(),
        ]
    );
    assert!(!output.mutated);
}

#[test]
fn deadline_with_extra_option_is_argument_count_error() {
    let mut list = TaskList::new();
    let err = execute_line("deadline x /by 2019-12-02 /at home", &mut list).unwrap_err();
    assert_eq!(
        err,
        CommandError::ArgumentCount {
            command: CommandName::Deadline,
            text: "x /by 2019-12-02 /at home".to_string(),
        }
    );
    assert!(list.is_empty());
}

#[test]
fn deadline_without_description_is_format_error() {
    let mut list = TaskList::new();
    let err = execute_line("deadline /by 2019-12-02", &mut list).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Format {
            command: CommandName::Deadline,
            ..
        }
    ));
}

#[test]
fn todo_rejects_slash_and_blank_description() {
    let mut list = TaskList::new();
    assert!(matches!(
        execute_line("todo a/b", &mut list),
        Err(CommandError::ArgumentCount { .. })
    ));
    assert!(matches!(
        execute_line("todo    ", &mut list),
        Err(CommandError::Format { .. })
    ));
    assert!(matches!(
        execute_line("todo", &mut list),
        Err(CommandError::ArgumentCount { .. })
    ));
    assert!(list.is_empty());
}

#[test]
fn mark_unmark_and_delete_follow_one_based_numbers() {
    let mut list = TaskList::new();
    execute_line("todo first", &mut list).unwrap();
    execute_line("todo second", &mut list).unwrap();
    execute_line("todo third", &mut list).unwrap();

    let output = execute_line("mark 2", &mut list).unwrap();
    assert_eq!(
        &output.lines[1..],
        [
            "Nice! I've marked this task as done:".to_string(),
            "  [T][X] second".to_string(),
        ]
    );

    let output = execute_line("unmark 2", &mut list).unwrap();
    assert_eq!(output.lines[2], "  [T][ ] second");

    let output = execute_line("delete 1", &mut list).unwrap();
    assert_eq!(
        &output.lines[1..],
        [
            "Noted. I've removed this task:".to_string(),
            "  [T][ ] first".to_string(),
            "Now you have 2 tasks in the list.".to_string(),
        ]
    );

    assert_eq!(list.get(0).unwrap().description(), "second");
    assert_eq!(list.get(1).unwrap().description(), "third");
}

#[test]
fn index_commands_report_out_of_range_numbers() {
    let mut list = TaskList::new();
    execute_line("todo only", &mut list).unwrap();

    let err = execute_line("delete 2", &mut list).unwrap_err();
    assert_eq!(
        err,
        CommandError::InvalidIndex {
            command: CommandName::Delete,
            index: 2,
            len: 1,
        }
    );

    let err = execute_line("mark -1", &mut list).unwrap_err();
    assert_eq!(
        err,
        CommandError::InvalidIndex {
            command: CommandName::Mark,
            index: -1,
            len: 1,
        }
    );
    assert_eq!(list.len(), 1);
    assert!(!list.get(0).unwrap().is_done);
}

#[test]
fn list_on_empty_list_is_reported() {
    let mut list = TaskList::new();
    let err = execute_line("list", &mut list).unwrap_err();
    assert_eq!(
        err,
        CommandError::EmptyList {
            command: CommandName::List
        }
    );
}

#[test]
fn list_and_bye_reject_arguments() {
    assert!(matches!(
        Command::parse("list everything"),
        Err(CommandError::ArgumentCount {
            command: CommandName::List,
            ..
        })
    ));
    assert!(matches!(
        Command::parse("bye now"),
        Err(CommandError::ArgumentCount {
            command: CommandName::Bye,
            ..
        })
    ));
}

#[test]
fn bye_ends_session_without_mutation() {
    let mut list = TaskList::new();
    let output = execute_line("bye", &mut list).unwrap();
    assert!(output.exit);
    assert!(!output.mutated);
    assert_eq!(output.lines[1], "Bye. Hope to see you again soon!");
}

#[test]
fn unknown_keywords_are_rejected() {
    assert_eq!(
        Command::parse("blah blah"),
        Err(CommandError::UnknownCommand("blah".to_string()))
    );
    assert_eq!(
        Command::parse("FIND milk"),
        Err(CommandError::UnknownCommand("FIND".to_string()))
    );
    assert_eq!(
        Command::parse(""),
        Err(CommandError::UnknownCommand(String::new()))
    );
}

#[test]
fn router_picks_variant_by_keyword() {
    let command = Command::parse("event talk /from 2024-01-01 /to 2024-01-02").unwrap();
    assert_eq!(command.name(), CommandName::Event);
    assert_eq!(Command::parse("unmark 1").unwrap().name(), CommandName::Unmark);
    assert_eq!(Command::parse("find x").unwrap().name(), CommandName::Find);

    if let Command::Event(event) = command {
        assert!(matches!(event.task().kind, TaskKind::Event { .. }));
    } else {
        panic!("expected event command");
    }
}

#[test]
fn error_messages_name_the_command() {
    let err = Command::parse("find").unwrap_err();
    assert_eq!(
        err.to_string(),
        "incorrect number of arguments for FIND: `find`"
    );
    let err = Command::parse("mark x").unwrap_err();
    assert_eq!(err.to_string(), "incorrect format for MARK: `mark x`");
}
