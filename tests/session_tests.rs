// Integration tests for the menu session and the plain console

use rostty::console::Console;
use rostty::manager::Roster;
use rostty::session::{LineKind, OutputLine, Session};

fn texts(lines: &[OutputLine]) -> Vec<&str> {
    lines.iter().map(|l| l.text.as_str()).collect()
}

fn has_line(lines: &[OutputLine], kind: LineKind, needle: &str) -> bool {
    lines.iter().any(|l| l.kind == kind && l.text.contains(needle))
}

/// Submit several lines and collect everything printed
fn feed(session: &mut Session, inputs: &[&str]) -> Vec<OutputLine> {
    inputs.iter().flat_map(|input| session.submit(input)).collect()
}

#[test]
fn test_add_through_menu() {
    let mut session = Session::new(Roster::new());
    assert_eq!(session.prompt(), "Enter your choice (1-7): ");

    let out = session.submit("1");
    assert_eq!(texts(&out), vec!["--- ADD NEW STUDENT ---"]);
    assert_eq!(session.prompt(), "Enter student name: ");

    let out = feed(
        &mut session,
        &["Grace Hopper", "grace@navy.mil", "45", "Compilers", "3.9"],
    );
    assert!(has_line(&out, LineKind::Success, "ID: 1"));
    assert!(session.at_menu());

    let student = session.roster().find_by_id(1).expect("added");
    assert_eq!(student.name(), "Grace Hopper");
    assert_eq!(student.course(), "Compilers");
}

#[test]
fn test_add_aborts_on_first_bad_field() {
    let mut session = Session::new(Roster::with_sample_data());

    let out = feed(&mut session, &["1", "Young Person", "young@email.com", "15"]);
    assert!(has_line(&out, LineKind::Error, "Age must be between 16 and 100."));
    assert!(session.at_menu());
    assert_eq!(session.roster().len(), 2);

    let out = feed(&mut session, &["1", "X"]);
    assert!(has_line(&out, LineKind::Error, "Invalid name"));
    assert!(session.at_menu());
}

#[test]
fn test_unparsable_number_aborts_only_current_operation() {
    let mut session = Session::new(Roster::new());

    let out = feed(&mut session, &["1", "Alan Turing", "alan@bletchley.uk", "forty"]);
    assert!(has_line(
        &out,
        LineKind::Error,
        "Please enter valid numbers for age and GPA."
    ));
    assert!(session.at_menu());

    let out = feed(&mut session, &["3", "abc"]);
    assert!(has_line(&out, LineKind::Error, "Please enter a valid ID number."));
    assert!(session.at_menu());
    assert!(!session.is_finished());
}

#[test]
fn test_bad_menu_choice() {
    let mut session = Session::new(Roster::new());

    let out = session.submit("9");
    assert!(has_line(&out, LineKind::Error, "Choice must be between 1 and 7"));

    let out = session.submit("hello");
    assert!(has_line(&out, LineKind::Error, "Invalid input. Please enter a number."));
    assert!(session.at_menu());
}

#[test]
fn test_list_and_search() {
    let mut session = Session::new(Roster::new());
    let out = session.submit("2");
    assert!(has_line(&out, LineKind::Text, "No students found in the system."));

    let mut session = Session::new(Roster::with_sample_data());
    let out = session.submit("2");
    assert!(has_line(&out, LineKind::Text, "Total Students: 2"));
    let records: Vec<&str> = out
        .iter()
        .filter(|l| l.kind == LineKind::Record)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(records.len(), 2);
    assert!(records[0].starts_with("ID: 1 | Name: John Doe"));
    assert!(records[1].starts_with("ID: 2 | Name: Jane Smith"));

    let out = feed(&mut session, &["3", "2"]);
    assert!(has_line(&out, LineKind::Record, "Jane Smith"));

    let out = feed(&mut session, &["3", "42"]);
    assert!(has_line(&out, LineKind::Error, "Student with ID 42 not found."));
}

#[test]
fn test_update_keeps_blank_and_invalid_fields() {
    let mut session = Session::new(Roster::with_sample_data());

    feed(&mut session, &["4", "1"]);
    assert_eq!(session.prompt(), "New name [John Doe]: ");
    session.submit("");
    assert_eq!(session.prompt(), "New email [john@email.com]: ");
    let out = session.submit("broken@");
    assert!(has_line(&out, LineKind::Text, "Invalid email ignored"));
    assert_eq!(session.prompt(), "New course [Computer Science]: ");
    let out = session.submit("Physics");
    assert!(has_line(&out, LineKind::Success, "Student updated successfully"));

    let student = session.roster().find_by_id(1).expect("present");
    assert_eq!(student.name(), "John Doe");
    assert_eq!(student.email(), "john@email.com");
    assert_eq!(student.course(), "Physics");
}

#[test]
fn test_update_unknown_id_returns_to_menu() {
    let mut session = Session::new(Roster::with_sample_data());
    let out = feed(&mut session, &["4", "5"]);
    assert!(has_line(&out, LineKind::Error, "Student with ID 5 not found."));
    assert!(session.at_menu());
}

#[test]
fn test_delete_requires_confirmation() {
    let mut session = Session::new(Roster::with_sample_data());

    let out = feed(&mut session, &["5", "1", "no"]);
    assert!(has_line(&out, LineKind::Text, "Delete operation cancelled."));
    assert_eq!(session.roster().len(), 2);

    let out = feed(&mut session, &["5", "1", "Y"]);
    assert!(has_line(&out, LineKind::Success, "Student deleted successfully"));
    assert_eq!(session.roster().len(), 1);
    assert_eq!(session.roster().list()[0].name(), "Jane Smith");

    let out = feed(&mut session, &["5", "1"]);
    assert!(has_line(&out, LineKind::Error, "Student with ID 1 not found."));
    assert_eq!(session.roster().len(), 1);
}

#[test]
fn test_statistics_output() {
    let mut session = Session::new(Roster::new());
    let out = session.submit("6");
    assert!(has_line(&out, LineKind::Text, "No data available."));

    let mut session = Session::new(Roster::with_sample_data());
    let out = session.submit("6");
    let lines = texts(&out);
    assert!(lines.contains(&"Total Students: 2"));
    assert!(lines.contains(&"Average GPA: 3.65"));
    assert!(lines.contains(&"  Computer Science: 1 students"));
    assert!(lines.contains(&"  Mathematics: 1 students"));
}

#[test]
fn test_cancel_discards_operation() {
    let mut session = Session::new(Roster::new());
    feed(&mut session, &["1", "Half Done", "half@done.io"]);
    assert!(!session.at_menu());

    let out = session.cancel();
    assert_eq!(texts(&out), vec!["Operation cancelled."]);
    assert!(session.at_menu());
    assert!(session.roster().is_empty());

    // Nothing in progress: nothing to report
    assert!(session.cancel().is_empty());
}

#[test]
fn test_exit_finishes_session() {
    let mut session = Session::new(Roster::new());
    let out = session.submit("7");
    assert!(has_line(&out, LineKind::Text, "Thank you for using"));
    assert!(session.is_finished());
    assert!(session.submit("1").is_empty());
}

#[test]
fn test_console_runs_until_exit() {
    let input = b"1\nLinus Torvalds\nlinus@kernel.org\n21\nOperating Systems\n3.2\n2\n7\n";
    let mut session = Session::new(Roster::new());
    let mut console = Console::new(&input[..], Vec::new(), false);
    console.run(&mut session).expect("console run");

    let printed = String::from_utf8(console.into_output()).expect("utf8");
    assert!(printed.contains("STUDENT MANAGEMENT SYSTEM - MAIN MENU"));
    assert!(printed.contains("Student added successfully! ID: 1"));
    assert!(printed.contains("ID: 1 | Name: Linus Torvalds"));
    assert!(printed.contains("Thank you for using Student Management System!"));
    assert!(session.is_finished());
}

#[test]
fn test_console_stops_at_end_of_input() {
    let input = b"3\n";
    let mut session = Session::new(Roster::with_sample_data());
    let mut console = Console::new(&input[..], Vec::new(), false);
    console.run(&mut session).expect("console run");

    let printed = String::from_utf8(console.into_output()).expect("utf8");
    assert!(printed.contains("Enter student ID: "));
    assert!(printed.contains("Operation cancelled."));
    assert!(session.at_menu());
    assert_eq!(session.roster().len(), 2);
}
