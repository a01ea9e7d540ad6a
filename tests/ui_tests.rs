// Render and key-handling tests for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use rostty::manager::Roster;
use rostty::session::Session;
use rostty::ui::App;

fn screen(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn type_line(app: &mut App, line: &str) {
    for c in line.chars() {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
}

#[test]
fn test_renders_all_panes() {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).expect("terminal");
    let mut app = App::new(Session::new(Roster::with_sample_data()));

    terminal.draw(|f| app.render(f)).expect("draw");
    let text = screen(&terminal);

    assert!(text.contains("Students (2)"));
    assert!(text.contains("John Doe"));
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Add New Student"));
    assert!(text.contains("Statistics"));
    assert!(text.contains("3.65"));
    assert!(text.contains("Enter your choice (1-7):"));
}

#[test]
fn test_typed_lines_drive_the_session() {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).expect("terminal");
    let mut app = App::new(Session::new(Roster::with_sample_data()));

    type_line(&mut app, "5");
    type_line(&mut app, "1");
    type_line(&mut app, "yes");
    assert_eq!(app.session.roster().len(), 1);
    assert!(app.status_message.contains("deleted"));

    terminal.draw(|f| app.render(f)).expect("draw");
    let text = screen(&terminal);
    assert!(text.contains("Students (1)"));
}

#[test]
fn test_escape_cancels_and_ctrl_c_quits() {
    let mut app = App::new(Session::new(Roster::new()));

    type_line(&mut app, "1");
    assert!(!app.session.at_menu());
    app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(app.session.at_menu());
    assert!(!app.should_quit);

    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_exit_waits_for_a_key() {
    let mut app = App::new(Session::new(Roster::new()));
    type_line(&mut app, "7");
    assert!(app.session.is_finished());
    assert!(!app.should_quit);

    app.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
    assert!(app.should_quit);
}
