// rostty: in-memory student roster with a terminal menu

use std::io::{self, IsTerminal};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rostty::config::Config;
use rostty::console::Console;
use rostty::logging;
use rostty::manager::Roster;
use rostty::session::Session;
use rostty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    // Full-screen mode needs a real terminal on both ends
    let full_screen = !config.plain && io::stdout().is_terminal() && io::stdin().is_terminal();
    logging::init(config.log_file.as_deref(), full_screen)?;

    let roster = if config.empty {
        Roster::new()
    } else {
        Roster::with_sample_data()
    };
    log::info!("Starting with {} student(s)", roster.len());

    let mut session = Session::new(roster);

    if !full_screen {
        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout(), io::stdout().is_terminal());
        console.run(&mut session)?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Terminal UI failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    log::info!("Session ended with {} student(s)", app.session.roster().len());
    Ok(())
}
