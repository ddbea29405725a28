//! The Blackwood Manor Case
//!
//! A detective text adventure: walk the manor, collect the clues, and
//! name the suspect the evidence points at.

use blackwood_manor::tui::App;
use blackwood_manor::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;

fn main() -> Result<()> {
    // Build the game first: a bad case file should fail before the
    // terminal is touched.
    let mut app = App::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let outcome = run(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    outcome?;

    println!("\n╔══════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing The Blackwood Manor Case!        ║");
    println!("║                                                      ║");
    println!("║  The manor keeps what you did not find.              ║");
    println!("╚══════════════════════════════════════════════════════╝\n");

    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if !app.handle_input()? {
            break;
        }
    }
    Ok(())
}
