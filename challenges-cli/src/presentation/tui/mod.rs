pub mod app;
pub mod event;
pub mod ui;

pub use app::App;
pub use event::AppEvent;

use crate::infrastructure::{CliError, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Setup terminal for TUI mode
pub fn setup_terminal() -> Result<TuiTerminal> {
    enable_raw_mode()
        .map_err(|e| CliError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal mode
pub fn restore_terminal(mut terminal: TuiTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw and dispatch until the user quits
pub fn run(terminal: &mut TuiTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match event::read_event()? {
            AppEvent::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            AppEvent::Tick => app.tick(),
        }
    }

    Ok(())
}
