use std::io::{self, IsTerminal};

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod cli;
mod domain;
mod services;
mod tui;

use cli::Cli;
use tui::App;

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    if !io::stdout().is_terminal() {
        anyhow::bail!("columna is an interactive form; run it from a terminal");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = tui::run(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
