mod alias;
mod cli;
mod data;
mod query;
mod state;
mod stats;
mod ui;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::alias::AliasMap;
use crate::cli::Cli;
use crate::data::Dataset;
use crate::query::QueryService;
use crate::state::AppState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    // Everything is loaded before the terminal goes raw, so a broken data
    // directory reports on a normal stderr.
    let dataset = Dataset::load(cli.data_dir.join("worldcup.csv"))?;
    let aliases = AliasMap::load(cli.data_dir.join("aliases.json"))?;
    let service = QueryService::new(aliases.normalize(&dataset));
    info!(
        "loaded {} finals, {} winning countries",
        service.record_count(),
        service.all_winning_countries().len()
    );

    let mut state = AppState::new(service);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| ui::draw(f, &state))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = event::read()? {
                if state.handle_input(code) {
                    break;
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
