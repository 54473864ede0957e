use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{Player, RodioEngine};
use crate::catalog;
use crate::config;
use crate::layout::Metrics;

mod event_loop;
mod logging;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::Settings::load_or_default();
    logging::init(&settings.log);

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.catalog.path.clone());

    // Everything that can fail at startup happens before the terminal is
    // taken over, so errors print normally.
    let catalog = catalog::load(&path)?;
    if catalog.is_empty() {
        return Err(format!("catalog {} contains no albums", path.display()).into());
    }
    let engine = RodioEngine::open()?;
    let player = Player::new(engine, settings.playback.missing_file);
    let mut app = App::new(catalog, player);
    let metrics = Metrics::from(&settings.layout);

    info!(
        "starting with {} albums, missing-file policy {:?}",
        app.catalog.len(),
        settings.playback.missing_file
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(settings.ui.title.as_str())
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &metrics, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    run_result
}
