// Estate Showcase
// TUI rendition of the Unique Properties one-page brokerage site

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use estate_showcase::config_validation::load_and_validate_content;
use estate_showcase::constants::LOG_FILE;
use estate_showcase::core::App;
use estate_showcase::{telemetry, ui};

fn main() -> Result<()> {
    telemetry::init(LOG_FILE, "info")?;

    // Load page content (copy, carousel points, UI tuning)
    let content = load_and_validate_content(None)?;
    info!(points = content.process.points.len(), "content loaded");

    let mut app = App::new(content);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
