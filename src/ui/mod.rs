// UI module
// Views and the main event loop

pub mod app_view;
pub mod carousel_view;
pub mod form_view;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::Duration;

use crate::core::{App, AppEvent, EventHandler, Section};

pub use app_view::render_app;
pub use carousel_view::render_carousel;
pub use styles::Styles;

/// Run the main application event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events; the poll timeout doubles as the animation tick
        if event::poll(Duration::from_millis(app.content.ui.tick_ms))? {
            let editing = app.is_editing();
            let app_event = EventHandler::handle(event::read()?, editing);
            handle_event(app, app_event);
        }

        // Advance animations and visibility polling
        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle an application event
fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::NextSection => app.next_section(),
        AppEvent::PrevSection => app.prev_section(),
        AppEvent::GoToSection(index) => {
            if let Some(section) = Section::from_index(index) {
                app.go_to_section(section);
            }
        }
        AppEvent::FocusNext => match app.section {
            Section::Overview => app.list_property.focus_next(),
            Section::Consultation => app.consultation.focus_next(),
            _ => {}
        },
        AppEvent::FocusPrev => match app.section {
            Section::Overview => app.list_property.focus_prev(),
            Section::Consultation => app.consultation.focus_prev(),
            _ => {}
        },
        AppEvent::Input(c) => match app.section {
            Section::Overview => app.list_property.input(c),
            Section::Consultation => app.consultation.input(c),
            _ => {}
        },
        AppEvent::Backspace => match app.section {
            Section::Overview => app.list_property.backspace(),
            Section::Consultation => app.consultation.backspace(),
            _ => {}
        },
        AppEvent::CycleNext => match app.section {
            Section::Process => app.carousel.next_point(),
            Section::Overview => app.list_property.cycle(true),
            Section::Consultation => app.consultation.cycle(true),
            _ => {}
        },
        AppEvent::CyclePrev => match app.section {
            Section::Process => app.carousel.prev_point(),
            Section::Overview => app.list_property.cycle(false),
            Section::Consultation => app.consultation.cycle(false),
            _ => {}
        },
        // On form sections the arrow keys walk fields instead of scrolling
        AppEvent::ScrollUp(amount) => match app.section {
            Section::Process => app.carousel.scroll_by(-(amount as isize)),
            Section::Overview => app.list_property.focus_prev(),
            Section::Consultation => app.consultation.focus_prev(),
            _ => {}
        },
        AppEvent::ScrollDown(amount) => match app.section {
            Section::Process => app.carousel.scroll_by(amount as isize),
            Section::Overview => app.list_property.focus_next(),
            Section::Consultation => app.consultation.focus_next(),
            _ => {}
        },
        AppEvent::Submit => app.submit_focused_form(),
        AppEvent::Click { column, row } => {
            if app.section == Section::Process {
                if let Some(index) = app.carousel.strip_hit(column, row) {
                    app.carousel.scroll_to(index);
                }
            }
        }
        AppEvent::None => {}
    }
}
