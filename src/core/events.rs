// Event Handling
// Application event types and translation from terminal events

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move to the next page section
    NextSection,

    /// Move to the previous page section
    PrevSection,

    /// Jump to the section with the given index
    GoToSection(usize),

    /// Move form focus to the next field
    FocusNext,

    /// Move form focus to the previous field
    FocusPrev,

    /// Type a character into the focused field
    Input(char),

    /// Delete the last character of the focused field
    Backspace,

    /// Cycle the focused choice field / jump to the next carousel point
    CycleNext,

    /// Cycle backwards
    CyclePrev,

    /// Scroll the carousel detail list up by amount
    ScrollUp(usize),

    /// Scroll the carousel detail list down by amount
    ScrollDown(usize),

    /// Submit the form on the current section
    Submit,

    /// Left mouse click at a screen position
    Click { column: u16, row: u16 },

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events.
///
/// Translation is mode-aware: while a text field is focused (`editing`),
/// printable keys become input instead of navigation shortcuts.
pub struct EventHandler;

impl EventHandler {
    pub fn handle(event: Event, editing: bool) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, editing),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    fn handle_key(key: KeyEvent, editing: bool) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        // Bindings that hold in both modes
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppEvent::Quit;
            }
            KeyCode::Esc => return AppEvent::Quit,
            KeyCode::Tab => return AppEvent::NextSection,
            KeyCode::BackTab => return AppEvent::PrevSection,
            KeyCode::Enter => return AppEvent::Submit,
            _ => {}
        }

        if editing {
            match key.code {
                KeyCode::Char(c) => AppEvent::Input(c),
                KeyCode::Backspace => AppEvent::Backspace,
                KeyCode::Up => AppEvent::FocusPrev,
                KeyCode::Down => AppEvent::FocusNext,
                KeyCode::Left => AppEvent::CyclePrev,
                KeyCode::Right => AppEvent::CycleNext,
                _ => AppEvent::None,
            }
        } else {
            match key.code {
                KeyCode::Char('q') => AppEvent::Quit,
                KeyCode::Char(c @ '1'..='9') => {
                    AppEvent::GoToSection(c as usize - '1' as usize)
                }
                KeyCode::Up | KeyCode::Char('k') => AppEvent::ScrollUp(1),
                KeyCode::Down | KeyCode::Char('j') => AppEvent::ScrollDown(1),
                KeyCode::PageUp => AppEvent::ScrollUp(5),
                KeyCode::PageDown => AppEvent::ScrollDown(5),
                KeyCode::Left | KeyCode::Char('h') => AppEvent::CyclePrev,
                KeyCode::Right | KeyCode::Char('l') => AppEvent::CycleNext,
                _ => AppEvent::None,
            }
        }
    }

    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::ScrollUp => AppEvent::ScrollUp(3),
            MouseEventKind::ScrollDown => AppEvent::ScrollDown(3),
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}
