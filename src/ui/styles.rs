// UI Styles
// Color scheme and styling for the page

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn brand() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // === Section strip ===

    pub fn section_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === Headings and copy ===

    pub fn heading() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn blurb() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn check() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stat_value() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stat_label() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === Carousel ===

    pub fn point_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn point_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn detail_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn detail_body() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn image_placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // === Forms ===

    pub fn field_label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn field_label_focused() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn field_value() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn choice_selected() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }
}
