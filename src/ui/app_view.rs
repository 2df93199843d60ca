// Application View
// Page layout: header, section strip, active section content, footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::{App, Section};

use super::carousel_view::render_carousel;
use super::form_view::{render_consultation, render_list_property};
use super::Styles;

/// Render the entire page
pub fn render_app(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Brand header
            Constraint::Length(1), // Section strip
            Constraint::Min(0),    // Section content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_section_strip(f, app, chunks[1]);
    render_section(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(app.content.hero.brand.clone(), Styles::brand()),
        Span::styled(
            format!("  {}", app.content.hero.tagline),
            Styles::blurb(),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_section_strip(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == app.section {
            Styles::section_active()
        } else {
            Styles::section_inactive()
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, section.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_section(f: &mut Frame, app: &mut App, area: Rect) {
    match app.section {
        Section::Overview => render_overview(f, app, area),
        Section::WhyUs => render_why_us(f, app, area),
        Section::Process => render_process(f, app, area),
        Section::Consultation => render_consultation_section(f, app, area),
    }
}

/// Hero banner: headline on the left, list-property card on the right
fn render_overview(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let hero = &app.content.hero;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(hero.heading.clone(), Styles::heading())),
        Line::default(),
        Line::from(Span::styled(hero.tagline.clone(), Styles::blurb())),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    render_list_property(
        f,
        &app.list_property,
        &app.content.hero.card_title,
        &app.content.hero.card_subtitle,
        chunks[1],
    );
}

fn render_why_us(f: &mut Frame, app: &App, area: Rect) {
    let why_us = &app.content.why_us;
    let mut lines = vec![
        Line::from(Span::styled(why_us.heading.clone(), Styles::heading())),
        Line::from(Span::styled(why_us.blurb.clone(), Styles::blurb())),
        Line::default(),
    ];
    for point in &why_us.points {
        lines.push(Line::from(vec![
            Span::styled("  ✔ ", Styles::check()),
            Span::styled(point.title.clone(), Styles::detail_title()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", point.description),
            Styles::detail_body(),
        )));
        lines.push(Line::default());
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// The process section: heading plus the point carousel
fn render_process(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let process = &app.content.process;
    let intro = vec![
        Line::from(Span::styled(process.heading.clone(), Styles::heading())),
        Line::from(Span::styled(process.blurb.clone(), Styles::blurb())),
    ];
    f.render_widget(Paragraph::new(intro).wrap(Wrap { trim: false }), chunks[0]);

    render_carousel(f, &mut app.carousel, chunks[1]);
}

/// Track record stats, closing line, banner, and the consultation form
fn render_consultation_section(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Heading + stats
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Banner
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_consultation(
        f,
        &app.consultation,
        &app.content.consultation.form_title,
        &app.content.consultation.form_subtitle,
        chunks[1],
    );
    render_banner(f, app, chunks[2]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let consultation = &app.content.consultation;
    let header = vec![
        Line::from(Span::styled(consultation.heading.clone(), Styles::heading())),
        Line::from(Span::styled(consultation.blurb.clone(), Styles::blurb())),
        Line::from(Span::styled(consultation.closing.clone(), Styles::blurb())),
    ];
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    f.render_widget(Paragraph::new(header).wrap(Wrap { trim: false }), chunks[0]);

    if consultation.stats.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = consultation
        .stats
        .iter()
        .map(|_| Constraint::Ratio(1, consultation.stats.len() as u32))
        .collect();
    let stat_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);
    for (stat, chunk) in consultation.stats.iter().zip(stat_chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(stat.value.clone(), Styles::stat_value())),
            Line::from(Span::styled(stat.label.clone(), Styles::stat_label())),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *chunk,
        );
    }
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let banner = &app.content.banner;
    let line = Line::from(vec![
        Span::styled(banner.heading.clone(), Styles::detail_title()),
        Span::styled(format!("  {}", banner.blurb), Styles::blurb()),
        Span::styled(format!("  [{}]", banner.button), Styles::choice_selected()),
    ]);
    f.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    // A pending status message takes over the footer until it expires
    let line = if let Some(status) = &app.status {
        let style = if status.is_error {
            Styles::error()
        } else {
            Styles::success()
        };
        Line::from(Span::styled(status.text.clone(), style))
    } else {
        let bindings = match app.section {
            Section::Process => {
                "Tab: Section | ↑/↓: Scroll | ←/→: Step | Click: Jump to step | q: Quit"
            }
            Section::Overview | Section::Consultation => {
                "Tab: Section | ↑/↓: Field | ←/→: Choose | Enter: Submit | Esc: Quit"
            }
            Section::WhyUs => "Tab: Section | 1-4: Jump to section | q: Quit",
        };
        Line::from(vec![
            Span::styled(bindings.to_string(), Styles::footer()),
            Span::styled(
                format!("   {} — {}", app.content.footer.made_by, app.content.footer.copyright),
                Styles::footer(),
            ),
        ])
    };
    f.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
