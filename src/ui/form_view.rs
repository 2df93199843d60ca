// Form View
// Renders the lead-capture forms with focus and error styling

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::forms::{ChoiceField, ConsultationForm, ListPropertyForm, TextField};

use super::Styles;

/// Render the list-property card (hero section form)
pub fn render_list_property(
    f: &mut Frame,
    form: &ListPropertyForm,
    title: &str,
    subtitle: &str,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title.to_string(), Styles::heading()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(subtitle.to_string(), Styles::blurb())),
        Line::default(),
    ];
    lines.extend(text_field_lines(&form.name, form.focus == 0));
    lines.extend(text_field_lines(&form.email, form.focus == 1));
    lines.extend(text_field_lines(&form.mobile, form.focus == 2));
    lines.extend(choice_field_lines(&form.property_type, form.focus == 3));
    lines.extend(choice_field_lines(&form.bedrooms, form.focus == 4));
    lines.extend(text_field_lines(&form.location, form.focus == 5));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[ Enter: Submit ]",
        Styles::field_label(),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Render the consultation booking form
pub fn render_consultation(
    f: &mut Frame,
    form: &ConsultationForm,
    title: &str,
    subtitle: &str,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title.to_string(), Styles::heading()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(subtitle.to_string(), Styles::blurb())),
        Line::default(),
    ];
    lines.extend(text_field_lines(&form.first_name, form.focus == 0));
    lines.extend(text_field_lines(&form.last_name, form.focus == 1));
    lines.extend(text_field_lines(&form.email, form.focus == 2));
    lines.extend(text_field_lines(&form.mobile, form.focus == 3));
    lines.extend(choice_field_lines(&form.property_type, form.focus == 4));
    lines.extend(choice_field_lines(&form.bedrooms, form.focus == 5));
    lines.extend(choice_field_lines(&form.service, form.focus == 6));
    lines.extend(text_field_lines(&form.location, form.focus == 7));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[ Enter: Submit Details ]",
        Styles::field_label(),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn text_field_lines(field: &TextField, focused: bool) -> Vec<Line<'static>> {
    let label_style = if focused {
        Styles::field_label_focused()
    } else {
        Styles::field_label()
    };
    let cursor = if focused { "▏" } else { "" };
    let mut spans = vec![
        Span::styled(format!("{:<14}", field.label), label_style),
        Span::styled(format!("{}{}", field.value, cursor), Styles::field_value()),
    ];
    if let Some(error) = &field.error {
        spans.push(Span::styled(format!("  {error}"), Styles::error()));
    }
    vec![Line::from(spans)]
}

fn choice_field_lines(field: &ChoiceField, focused: bool) -> Vec<Line<'static>> {
    let label_style = if focused {
        Styles::field_label_focused()
    } else {
        Styles::field_label()
    };
    let mut label_spans = vec![Span::styled(field.label.clone(), label_style)];
    if focused {
        label_spans.push(Span::styled("  ←/→", Styles::field_label()));
    }
    if let Some(error) = &field.error {
        label_spans.push(Span::styled(format!("  {error}"), Styles::error()));
    }

    let mut option_spans = vec![Span::raw("  ")];
    for (i, option) in field.options.iter().enumerate() {
        let selected = field.selected == Some(i);
        let (marker, style) = if selected {
            ("(•) ", Styles::choice_selected())
        } else {
            ("( ) ", Styles::field_label())
        };
        option_spans.push(Span::styled(format!("{marker}{option}  "), style));
    }

    vec![Line::from(label_spans), Line::from(option_spans)]
}
