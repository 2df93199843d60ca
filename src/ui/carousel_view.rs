// Carousel View
// Renders the index strip and the scrollable detail list, and records the
// on-screen geometry the carousel needs for clicks and visibility polling

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::carousel::{Carousel, Point};
use crate::constants::{POINT_ITEM_GAP, POINT_ITEM_ROWS};
use crate::utilities::wrap_text;

use super::Styles;

/// Rows one index strip entry occupies, plus one spacer row
const STRIP_ENTRY_ROWS: u16 = 2;
const STRIP_ENTRY_STRIDE: u16 = 3;

/// Render the carousel into `area`: index strip on the left, detail viewport
/// on the right (the original page's 30/70 split)
pub fn render_carousel(f: &mut Frame, carousel: &mut Carousel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let strip_block = Block::default().borders(Borders::ALL).title("Steps");
    let strip_inner = strip_block.inner(chunks[0]);
    f.render_widget(strip_block, chunks[0]);

    let detail_block = Block::default().borders(Borders::ALL);
    let detail_inner = detail_block.inner(chunks[1]);
    f.render_widget(detail_block, chunks[1]);

    let zones = strip_zones(strip_inner, carousel.len());
    render_strip(f, carousel, &zones);
    render_detail(f, carousel, detail_inner);

    // Record this frame's geometry for click resolution and polling
    carousel.set_bounds(zones, detail_inner);
}

/// One clickable hit zone per strip entry, top to bottom; entries that do not
/// fit inside `area` get no zone
pub fn strip_zones(area: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map_while(|i| {
            let y = area.y + i as u16 * STRIP_ENTRY_STRIDE;
            if y + STRIP_ENTRY_ROWS <= area.y + area.height {
                Some(Rect::new(area.x, y, area.width, STRIP_ENTRY_ROWS))
            } else {
                None
            }
        })
        .collect()
}

fn render_strip(f: &mut Frame, carousel: &Carousel, zones: &[Rect]) {
    let active = carousel.active_index();
    for (index, (point, zone)) in carousel.points().iter().zip(zones).enumerate() {
        let is_active = active == Some(index);
        let (marker, style) = if is_active {
            ("●", Styles::point_active())
        } else {
            ("○", Styles::point_inactive())
        };
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} {}", marker, point.title),
                style,
            )),
            Line::from(Span::styled(
                format!("   {}", point.icon),
                Styles::image_placeholder(),
            )),
        ];
        f.render_widget(Paragraph::new(lines), *zone);
    }
}

/// Render the window of the virtual detail column starting at the carousel's
/// scroll offset
fn render_detail(f: &mut Frame, carousel: &Carousel, area: Rect) {
    if carousel.is_empty() || area.height == 0 {
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let mut column: Vec<Line> = Vec::new();
    for point in carousel.points() {
        column.extend(item_lines(point, width));
        for _ in 0..POINT_ITEM_GAP {
            column.push(Line::default());
        }
    }

    let offset = carousel.scroll_offset().min(column.len());
    let end = (offset + area.height as usize).min(column.len());
    let visible = column[offset..end].to_vec();
    f.render_widget(Paragraph::new(visible), area);
}

/// Build exactly `POINT_ITEM_ROWS` lines for one detail card
fn item_lines(point: &Point, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(POINT_ITEM_ROWS);
    // A broken image reference just renders as-is; display only degradation
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", point.detail.image),
        Styles::image_placeholder(),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        point.detail.title.clone(),
        Styles::detail_title(),
    )));
    lines.push(Line::default());

    let body_rows = POINT_ITEM_ROWS - lines.len();
    let mut wrapped = wrap_text(&point.detail.description, width.max(1));
    if wrapped.len() > body_rows {
        wrapped.truncate(body_rows);
        if let Some(last) = wrapped.last_mut() {
            last.push('…');
        }
    }
    for row in &wrapped {
        lines.push(Line::from(Span::styled(row.clone(), Styles::detail_body())));
    }
    while lines.len() < POINT_ITEM_ROWS {
        lines.push(Line::default());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::PointDetail;

    fn sample_point() -> Point {
        Point {
            title: "Consultation".to_string(),
            icon: "icons/consultation.png".to_string(),
            detail: PointDetail {
                image: "images/consultation.webp".to_string(),
                title: "Expert Property Consultation".to_string(),
                description: "A clear understanding of your property's market value and potential, \
                              with tailored strategies for a swift and successful sale."
                    .to_string(),
            },
        }
    }

    #[test]
    fn test_one_zone_per_point() {
        let area = Rect::new(2, 2, 20, 14);
        assert_eq!(strip_zones(area, 4).len(), 4);
    }

    #[test]
    fn test_zero_points_no_zones() {
        let area = Rect::new(0, 0, 20, 14);
        assert!(strip_zones(area, 0).is_empty());
    }

    #[test]
    fn test_zones_clipped_to_area() {
        // 7 rows fit two 3-row strides plus one 2-row entry
        let area = Rect::new(0, 0, 20, 8);
        assert_eq!(strip_zones(area, 4).len(), 3);
    }

    #[test]
    fn test_item_lines_fixed_height() {
        let lines = item_lines(&sample_point(), 30);
        assert_eq!(lines.len(), POINT_ITEM_ROWS);
        // Long descriptions are truncated, never overflowing the card
        let narrow = item_lines(&sample_point(), 10);
        assert_eq!(narrow.len(), POINT_ITEM_ROWS);
    }
}
