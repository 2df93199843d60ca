// Point Carousel
// Keeps the index strip in sync with the detail list's scroll position and
// lets clicks on the strip drive the scroll position

pub mod observer;
pub mod point;
pub mod scroll;
pub mod state;

use ratatui::layout::Rect;

use crate::constants::{ACTIVE_RATIO, POINT_ITEM_GAP, POINT_ITEM_ROWS};

pub use observer::{PollObserver, ViewportEntry, VisibilityObserver};
pub use point::{Point, PointDetail};
pub use scroll::ScrollPosition;
pub use state::{CarouselState, RowSpan};

/// The process-point carousel: a clickable index strip plus a vertically
/// scrollable detail list, kept in sync by a visibility observer.
///
/// The observer subscription is scoped to the mounted lifetime: `mount`
/// registers every detail item, `unmount` releases the subscription and turns
/// later entry batches into no-ops. A carousel mounted without an observer
/// degrades softly: the strip renders and clicks still scroll, but no entry
/// is ever highlighted.
pub struct Carousel {
    points: Vec<Point>,
    state: CarouselState,
    scroll: ScrollPosition,
    observer: Option<Box<dyn VisibilityObserver>>,
    mounted: bool,
    // Screen geometry recorded by the view each frame, used for click
    // resolution and for polling against the real viewport height
    strip_zones: Vec<Rect>,
    detail_area: Rect,
}

impl Carousel {
    pub fn new(points: Vec<Point>) -> Self {
        let spans = layout_spans(points.len());
        Self {
            points,
            state: CarouselState::new(spans),
            scroll: ScrollPosition::default(),
            observer: None,
            mounted: false,
            strip_zones: Vec::new(),
            detail_area: Rect::default(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Register every detail item with `observer` and take ownership of the
    /// subscription. An empty carousel registers nothing.
    pub fn mount(&mut self, mut observer: Box<dyn VisibilityObserver>) {
        if !self.points.is_empty() {
            for (index, span) in self.state.item_spans().iter().enumerate() {
                observer.observe(index, *span);
            }
            self.observer = Some(observer);
        }
        self.mounted = true;
    }

    /// Mount without observation: the index strip renders and clicks scroll,
    /// but nothing is highlighted
    pub fn mount_degraded(&mut self) {
        self.mounted = true;
    }

    /// Release the observation subscription synchronously. Entry batches
    /// applied after this point are ignored.
    pub fn unmount(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.mounted = false;
    }

    /// Apply one observer callback batch.
    ///
    /// Of the entries intersecting with at least 75% visible area, the lowest
    /// index becomes active (the fixed tie-break when several qualify at
    /// once). Returns true when the active index changed.
    pub fn apply_entries(&mut self, entries: &[ViewportEntry]) -> bool {
        if !self.mounted {
            return false;
        }
        let candidate = entries
            .iter()
            .filter(|entry| entry.is_intersecting && entry.ratio >= ACTIVE_RATIO)
            .map(|entry| entry.index)
            .min();
        match candidate {
            Some(index) => self.state.set_active(index),
            None => false,
        }
    }

    /// Issue one smooth-scroll request aligning item `index`'s start row with
    /// the viewport's start row. Convergence of the active index is eventual:
    /// the observer fires again as the animation advances.
    pub fn scroll_to(&mut self, index: usize) {
        if let Some(span) = self.state.span(index) {
            let target = span.start.min(self.max_offset());
            self.scroll.animate_to(target);
        }
    }

    /// Manual scroll of the detail viewport by `delta` rows
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.max_offset();
        self.scroll.scroll_by(delta, max);
    }

    /// Scroll to the point after the active one (keyboard counterpart of a
    /// strip click)
    pub fn next_point(&mut self) {
        let current = self.state.active_index().unwrap_or(0);
        if current + 1 < self.points.len() {
            self.scroll_to(current + 1);
        }
    }

    pub fn prev_point(&mut self) {
        let current = self.state.active_index().unwrap_or(0);
        if current > 0 {
            self.scroll_to(current - 1);
        }
    }

    /// Advance the scroll animation and poll visibility. Called once per
    /// event-loop tick while the carousel is on screen.
    pub fn tick(&mut self) {
        if !self.mounted {
            return;
        }
        self.scroll.step();
        let viewport_rows = self.detail_area.height as usize;
        if viewport_rows == 0 {
            return;
        }
        let viewport = RowSpan::new(self.scroll.offset(), viewport_rows);
        let entries = match self.observer.as_mut() {
            Some(observer) => observer.poll(viewport),
            None => return,
        };
        self.apply_entries(&entries);
    }

    /// Record on-screen geometry for this frame: one hit zone per strip entry
    /// and the detail viewport area
    pub fn set_bounds(&mut self, strip_zones: Vec<Rect>, detail_area: Rect) {
        self.strip_zones = strip_zones;
        self.detail_area = detail_area;
    }

    pub fn detail_area(&self) -> Rect {
        self.detail_area
    }

    /// Resolve a click position to an index strip entry
    pub fn strip_hit(&self, column: u16, row: u16) -> Option<usize> {
        self.strip_zones
            .iter()
            .position(|zone| hit(zone, column, row))
    }

    fn max_offset(&self) -> usize {
        let viewport_rows = self.detail_area.height as usize;
        self.state.total_rows().saturating_sub(viewport_rows)
    }
}

fn hit(zone: &Rect, column: u16, row: u16) -> bool {
    column >= zone.x
        && column < zone.x + zone.width
        && row >= zone.y
        && row < zone.y + zone.height
}

/// Fixed item geometry: every detail item spans `POINT_ITEM_ROWS` rows with a
/// `POINT_ITEM_GAP` blank gap after it
fn layout_spans(count: usize) -> Vec<RowSpan> {
    (0..count)
        .map(|i| RowSpan::new(i * (POINT_ITEM_ROWS + POINT_ITEM_GAP), POINT_ITEM_ROWS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points(count: usize) -> Vec<Point> {
        (0..count)
            .map(|i| Point {
                title: format!("Step {i}"),
                icon: format!("icons/step-{i}.png"),
                detail: PointDetail {
                    image: format!("images/step-{i}.webp"),
                    title: format!("Detail {i}"),
                    description: "About this step".to_string(),
                },
            })
            .collect()
    }

    fn mounted_carousel(count: usize) -> Carousel {
        let mut carousel = Carousel::new(sample_points(count));
        carousel.set_bounds(Vec::new(), Rect::new(0, 0, 40, 12));
        carousel.mount(Box::new(PollObserver::new(&[0.25, 0.75])));
        carousel
    }

    #[test]
    fn test_one_span_per_point_in_input_order() {
        let carousel = Carousel::new(sample_points(4));
        assert_eq!(carousel.len(), 4);
        assert_eq!(carousel.state().item_spans().len(), 4);
        let starts: Vec<usize> = carousel
            .state()
            .item_spans()
            .iter()
            .map(|span| span.start)
            .collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_mostly_visible_item_becomes_active() {
        let mut carousel = mounted_carousel(4);
        let entries = [
            ViewportEntry { index: 1, ratio: 0.1, is_intersecting: true },
            ViewportEntry { index: 2, ratio: 0.9, is_intersecting: true },
            ViewportEntry { index: 3, ratio: 0.1, is_intersecting: true },
        ];
        assert!(carousel.apply_entries(&entries));
        assert_eq!(carousel.active_index(), Some(2));
    }

    #[test]
    fn test_tie_break_picks_lowest_index() {
        let mut carousel = mounted_carousel(4);
        let entries = [
            ViewportEntry { index: 3, ratio: 0.8, is_intersecting: true },
            ViewportEntry { index: 1, ratio: 0.8, is_intersecting: true },
        ];
        carousel.apply_entries(&entries);
        assert_eq!(carousel.active_index(), Some(1));
    }

    #[test]
    fn test_identical_batches_are_idempotent() {
        let mut carousel = mounted_carousel(4);
        let entries = [ViewportEntry { index: 2, ratio: 0.9, is_intersecting: true }];
        assert!(carousel.apply_entries(&entries));
        assert!(!carousel.apply_entries(&entries));
        assert_eq!(carousel.active_index(), Some(2));
    }

    #[test]
    fn test_no_qualifying_entry_keeps_active_index() {
        let mut carousel = mounted_carousel(4);
        carousel.apply_entries(&[ViewportEntry { index: 1, ratio: 0.9, is_intersecting: true }]);
        let weak = [ViewportEntry { index: 2, ratio: 0.4, is_intersecting: true }];
        assert!(!carousel.apply_entries(&weak));
        assert_eq!(carousel.active_index(), Some(1));
    }

    #[test]
    fn test_click_issues_one_scroll_request_to_item_start() {
        let mut carousel = Carousel::new(sample_points(4));
        // Tall enough that the virtual column overflows the viewport
        carousel.set_bounds(Vec::new(), Rect::new(0, 0, 40, 12));
        carousel.scroll_to(2);
        assert!(carousel.scroll.is_animating());
        while carousel.scroll.step() {}
        let expected = carousel.state().span(2).unwrap().start;
        assert_eq!(carousel.scroll_offset(), expected);
    }

    #[test]
    fn test_scroll_target_clamped_to_max_offset() {
        let mut carousel = Carousel::new(sample_points(4));
        carousel.set_bounds(Vec::new(), Rect::new(0, 0, 40, 30));
        carousel.scroll_to(3);
        while carousel.scroll.step() {}
        assert_eq!(
            carousel.scroll_offset(),
            carousel.state().total_rows() - 30
        );
    }

    #[test]
    fn test_tick_converges_active_index_after_scroll() {
        let mut carousel = mounted_carousel(4);
        // Settle the initial observation on item 0
        carousel.tick();
        assert_eq!(carousel.active_index(), Some(0));
        carousel.scroll_to(2);
        for _ in 0..50 {
            carousel.tick();
        }
        assert_eq!(carousel.active_index(), Some(2));
    }

    #[test]
    fn test_stale_entries_after_unmount_are_ignored() {
        let mut carousel = mounted_carousel(4);
        carousel.apply_entries(&[ViewportEntry { index: 1, ratio: 0.9, is_intersecting: true }]);
        carousel.unmount();
        assert!(!carousel.is_mounted());
        assert!(!carousel.has_observer());
        let stale = [ViewportEntry { index: 3, ratio: 1.0, is_intersecting: true }];
        assert!(!carousel.apply_entries(&stale));
        assert_eq!(carousel.active_index(), Some(1));
    }

    #[test]
    fn test_empty_carousel_registers_no_targets() {
        let mut carousel = Carousel::new(Vec::new());
        carousel.set_bounds(Vec::new(), Rect::new(0, 0, 40, 12));
        let observer = PollObserver::new(&[0.25, 0.75]);
        carousel.mount(Box::new(observer));
        // No points means no subscription is taken at all
        assert!(!carousel.has_observer());
        carousel.tick();
        assert_eq!(carousel.active_index(), None);
    }

    #[test]
    fn test_degraded_mount_scrolls_without_highlighting() {
        let mut carousel = Carousel::new(sample_points(4));
        carousel.set_bounds(Vec::new(), Rect::new(0, 0, 40, 12));
        carousel.mount_degraded();
        carousel.scroll_to(1);
        for _ in 0..50 {
            carousel.tick();
        }
        assert_eq!(carousel.scroll_offset(), carousel.state().span(1).unwrap().start);
        assert_eq!(carousel.active_index(), None);
    }

    #[test]
    fn test_strip_hit_resolution() {
        let mut carousel = Carousel::new(sample_points(2));
        carousel.set_bounds(
            vec![Rect::new(0, 0, 10, 2), Rect::new(0, 3, 10, 2)],
            Rect::new(12, 0, 30, 12),
        );
        assert_eq!(carousel.strip_hit(4, 1), Some(0));
        assert_eq!(carousel.strip_hit(4, 4), Some(1));
        assert_eq!(carousel.strip_hit(20, 1), None);
    }
}
