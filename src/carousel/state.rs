// Carousel State
// Scroll-synchronized selection state owned by one carousel instance

/// Contiguous run of rows inside the detail list's virtual column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub start: usize,
    pub len: usize,
}

impl RowSpan {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// First row past the span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Fraction of this span visible inside `viewport` (0.0..=1.0)
    pub fn visible_ratio(&self, viewport: RowSpan) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        let start = self.start.max(viewport.start);
        let end = self.end().min(viewport.end());
        if end <= start {
            0.0
        } else {
            (end - start) as f32 / self.len as f32
        }
    }
}

/// Mutable carousel state: one row span per point plus the in-focus index.
///
/// `active_index` starts unset and has a single writer, `set_active`, which
/// is driven only by observer callbacks.
#[derive(Debug, Default)]
pub struct CarouselState {
    item_spans: Vec<RowSpan>,
    active_index: Option<usize>,
}

impl CarouselState {
    pub fn new(item_spans: Vec<RowSpan>) -> Self {
        Self {
            item_spans,
            active_index: None,
        }
    }

    pub fn item_spans(&self) -> &[RowSpan] {
        &self.item_spans
    }

    pub fn span(&self, index: usize) -> Option<RowSpan> {
        self.item_spans.get(index).copied()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Sole writer of the active index. Returns true when the value changed.
    pub fn set_active(&mut self, index: usize) -> bool {
        if self.active_index == Some(index) {
            return false;
        }
        self.active_index = Some(index);
        true
    }

    /// Height of the virtual column holding every detail item
    pub fn total_rows(&self) -> usize {
        self.item_spans.last().map(|span| span.end()).unwrap_or(0)
    }
}
