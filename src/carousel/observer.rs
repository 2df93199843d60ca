// Visibility Observation
// Capability interface for watching which detail items are visible, plus a
// scroll-position polling implementation of it

use super::state::RowSpan;

/// Report for one observed target whose visibility bucket changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportEntry {
    /// Index the target was tagged with at registration
    pub index: usize,
    /// Fraction of the target currently visible (0.0..=1.0)
    pub ratio: f32,
    /// Whether any part of the target is inside the viewport
    pub is_intersecting: bool,
}

/// Visibility observation over a set of registered row-span targets.
///
/// `poll` reports only the targets whose threshold bucket changed since the
/// previous poll, in ascending index order. Consecutive polls with an
/// unchanged scroll position therefore report nothing.
pub trait VisibilityObserver {
    /// Register a target tagged with its index in the point list
    fn observe(&mut self, index: usize, span: RowSpan);

    /// Compare every target against `viewport` and report bucket changes
    fn poll(&mut self, viewport: RowSpan) -> Vec<ViewportEntry>;

    /// Drop all registered targets; subsequent polls report nothing
    fn disconnect(&mut self);
}

struct Target {
    index: usize,
    span: RowSpan,
    last_bucket: Option<u8>,
}

/// Polls scroll position against item bounds; stands in for a native
/// intersection facility with the same callback contract.
pub struct PollObserver {
    thresholds: Vec<f32>,
    targets: Vec<Target>,
}

impl PollObserver {
    /// Create an observer firing on the given visibility thresholds
    pub fn new(thresholds: &[f32]) -> Self {
        let mut thresholds = thresholds.to_vec();
        thresholds.sort_by(|a, b| a.total_cmp(b));
        Self {
            thresholds,
            targets: Vec::new(),
        }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

/// Bucket 0 means not intersecting; bucket n means the target is visible and
/// has crossed the first n-1 thresholds
fn bucket_for(thresholds: &[f32], ratio: f32) -> u8 {
    if ratio <= 0.0 {
        return 0;
    }
    let mut bucket = 1u8;
    for threshold in thresholds {
        if ratio >= *threshold {
            bucket += 1;
        }
    }
    bucket
}

impl VisibilityObserver for PollObserver {
    fn observe(&mut self, index: usize, span: RowSpan) {
        self.targets.push(Target {
            index,
            span,
            last_bucket: None,
        });
        // Keep reports in ascending index order regardless of registration order
        self.targets.sort_by_key(|target| target.index);
    }

    fn poll(&mut self, viewport: RowSpan) -> Vec<ViewportEntry> {
        let thresholds = &self.thresholds;
        let mut entries = Vec::new();
        for target in &mut self.targets {
            let ratio = target.span.visible_ratio(viewport);
            let bucket = bucket_for(thresholds, ratio);
            if target.last_bucket != Some(bucket) {
                target.last_bucket = Some(bucket);
                entries.push(ViewportEntry {
                    index: target.index,
                    ratio,
                    is_intersecting: ratio > 0.0,
                });
            }
        }
        entries
    }

    fn disconnect(&mut self) {
        self.targets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer_with_items(count: usize) -> PollObserver {
        let mut observer = PollObserver::new(&[0.25, 0.75]);
        for i in 0..count {
            observer.observe(i, RowSpan::new(i * 12, 10));
        }
        observer
    }

    #[test]
    fn test_first_poll_reports_every_target() {
        let mut observer = observer_with_items(3);
        let entries = observer.poll(RowSpan::new(0, 12));
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].index, 0);
        assert_eq!(entries[0].ratio, 1.0);
        assert!(entries[0].is_intersecting);
        assert!(!entries[2].is_intersecting);
    }

    #[test]
    fn test_unchanged_viewport_reports_nothing() {
        let mut observer = observer_with_items(3);
        observer.poll(RowSpan::new(0, 12));
        let entries = observer.poll(RowSpan::new(0, 12));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_reports_only_bucket_crossings() {
        let mut observer = observer_with_items(2);
        observer.poll(RowSpan::new(0, 12));
        // Item 0 drops from 100% to 80%: still past the 0.75 threshold, so
        // only item 1 (now partially visible) is reported.
        let entries = observer.poll(RowSpan::new(2, 12));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].index, 1);
    }

    #[test]
    fn test_entries_in_ascending_index_order() {
        let mut observer = PollObserver::new(&[0.25, 0.75]);
        observer.observe(2, RowSpan::new(24, 10));
        observer.observe(0, RowSpan::new(0, 10));
        observer.observe(1, RowSpan::new(12, 10));
        let entries = observer.poll(RowSpan::new(0, 40));
        let indices: Vec<usize> = entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_disconnect_stops_reports() {
        let mut observer = observer_with_items(3);
        observer.disconnect();
        assert_eq!(observer.target_count(), 0);
        assert!(observer.poll(RowSpan::new(0, 12)).is_empty());
    }

    #[test]
    fn test_bucket_boundaries() {
        let thresholds = [0.25, 0.75];
        assert_eq!(bucket_for(&thresholds, 0.0), 0);
        assert_eq!(bucket_for(&thresholds, 0.1), 1);
        assert_eq!(bucket_for(&thresholds, 0.25), 2);
        assert_eq!(bucket_for(&thresholds, 0.5), 2);
        assert_eq!(bucket_for(&thresholds, 0.75), 3);
        assert_eq!(bucket_for(&thresholds, 1.0), 3);
    }
}
