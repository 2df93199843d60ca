// Smooth Scrolling
// Fire-and-forget scroll animation advanced by event-loop ticks

/// Scroll position of the detail viewport with an optional animation target.
///
/// Nothing awaits the animation; each tick moves the offset an ease-out step
/// toward the target and the visibility observer re-synchronizes state as the
/// position changes.
#[derive(Debug, Default)]
pub struct ScrollPosition {
    offset: usize,
    target: Option<usize>,
}

impl ScrollPosition {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Begin a smooth scroll toward `target`, replacing any in-flight animation
    pub fn animate_to(&mut self, target: usize) {
        if target == self.offset {
            self.target = None;
        } else {
            self.target = Some(target);
        }
    }

    /// Manual scroll by `delta` rows, clamped to `max`; cancels any animation
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        self.target = None;
        self.offset = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize).min(max)
        };
    }

    /// Advance one tick toward the target. Returns true if the offset moved.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        let step = (distance / 4).max(1);
        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        if self.offset == target {
            self.target = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_settles_on_target() {
        let mut scroll = ScrollPosition::default();
        scroll.animate_to(24);
        let mut steps = 0;
        while scroll.step() {
            steps += 1;
            assert!(steps < 100, "animation did not settle");
        }
        assert_eq!(scroll.offset(), 24);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_animation_moves_backwards() {
        let mut scroll = ScrollPosition::default();
        scroll.scroll_by(30, 100);
        scroll.animate_to(6);
        while scroll.step() {}
        assert_eq!(scroll.offset(), 6);
    }

    #[test]
    fn test_animate_to_current_offset_is_noop() {
        let mut scroll = ScrollPosition::default();
        scroll.animate_to(0);
        assert!(!scroll.is_animating());
        assert!(!scroll.step());
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut scroll = ScrollPosition::default();
        scroll.animate_to(40);
        scroll.scroll_by(2, 100);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 2);
    }

    #[test]
    fn test_manual_scroll_clamps() {
        let mut scroll = ScrollPosition::default();
        scroll.scroll_by(500, 10);
        assert_eq!(scroll.offset(), 10);
        scroll.scroll_by(-500, 10);
        assert_eq!(scroll.offset(), 0);
    }
}
