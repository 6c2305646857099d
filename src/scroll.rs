//! Scroll-driven header state and in-page anchor offsets.

/// Past this offset the header compresses its padding.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Scrolling down past this offset hides the header.
pub const HIDE_THRESHOLD: f64 = 75.0;
/// Used when the header can't be measured yet.
pub const DEFAULT_HEADER_HEIGHT: f64 = 75.0;
/// Gap left between the header and the top of a section after a jump.
pub const ANCHOR_GUTTER: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Derive header flags from the previous and the new scroll offset.
///
/// Returns the flags and the offset to remember for the next sample, which
/// is clamped at zero for platforms reporting negative overscroll.
pub fn reduce(previous: f64, offset: f64) -> (ScrollFlags, f64) {
    let flags = ScrollFlags {
        scrolled: offset > SCROLLED_THRESHOLD,
        hidden: offset > previous && offset > HIDE_THRESHOLD,
    };
    (flags, offset.max(0.0))
}

/// Holds the last sampled offset between scroll events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn sample(&mut self, offset: f64) -> ScrollFlags {
        let (flags, last) = reduce(self.last_offset, offset);
        self.last_offset = last;
        flags
    }
}

/// Document offset to scroll to so that a section lands just below the
/// fixed header.
///
/// `element_top` is the target's top relative to the viewport, `page_y` the
/// current scroll position. An unmeasured (or zero) header height uses
/// [`DEFAULT_HEADER_HEIGHT`].
pub fn anchor_offset(element_top: f64, page_y: f64, header_height: Option<f64>) -> f64 {
    let header = header_height
        .filter(|h| *h > 0.0)
        .unwrap_or(DEFAULT_HEADER_HEIGHT);
    element_top + page_y - header - ANCHOR_GUTTER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(offsets: &[f64]) -> Vec<ScrollFlags> {
        let mut tracker = ScrollTracker::default();
        offsets.iter().map(|o| tracker.sample(*o)).collect()
    }

    #[test]
    fn test_scrolled_without_hiding() {
        let flags = run(&[0.0, 20.0, 60.0, 40.0]);
        let scrolled = flags.iter().map(|f| f.scrolled).collect::<Vec<_>>();
        assert_eq!(scrolled, [false, false, true, false]);
        assert!(flags.iter().all(|f| !f.hidden));
    }

    #[test]
    fn test_hides_when_scrolling_down() {
        let flags = run(&[0.0, 80.0, 160.0]);
        let hidden = flags.iter().map(|f| f.hidden).collect::<Vec<_>>();
        assert_eq!(hidden, [false, true, true]);
        assert!(flags[1].scrolled);
    }

    #[test]
    fn test_reveals_when_scrolling_up() {
        let flags = run(&[200.0, 150.0]);
        assert!(flags[0].hidden);
        assert!(!flags[1].hidden);
        assert!(flags[1].scrolled);
    }

    #[test]
    fn test_negative_offset_is_clamped() {
        assert_eq!(reduce(10.0, -30.0).1, 0.0);

        let mut tracker = ScrollTracker::default();
        tracker.sample(-30.0);

        // Coming back from overscroll counts as moving down from zero
        let flags = tracker.sample(90.0);
        assert!(flags.hidden);
    }

    #[test]
    fn test_reduce_matches_tracker() {
        let (flags, last) = reduce(100.0, 120.0);
        assert_eq!(
            flags,
            ScrollFlags {
                scrolled: true,
                hidden: true
            }
        );
        assert_eq!(last, 120.0);
    }

    #[test]
    fn test_anchor_offset() {
        assert_eq!(anchor_offset(400.0, 1000.0, Some(60.0)), 1325.0);
        assert_eq!(anchor_offset(400.0, 1000.0, None), 1310.0);
        assert_eq!(anchor_offset(400.0, 1000.0, Some(0.0)), 1310.0);
    }
}
