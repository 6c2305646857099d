use std::ops::Range;

/// Number of projects shown before "show more" is used.
pub const PROJECTS_LIMIT: usize = 6;

/// Collapsed/expanded view over a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    limit: usize,
    expanded: bool,
}

impl Pager {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            expanded: false,
        }
    }

    pub fn visible(&self, total: usize) -> usize {
        if self.expanded {
            total
        } else {
            total.min(self.limit)
        }
    }

    /// Indices of the visible items. Collapsing and expanding keep the
    /// shared prefix, so list keys stay stable across toggles.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        0..self.visible(total)
    }

    /// The toggle only exists when there is something to hide.
    pub fn has_toggle(&self, total: usize) -> bool {
        total > self.limit
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Pick the label for the toggle given the (show more, show less) pair.
    pub fn label<'a>(&self, show_more: &'a str, show_less: &'a str) -> &'a str {
        if self.expanded {
            show_less
        } else {
            show_more
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PROJECTS_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourteen_projects() {
        let mut pager = Pager::default();
        assert_eq!(pager.visible(14), 6);
        assert!(pager.has_toggle(14));
        assert_eq!(pager.label("Show More", "Show Less"), "Show More");

        pager.toggle();
        assert_eq!(pager.visible(14), 14);
        assert_eq!(pager.label("Show More", "Show Less"), "Show Less");

        pager.toggle();
        assert_eq!(pager.visible(14), 6);
        assert_eq!(pager.label("Show More", "Show Less"), "Show More");
    }

    #[test]
    fn test_toggle_keeps_shown_indices() {
        let mut pager = Pager::default();
        let collapsed = pager.visible_range(14);
        pager.toggle();
        let expanded = pager.visible_range(14);
        assert_eq!(collapsed, 0..6);
        assert_eq!(expanded, 0..14);
        assert!(collapsed.clone().all(|i| expanded.contains(&i)));

        pager.toggle();
        assert_eq!(pager.visible_range(14), collapsed);
        assert_eq!(Pager::default().visible_range(4), 0..4);
    }

    #[test]
    fn test_short_lists_have_no_toggle() {
        let pager = Pager::default();
        assert_eq!(pager.visible(4), 4);
        assert!(!pager.has_toggle(4));
        assert!(!pager.has_toggle(6));
        assert!(pager.has_toggle(7));
    }
}
