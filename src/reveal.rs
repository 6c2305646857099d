/// One-shot entrance latch. Once an element has been seen it stays revealed,
/// even after it scrolls out of view again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Unseen,
    Revealed,
}

impl Reveal {
    pub fn observe(self, intersecting: bool) -> Reveal {
        match self {
            Reveal::Unseen if intersecting => Reveal::Revealed,
            state => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Reveal::Revealed
    }
}

/// Intersection settings for a latch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    /// Section headings and cards that should start animating early.
    pub const EARLY: RevealOptions = RevealOptions {
        threshold: 0.1,
        root_margin: "0px",
    };
    /// Panels and tiles that should be partly on screen first.
    pub const PANEL: RevealOptions = RevealOptions {
        threshold: 0.2,
        root_margin: "0px",
    };
    pub const TIMELINE: RevealOptions = RevealOptions {
        threshold: 0.2,
        root_margin: "0px 0px -50px 0px",
    };
}

/// Inline style delaying the Nth item of a list so items cascade in.
pub fn stagger(index: usize, step_ms: usize) -> String {
    format!("transition-delay: {}ms", index * step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_intersecting_stays_unseen() {
        let state = [false, false, false]
            .into_iter()
            .fold(Reveal::default(), Reveal::observe);
        assert_eq!(state, Reveal::Unseen);
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_latch_does_not_flap() {
        let mut state = Reveal::default();
        let mut seen = Vec::new();
        for intersecting in [false, true, false, false, true, false] {
            state = state.observe(intersecting);
            seen.push(state.is_revealed());
        }
        assert_eq!(seen, [false, true, true, true, true, true]);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 50), "transition-delay: 0ms");
        assert_eq!(stagger(3, 100), "transition-delay: 300ms");
    }
}
