/// Things that can happen to the mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Hamburger,
    NavLink,
    LanguageToggle,
    PointerDown {
        inside_nav: bool,
        inside_hamburger: bool,
    },
}

/// Next open/closed state of the mobile menu.
pub fn next(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Hamburger => !open,
        MenuEvent::NavLink | MenuEvent::LanguageToggle => false,
        // the hamburger handles its own clicks
        MenuEvent::PointerDown {
            inside_nav,
            inside_hamburger,
        } => open && (inside_nav || inside_hamburger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamburger_flips() {
        assert!(next(false, MenuEvent::Hamburger));
        assert!(!next(true, MenuEvent::Hamburger));
    }

    #[test]
    fn test_navigation_and_language_close() {
        for event in [MenuEvent::NavLink, MenuEvent::LanguageToggle] {
            assert!(!next(true, event));
            assert!(!next(false, event));
        }
    }

    #[test]
    fn test_outside_pointer_down_closes() {
        let outside = MenuEvent::PointerDown {
            inside_nav: false,
            inside_hamburger: false,
        };
        assert!(!next(true, outside));
        assert!(!next(false, outside));

        let in_nav = MenuEvent::PointerDown {
            inside_nav: true,
            inside_hamburger: false,
        };
        assert!(next(true, in_nav));

        let on_hamburger = MenuEvent::PointerDown {
            inside_nav: false,
            inside_hamburger: true,
        };
        assert!(next(true, on_hamburger));
        assert!(!next(false, on_hamburger));
    }
}
