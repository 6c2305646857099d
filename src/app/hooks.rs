use leptos::prelude::*;
use leptos_use::{
    core::IntoElementsMaybeSignal, use_intersection_observer_with_options,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};
use wasm_bindgen::JsCast;

use crate::cv::SectionId;
use crate::reveal::{Reveal, RevealOptions};
use crate::scroll::anchor_offset;

/// Latch that flips to `true` the first time `target` scrolls into view.
///
/// The observer is stopped once the latch fires and released when the
/// owning component unmounts. An unset node ref never reveals.
pub fn use_reveal<Els, M>(target: Els, options: RevealOptions) -> Signal<bool>
where
    Els: IntoElementsMaybeSignal<web_sys::Element, M> + 'static,
    M: 'static,
{
    let (state, set_state) = signal(Reveal::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            set_state.update(|state| *state = state.observe(intersecting));
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin.to_string()),
    );

    Effect::new(move |_| {
        if state.get().is_revealed() {
            stop();
        }
    });

    Signal::derive(move || state.get().is_revealed())
}

/// Fade and slide classes for an element guarded by [`use_reveal`].
pub fn fade_up(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

/// Smoothly scroll so `section` sits just below the fixed header.
pub fn scroll_to_section(section: SectionId) {
    let document = document();
    let Some(target) = document.get_element_by_id(section.as_str()) else {
        log::debug!("no element for {}", section.anchor());
        return;
    };
    let header_height = document
        .get_element_by_id("header-container")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.offset_height() as f64);
    let window = window();
    let top = anchor_offset(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or_default(),
        header_height,
    );

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::html;

    #[test]
    fn test_unmounted_target_stays_hidden() {
        let owner = Owner::new();
        owner.with(|| {
            let target = NodeRef::<html::Div>::new();
            let revealed = use_reveal(target, RevealOptions::TIMELINE);
            assert!(!revealed.get_untracked());
        });
    }

    #[test]
    fn test_fade_up() {
        assert_eq!(fade_up(true), "opacity-100 translate-y-0");
        assert_eq!(fade_up(false), "opacity-0 translate-y-10");
    }
}
