use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_document, use_event_listener, use_event_listener_with_options, use_window,
    UseEventListenerOptions,
};
use wasm_bindgen::JsCast;

use super::hooks::scroll_to_section;
use crate::cv::{CvData, NavLink, SectionId};
use crate::i18n::Lang;
use crate::menu::{self, MenuEvent};
use crate::prefs::Theme;
use crate::scroll::{ScrollFlags, ScrollTracker};

#[component]
pub fn Header(
    cv: &'static CvData,
    lang: ReadSignal<Lang>,
    theme: ReadSignal<Theme>,
    set_lang: WriteSignal<Lang>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    let nav_ref = NodeRef::<html::Nav>::new();
    let hamburger_ref = NodeRef::<html::Div>::new();
    let (menu_open, set_menu_open) = signal(false);
    let (flags, set_flags) = signal(ScrollFlags::default());
    // the last offset is bookkeeping only, nothing renders from it
    let tracker = StoredValue::new(ScrollTracker::default());

    let send = move |event: MenuEvent| {
        set_menu_open.update(|open| *open = menu::next(*open, event));
    };

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            let next = tracker
                .try_update_value(|t| t.sample(offset))
                .unwrap_or_default();
            if flags.get_untracked() != next {
                set_flags.set(next);
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    let _ = use_event_listener(use_document(), ev::mousedown, move |ev| {
        if !menu_open.get_untracked() {
            return;
        }
        let Some(node) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        else {
            return;
        };
        let inside_nav = nav_ref
            .get_untracked()
            .is_some_and(|el| el.contains(Some(&node)));
        let inside_hamburger = hamburger_ref
            .get_untracked()
            .is_some_and(|el| el.contains(Some(&node)));
        send(MenuEvent::PointerDown {
            inside_nav,
            inside_hamburger,
        });
    });

    let go_to = move |ev: ev::MouseEvent, section: SectionId| {
        ev.prevent_default();
        scroll_to_section(section);
        send(MenuEvent::NavLink);
    };

    let toggle_lang = move |_| {
        set_lang.update(|lang| *lang = lang.other());
        send(MenuEvent::LanguageToggle);
    };

    let nav_links = move || cv.copy(lang.get()).nav_links.clone();

    view! {
        <div
            id="header-container"
            class=move || {
                format!(
                    "fixed top-0 left-0 w-full z-50 transition-transform duration-300 {}",
                    if flags.get().hidden { "-translate-y-full" } else { "translate-y-0" },
                )
            }
        >
            <header
                id="header"
                class=move || {
                    format!(
                        "flex justify-center transition-all duration-300 mx-auto px-4 {}",
                        if flags.get().scrolled || menu_open.get() { "pt-2" } else { "pt-4" },
                    )
                }
            >
                <div class=move || {
                    format!(
                        "flex justify-between items-center w-full max-w-3xl px-4 py-2.5 transition-all duration-300 rounded-full shadow-lg shadow-black/5 backdrop-blur-2xl border {}",
                        if theme.get().is_dark() {
                            "bg-slate-900/50 border-white/10"
                        } else {
                            "bg-white/50 border-white/30"
                        },
                    )
                }>
                    <div class="flex flex-1 items-baseline gap-x-6">
                        <a
                            href=SectionId::Hero.anchor()
                            on:click=move |ev| go_to(ev, SectionId::Hero)
                            class="text-lg font-bold text-slate-900 dark:text-white hover:text-brand-accent transition-colors"
                        >
                            {cv.personal.first_name().to_string()}
                        </a>
                        <nav class="hidden md:block">
                            <ol class="flex items-baseline gap-x-6">
                                <For
                                    each=nav_links
                                    key=|link| (link.target, link.text.clone())
                                    children=move |link| {
                                        view! {
                                            <NavItem
                                                link
                                                class="text-sm font-medium tracking-wider text-slate-700 dark:text-gray-300 hover:text-slate-900 dark:hover:text-white transition-colors"
                                                on_click=go_to
                                            />
                                        }
                                    }
                                />
                            </ol>
                        </nav>
                    </div>
                    <div class="flex items-center gap-2 md:gap-3">
                        <button
                            on:click=toggle_lang
                            class="font-semibold text-xs uppercase bg-black/10 dark:bg-black/20 border border-black/10 dark:border-white/10 text-slate-800 dark:text-gray-200 px-2.5 py-1.5 rounded-full"
                        >
                            {move || lang.get().toggle_label()}
                        </button>
                        <button
                            on:click=move |_| set_theme.update(|theme| *theme = theme.toggle())
                            class="w-8 h-8 flex items-center justify-center rounded-full bg-black/10 dark:bg-black/20 text-brand-accent"
                            aria-label="Toggle theme"
                        >
                            <i class=move || theme.get().icon()></i>
                        </button>
                        <div
                            node_ref=hamburger_ref
                            on:click=move |_| send(MenuEvent::Hamburger)
                            class="hamburger md:hidden flex flex-col justify-between w-6 h-5 cursor-pointer z-20 ml-1"
                        >
                            <span class=move || {
                                format!(
                                    "block h-0.5 w-full bg-slate-900 dark:bg-white rounded-full transition-transform duration-300 {}",
                                    if menu_open.get() { "translate-y-2 rotate-45" } else { "" },
                                )
                            }></span>
                            <span class=move || {
                                format!(
                                    "block h-0.5 w-full bg-slate-900 dark:bg-white rounded-full transition-opacity duration-300 {}",
                                    if menu_open.get() { "opacity-0" } else { "opacity-100" },
                                )
                            }></span>
                            <span class=move || {
                                format!(
                                    "block h-0.5 w-full bg-slate-900 dark:bg-white rounded-full transition-transform duration-300 {}",
                                    if menu_open.get() { "-translate-y-2 -rotate-45" } else { "" },
                                )
                            }></span>
                        </div>
                    </div>
                </div>
            </header>
        </div>
        <nav
            node_ref=nav_ref
            class=move || {
                format!(
                    "fixed md:hidden top-0 right-0 h-full w-3/4 max-w-xs p-24 pt-32 shadow-2xl transition-transform duration-300 ease-in-out z-40 bg-white/80 dark:bg-slate-900/80 backdrop-blur-2xl {}",
                    if menu_open.get() { "translate-x-0" } else { "translate-x-full" },
                )
            }
        >
            <ol class="flex flex-col items-start list-none gap-8">
                <For
                    each=nav_links
                    key=|link| (link.target, link.text.clone())
                    children=move |link| {
                        view! {
                            <NavItem
                                link
                                class="text-lg font-medium tracking-wider text-slate-900 dark:text-gray-200 hover:text-brand-accent dark:hover:text-white transition-colors"
                                on_click=go_to
                            />
                        }
                    }
                />
            </ol>
        </nav>
    }
}

#[component]
fn NavItem(
    link: NavLink,
    class: &'static str,
    on_click: impl Fn(ev::MouseEvent, SectionId) + Copy + 'static,
) -> impl IntoView {
    let target = link.target;
    view! {
        <li>
            <a href=target.anchor() on:click=move |ev| on_click(ev, target) class=class>
                {link.text}
            </a>
        </li>
    }
}
