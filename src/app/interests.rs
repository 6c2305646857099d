use leptos::{html, prelude::*};

use super::hooks::use_reveal;
use super::section::{Section, GLASS};
use crate::cv::{CvData, Interest, SectionId};
use crate::i18n::Lang;
use crate::reveal::{stagger, RevealOptions};

#[component]
pub fn Interests(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let title = Signal::derive(move || cv.copy(lang.get()).interests_section.title.clone());

    view! {
        <Section id=SectionId::Interests title>
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-6 gap-6 max-w-4xl mx-auto">
                {cv
                    .interests
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! { <InterestTile item index lang /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn InterestTile(item: &'static Interest, index: usize, lang: Signal<Lang>) -> impl IntoView {
    let tile_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(tile_ref, RevealOptions::PANEL);

    view! {
        <div
            node_ref=tile_ref
            class=move || {
                format!(
                    "transition-all duration-500 ease-out {}",
                    if revealed.get() { "opacity-100 scale-100" } else { "opacity-0 scale-90" },
                )
            }
            style=stagger(index, 100)
        >
            <div class=format!("group text-center p-6 rounded-xl transition-all duration-300 hover:-translate-y-2 {GLASS}")>
                <i class=format!(
                    "{} {} text-4xl mb-3 block transition-transform duration-300 group-hover:scale-110 group-hover:rotate-6",
                    item.icon,
                    item.color,
                )></i>
                <h4 class="text-sm font-semibold text-slate-800 dark:text-gray-200 transition-colors duration-300 group-hover:text-brand-accent">
                    {move || item.name.get(lang.get()).to_string()}
                </h4>
            </div>
        </div>
    }
}
