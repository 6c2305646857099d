use leptos::{html, prelude::*};

use super::hooks::{fade_up, use_reveal};
use super::section::{Section, GLASS};
use crate::cv::{CvData, Project, SectionId};
use crate::i18n::Lang;
use crate::pager::Pager;
use crate::reveal::{stagger, RevealOptions};

#[component]
pub fn Projects(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let content = move || &cv.copy(lang.get()).projects_section;
    let title = Signal::derive(move || content().title.clone());
    let (pager, set_pager) = signal(Pager::default());
    let total = cv.projects.len();

    view! {
        <Section id=SectionId::Projects title>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                // keyed by index so cards already shown keep their latch
                <For
                    each=move || pager.get().visible_range(total)
                    key=|index| *index
                    children=move |index| {
                        let item = &cv.projects[index];
                        view! { <ProjectCard item index lang /> }
                    }
                />
            </div>
            <Show when=move || pager.get().has_toggle(total)>
                <div class="mt-12 text-center">
                    <button
                        on:click=move |_| set_pager.update(Pager::toggle)
                        class="font-semibold tracking-wider text-sm transition-all duration-300 hover:-translate-y-1 shadow-lg hover:shadow-xl bg-brand-accent text-slate-900 hover:bg-brand-accent-hover shadow-amber-500/20 px-7 py-3.5 rounded-full"
                    >
                        {move || {
                            let content = content();
                            pager.get().label(&content.show_more, &content.show_less).to_string()
                        }}
                    </button>
                </div>
            </Show>
        </Section>
    }
}

#[component]
fn ProjectCard(item: &'static Project, index: usize, lang: Signal<Lang>) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(card_ref, RevealOptions::EARLY);

    view! {
        <div
            node_ref=card_ref
            class=move || format!("w-full h-full transition-all duration-700 ease-out {}", fade_up(revealed.get()))
            style=stagger(index, 50)
        >
            <div class=format!("project-card h-full p-6 rounded-xl flex items-center gap-5 hover:-translate-y-1 transition-all duration-300 {GLASS}")>
                <div class="text-3xl text-brand-accent dark:text-amber-400 flex-shrink-0 w-10 text-center">
                    <i class=item.icon.clone()></i>
                </div>
                <h4 class="font-bold text-base text-slate-800 dark:text-white">
                    {move || item.title.get(lang.get()).to_string()}
                </h4>
            </div>
        </div>
    }
}
