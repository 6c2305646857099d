use leptos::{html, prelude::*};

use super::hooks::{fade_up, use_reveal};
use super::section::{Section, GLASS};
use crate::cv::{CvData, EducationItem, SectionId};
use crate::i18n::Lang;
use crate::reveal::{stagger, RevealOptions};

#[component]
pub fn Education(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let title = Signal::derive(move || cv.copy(lang.get()).education_section.title.clone());

    view! {
        <Section id=SectionId::Education title>
            <div class="max-w-3xl mx-auto flex flex-col items-center gap-6">
                {cv
                    .education
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! { <EducationCard item index lang /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn EducationCard(item: &'static EducationItem, index: usize, lang: Signal<Lang>) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(card_ref, RevealOptions::PANEL);

    view! {
        <div
            node_ref=card_ref
            class=move || format!("w-full transition-all duration-700 ease-out {}", fade_up(revealed.get()))
            style=stagger(index, 100)
        >
            <div class=format!("p-6 rounded-xl flex items-start gap-5 w-full {GLASS}")>
                <div class="text-2xl text-brand-accent dark:text-amber-400 mt-1 flex-shrink-0">
                    <i class=item.icon.clone()></i>
                </div>
                <div>
                    <h3 class="text-lg font-bold text-slate-900 dark:text-white">
                        {move || item.degree.get(lang.get()).to_string()}
                    </h3>
                    <h4 class="text-slate-700 dark:text-slate-300 mb-1 font-medium">
                        {item.institution.clone()}
                    </h4>
                    <span class="text-sm text-slate-600 dark:text-slate-400">{item.period.clone()}</span>
                </div>
            </div>
        </div>
    }
}
