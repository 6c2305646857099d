use leptos::{html, prelude::*};

use super::hooks::{fade_up, use_reveal};
use super::section::{Section, GLASS};
use crate::cv::{CvData, DevelopmentItem, SectionId};
use crate::i18n::Lang;
use crate::reveal::{stagger, RevealOptions};

#[component]
pub fn Development(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let title = Signal::derive(move || cv.copy(lang.get()).development_section.title.clone());

    view! {
        <Section id=SectionId::Development title>
            <div class="max-w-4xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-6">
                {cv
                    .development
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! { <DevelopmentCard item index lang /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn DevelopmentCard(item: &'static DevelopmentItem, index: usize, lang: Signal<Lang>) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(card_ref, RevealOptions::EARLY);

    let tools = item.tools.as_ref().map(|tools| {
        view! {
            <div class="mt-4 flex flex-wrap gap-2">
                {tools
                    .iter()
                    .map(|tool| {
                        view! {
                            <span class="text-xs font-medium bg-amber-500/10 dark:bg-brand-accent/20 text-amber-700 dark:text-brand-accent py-1 px-3 rounded-full">
                                {tool.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div
            node_ref=card_ref
            class=move || format!("w-full h-full transition-all duration-700 ease-out {}", fade_up(revealed.get()))
            style=stagger(index, 100)
        >
            <div class=format!("h-full p-6 rounded-xl flex items-start gap-5 {GLASS}")>
                <div class="text-2xl text-brand-accent dark:text-amber-400 mt-1 flex-shrink-0">
                    <i class=item.icon.clone()></i>
                </div>
                <div>
                    <h3 class="text-lg font-bold text-slate-900 dark:text-white">
                        {move || item.title.get(lang.get()).to_string()}
                    </h3>
                    <h4 class="text-slate-700 dark:text-slate-300 mb-1 font-medium">
                        {item.issuer.clone()}
                        <span class="text-sm font-normal text-slate-600 dark:text-slate-400 ml-2">
                            {item.period.clone()}
                        </span>
                    </h4>
                    <p class="text-sm text-slate-700 dark:text-slate-300 leading-relaxed">
                        {move || item.description.get(lang.get()).to_string()}
                    </p>
                    {tools}
                </div>
            </div>
        </div>
    }
}
