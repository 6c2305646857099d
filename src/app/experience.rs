use leptos::{html, prelude::*};

use super::hooks::use_reveal;
use super::section::{Section, GLASS};
use crate::cv::{CvData, ExperienceItem, SectionId};
use crate::i18n::Lang;
use crate::reveal::RevealOptions;

#[component]
pub fn Experience(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let title = Signal::derive(move || cv.copy(lang.get()).experience_section.title.clone());

    view! {
        <Section id=SectionId::Experience title>
            <div class="relative max-w-3xl mx-auto py-12">
                <div class="absolute w-0.5 h-full bg-slate-300 dark:bg-slate-700/50 left-5 top-0"></div>
                {cv
                    .experience
                    .iter()
                    .map(|item| view! { <TimelineItem item lang /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn TimelineItem(item: &'static ExperienceItem, lang: Signal<Lang>) -> impl IntoView {
    let item_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(item_ref, RevealOptions::TIMELINE);

    view! {
        <div
            node_ref=item_ref
            class=move || {
                format!(
                    "relative pl-16 mb-12 transition-all duration-700 ease-out {}",
                    if revealed.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-8" },
                )
            }
        >
            <div class="absolute w-4 h-4 rounded-full bg-brand-accent ring-4 ring-white/80 dark:ring-[#0f172a] left-3 top-2 z-10 shadow-lg"></div>
            <div class=format!("p-6 rounded-xl relative hover:shadow-2xl transition-all duration-300 {GLASS}")>
                <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-1">
                    {move || item.role.get(lang.get()).to_string()}
                </h3>
                <h4 class="text-brand-accent dark:text-amber-400 mb-3 font-semibold text-sm">
                    {item.company.clone()}
                    <span class="text-slate-600 dark:text-slate-400 ml-2 text-xs font-normal">
                        {format!("({})", item.period)}
                    </span>
                </h4>
                <ul class="list-none p-0 mb-4">
                    {item
                        .tasks
                        .iter()
                        .map(|task| {
                            view! {
                                <li class="relative pl-6 mb-2 text-slate-700 dark:text-slate-300 text-sm leading-relaxed">
                                    <span class="absolute left-1 top-1.5 w-1.5 h-1.5 bg-brand-accent rounded-full"></span>
                                    {task.clone()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="mt-4 pt-4 border-t border-black/10 dark:border-white/10 flex flex-wrap gap-2">
                    {item
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="text-xs font-medium bg-amber-500/10 dark:bg-brand-accent/20 text-amber-700 dark:text-brand-accent py-1 px-3 rounded-full">
                                    {skill.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
