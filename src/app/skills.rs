use leptos::{html, prelude::*};

use super::hooks::{fade_up, use_reveal};
use super::section::{Section, GLASS};
use crate::cv::{CvData, SectionId};
use crate::i18n::Lang;
use crate::reveal::RevealOptions;

#[component]
pub fn Skills(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let content = move || &cv.copy(lang.get()).skills_section;
    let title = Signal::derive(move || content().title.clone());

    let core_ref = NodeRef::<html::Div>::new();
    let programming_ref = NodeRef::<html::Div>::new();
    let languages_ref = NodeRef::<html::Div>::new();
    let core_revealed = use_reveal(core_ref, RevealOptions::PANEL);
    let programming_revealed = use_reveal(programming_ref, RevealOptions::PANEL);
    let languages_revealed = use_reveal(languages_ref, RevealOptions::PANEL);

    let panel = move |revealed: Signal<bool>, delay: &'static str| {
        move || {
            format!(
                "p-8 rounded-xl transition-all duration-700 ease-out hover:-translate-y-2 {delay} {GLASS} {}",
                fade_up(revealed.get()),
            )
        }
    };

    let core = &cv.skills.core;

    view! {
        <Section id=SectionId::Skills title>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <div node_ref=core_ref class=panel(core_revealed, "")>
                    <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-6 flex items-center">
                        <i class=format!("{} mr-3 text-brand-accent dark:text-amber-400", core.icon)></i>
                        {move || core.title.get(lang.get()).to_string()}
                    </h3>
                    {core
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <Bar
                                    name=skill.name.clone()
                                    caption=Signal::stored(format!("{}%", skill.level))
                                    value=skill.level
                                    revealed=core_revealed
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=programming_ref class=panel(programming_revealed, "delay-200")>
                    <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-6 flex items-center">
                        <i class="fas fa-laptop-code mr-3 text-brand-accent dark:text-amber-400"></i>
                        {move || content().programming.clone()}
                    </h3>
                    <div class="flex flex-wrap gap-3">
                        {cv
                            .programming_languages
                            .iter()
                            .map(|language| {
                                view! {
                                    <span class=format!(
                                        "text-sm font-medium py-1.5 px-4 rounded-full border {}",
                                        language.category.badge_class(),
                                    )>
                                        {language
                                            .icon()
                                            .map(|icon| view! { <i class=format!("{icon} mr-2 opacity-70")></i> })}
                                        {language.name.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div node_ref=languages_ref class=panel(languages_revealed, "delay-300")>
                    <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-6 flex items-center">
                        <i class="fas fa-language mr-3 text-brand-accent dark:text-amber-400"></i>
                        {move || content().languages.clone()}
                    </h3>
                    {cv
                        .skills
                        .languages
                        .iter()
                        .map(|skill| {
                            view! {
                                <Bar
                                    name=skill.name.clone()
                                    caption=Signal::derive(move || skill.level.get(lang.get()).to_string())
                                    value=skill.value
                                    revealed=languages_revealed
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}

/// Labelled progress bar that fills to `value` percent once revealed.
#[component]
fn Bar(name: String, caption: Signal<String>, value: u8, revealed: Signal<bool>) -> impl IntoView {
    view! {
        <div class="mb-6">
            <div class="flex justify-between mb-2 font-medium text-sm">
                <span class="text-slate-700 dark:text-gray-200">{name}</span>
                <span class="text-brand-accent dark:text-amber-400 font-semibold">
                    {move || caption.get()}
                </span>
            </div>
            <div class="w-full h-2 bg-black/10 dark:bg-black/20 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-amber-500 to-orange-500 rounded-full transition-all duration-[1800ms] ease-out"
                    style=move || format!("width: {}%", if revealed.get() { value } else { 0 })
                ></div>
            </div>
        </div>
    }
}
