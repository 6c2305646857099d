use leptos::{either::Either, html, prelude::*};

use super::hooks::{fade_up, use_reveal};
use super::section::GLASS;
use crate::cv::{CvData, SectionId, Span};
use crate::i18n::Lang;
use crate::reveal::RevealOptions;

#[component]
pub fn About(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(content_ref, RevealOptions::PANEL);
    let about = move || &cv.copy(lang.get()).about;

    let description = move || {
        about()
            .description
            .iter()
            .map(|span| match span {
                Span::Text(text) => Either::Left(text.clone()),
                Span::Emphasis(text) => Either::Right(view! {
                    <strong class="font-semibold text-brand-accent dark:text-amber-400">
                        {text.clone()}
                    </strong>
                }),
            })
            .collect_view()
    };

    let highlights = move || {
        about()
            .highlights
            .iter()
            .map(|highlight| {
                view! {
                    <div class="px-5 py-2.5 rounded-full text-sm font-medium flex items-center transition-all duration-300 bg-black/5 border border-black/10 text-slate-700 dark:bg-slate-700/50 dark:border-slate-600 dark:text-amber-300 hover:shadow-lg hover:-translate-y-1">
                        <i class="fas fa-check-circle text-brand-accent mr-2.5"></i>
                        {highlight.clone()}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section id=SectionId::About.as_str() class="py-28 px-4 sm:px-6 lg:px-8 relative">
            <div class="container mx-auto max-w-4xl flex flex-col items-center">
                <h2 class=move || {
                    format!(
                        "relative text-4xl md:text-5xl font-extrabold mb-20 text-center text-slate-900 dark:text-white pb-4 transition-all duration-700 ease-out text-glow {}",
                        if revealed.get() { "opacity-100" } else { "opacity-0" },
                    )
                }>
                    {move || about().title.clone()}
                    <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-20 h-1.5 bg-brand-accent rounded-full"></span>
                </h2>
                <div
                    node_ref=content_ref
                    class=move || {
                        format!("transition-all duration-1000 ease-out w-full {}", fade_up(revealed.get()))
                    }
                >
                    <div class=format!("w-full p-8 md:p-12 rounded-2xl {GLASS}")>
                        <span class="text-sm font-semibold text-brand-accent dark:text-amber-400 uppercase tracking-widest mb-6 inline-block">
                            {move || about().overview.clone()}
                        </span>
                        <p class="text-slate-700 dark:text-slate-300 text-base md:text-lg leading-relaxed mb-10">
                            {description}
                        </p>
                        <div class="flex flex-wrap gap-4 justify-center md:justify-start">
                            {highlights}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
