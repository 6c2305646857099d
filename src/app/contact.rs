use leptos::{html, prelude::*};

use super::hooks::{fade_up, use_reveal};
use super::section::{Section, GLASS};
use crate::cv::{CvData, SectionId};
use crate::i18n::Lang;
use crate::reveal::RevealOptions;

const ICON: &str = "text-xl text-brand-accent mb-3 w-14 h-14 flex items-center justify-center rounded-full bg-black/5 dark:bg-slate-700/50 border border-black/10 dark:border-slate-600";
const ITEM: &str = "group flex flex-col items-center transition-transform duration-300 hover:-translate-y-1";
const LABEL: &str = "font-medium text-slate-800 dark:text-gray-200 group-hover:text-brand-accent dark:group-hover:text-amber-400 transition-colors duration-300";

#[component]
pub fn Contact(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let content = move || &cv.copy(lang.get()).contact_section;
    let title = Signal::derive(move || content().title.clone());
    let container_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container_ref, RevealOptions::PANEL);
    let personal = &cv.personal;

    view! {
        <Section id=SectionId::Contact title>
            <div
                node_ref=container_ref
                class=move || {
                    format!(
                        "max-w-3xl mx-auto text-center p-8 md:p-12 rounded-xl relative transition-all duration-1000 ease-out {GLASS} {}",
                        fade_up(revealed.get()),
                    )
                }
            >
                <p class="mb-8 text-slate-700 dark:text-slate-300 max-w-lg mx-auto">
                    {move || content().description.clone()}
                </p>
                <div class="flex flex-col md:flex-row justify-center gap-8 mb-10 flex-wrap">
                    <a href=format!("tel:{}", personal.phone) class=ITEM>
                        <i class=format!("fas fa-mobile-alt {ICON}")></i>
                        <span class=LABEL>{personal.phone.clone()}</span>
                    </a>
                    <a href=format!("mailto:{}", personal.email) class=ITEM>
                        <i class=format!("far fa-envelope {ICON}")></i>
                        <span class=LABEL>{personal.email.clone()}</span>
                    </a>
                    <a
                        href=personal.linkedin.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class=ITEM
                    >
                        <i class=format!("fab fa-linkedin-in {ICON}")></i>
                        <span class=LABEL>{move || content().linkedin_profile.clone()}</span>
                    </a>
                </div>
            </div>
        </Section>
    }
}
