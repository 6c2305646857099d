use leptos::{html, prelude::*};

use super::hooks::use_reveal;
use crate::cv::SectionId;
use crate::reveal::RevealOptions;

/// Card surface shared by the section bodies.
pub const GLASS: &str = "bg-white/50 dark:bg-slate-800/50 backdrop-blur-2xl border border-white/20 dark:border-slate-700 shadow-xl shadow-black/10";

/// Standard section frame: anchor id, heading with underline, body.
#[component]
pub fn Section(
    id: SectionId,
    title: Signal<String>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealOptions::EARLY);

    view! {
        <section
            id=id.as_str()
            node_ref=section_ref
            class=format!("py-28 px-4 sm:px-6 lg:px-8 relative overflow-hidden {class}")
        >
            <div class="container mx-auto">
                <h2 class=move || {
                    format!(
                        "relative text-4xl md:text-5xl font-extrabold mb-20 text-center text-slate-900 dark:text-white pb-4 transition-all duration-700 ease-out text-glow {}",
                        if revealed.get() {
                            "opacity-100 translate-y-0"
                        } else {
                            "opacity-0 translate-y-5"
                        },
                    )
                }>
                    {move || title.get()}
                    <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-20 h-1.5 bg-brand-accent rounded-full"></span>
                </h2>
                {children()}
            </div>
        </section>
    }
}
