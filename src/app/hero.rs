use leptos::prelude::*;

use super::hooks::scroll_to_section;
use crate::cv::{CvData, SectionId};
use crate::i18n::Lang;

/// Animation delay of the Nth letter of the name, in seconds.
fn letter_delay(index: usize) -> String {
    format!("animation-delay: {:.2}s", 0.2 + index as f64 * 0.03)
}

#[component]
pub fn Hero(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let hero = move || &cv.copy(lang.get()).hero;

    let letters = move || {
        hero()
            .name
            .chars()
            .enumerate()
            .map(|(i, c)| {
                // keep spaces from collapsing inside inline-block spans
                let c = if c == ' ' { '\u{a0}' } else { c };
                view! {
                    <span
                        class="inline-block animate-[letter-flip-in_0.8s_cubic-bezier(0.2,0.8,0.2,1)_backwards]"
                        style=letter_delay(i)
                    >
                        {c.to_string()}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <section
            id=SectionId::Hero.as_str()
            class="hero min-h-screen flex items-center justify-center relative overflow-hidden p-8 text-center [perspective:1000px]"
        >
            <div class="hero-content max-w-4xl relative z-10 flex flex-col items-center">
                <div class="hero-text max-w-3xl">
                    <p class="uppercase tracking-[3px] text-brand-accent mb-3 text-sm font-semibold animate-[hero-subtitle-in_0.8s_cubic-bezier(0.2,0.8,0.2,1)_0.2s_backwards]">
                        {move || hero().subtitle.clone()}
                    </p>
                    <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl mb-4 text-slate-900 dark:text-white font-extrabold leading-tight text-glow [transform-style:preserve-3d]">
                        {letters}
                    </h1>
                    <p class="text-base md:text-lg mb-8 text-slate-700 dark:text-slate-300 max-w-xl mx-auto leading-relaxed animate-[hero-desc-in_0.8s_cubic-bezier(0.2,0.8,0.2,1)_1.4s_backwards]">
                        {move || hero().description.clone()}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 mt-4 justify-center">
                        <a
                            href=SectionId::Experience.anchor()
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_section(SectionId::Experience);
                            }
                            class="inline-flex items-center justify-center px-7 py-3.5 rounded-full font-semibold tracking-wider text-sm transition-all duration-300 hover:-translate-y-1 shadow-lg bg-brand-accent text-slate-900 hover:bg-brand-accent-hover shadow-amber-500/20 animate-[hero-button-in_0.8s_cubic-bezier(0.2,0.8,0.2,1)_1.7s_backwards]"
                        >
                            <i class="fas fa-briefcase mr-2"></i>
                            <span>{move || hero().cta_experience.clone()}</span>
                        </a>
                        <a
                            href=format!("mailto:{}", cv.personal.email)
                            class="inline-flex items-center justify-center px-7 py-3.5 rounded-full font-semibold tracking-wider text-sm transition-all duration-300 hover:-translate-y-1 bg-black/5 text-slate-800 border border-black/10 hover:bg-black/10 backdrop-blur-md dark:bg-white/10 dark:text-white dark:border-white/20 dark:hover:bg-white/20 animate-[hero-button-in_0.8s_cubic-bezier(0.2,0.8,0.2,1)_1.9s_backwards]"
                        >
                            <i class="fas fa-paper-plane mr-2"></i>
                            <span>{move || hero().cta_email.clone()}</span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_delay() {
        assert_eq!(letter_delay(0), "animation-delay: 0.20s");
        assert_eq!(letter_delay(10), "animation-delay: 0.50s");
    }
}
