mod about;
mod contact;
mod development;
mod education;
mod experience;
mod header;
mod hero;
mod hooks;
mod interests;
mod projects;
mod section;
mod skills;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::cv::{CvData, CV};
use crate::i18n::Lang;
#[cfg(feature = "hydrate")]
use crate::prefs::{apply_lang, apply_theme, Preferences, LANG_KEY, THEME_KEY};
use crate::prefs::Theme;

use about::About;
use contact::Contact;
use development::Development;
use education::Education;
use experience::Experience;
use header::Header;
use hero::Hero;
use interests::Interests;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/cv-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-slate-50 text-slate-800 dark:bg-[#0f172a] dark:text-slate-300">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let cv: &'static CvData = &CV;
    let (lang, set_lang) = signal(Lang::default());
    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored_lang, set_stored_lang, _) =
            use_local_storage::<String, FromToStringCodec>(LANG_KEY);
        let (stored_theme, set_stored_theme, _) =
            use_local_storage::<String, FromToStringCodec>(THEME_KEY);
        // persisting waits for the stored values so defaults never overwrite them
        let (loaded, set_loaded) = signal(false);

        Effect::watch(
            || (),
            move |_, _, _| {
                let prefs = Preferences::from_stored(
                    &stored_lang.get_untracked(),
                    &stored_theme.get_untracked(),
                );
                log::debug!("restored preferences {prefs:?}");
                set_lang.set(prefs.lang);
                set_theme.set(prefs.theme);
                set_loaded.set(true);
            },
            true,
        );

        Effect::new(move |_| {
            let lang = lang.get();
            if loaded.get() {
                set_stored_lang.set(lang.code().to_string());
                apply_lang(lang);
            }
        });

        Effect::new(move |_| {
            let theme = theme.get();
            if loaded.get() {
                set_stored_theme.set(theme.as_str().to_string());
                apply_theme(theme);
            }
        });
    }

    view! {
        <Title text=cv.personal.name.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=path!("/")
                    view=move || {
                        view! { <Page cv lang theme set_lang set_theme /> }
                    }
                />
            </Routes>
        </Router>
    }
}

/// The whole résumé. Every section reads the active language from `lang`.
#[component]
fn Page(
    cv: &'static CvData,
    lang: ReadSignal<Lang>,
    theme: ReadSignal<Theme>,
    set_lang: WriteSignal<Lang>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    view! {
        <Background />
        <Header cv lang theme set_lang set_theme />
        <main class="relative z-10">
            <Hero cv lang />
            <About cv lang />
            <Experience cv lang />
            <Projects cv lang />
            <Skills cv lang />
            <Education cv lang />
            <Development cv lang />
            <Interests cv lang />
            <Contact cv lang />
        </main>
        <Footer cv lang />
    }
}

#[component]
fn Background() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="blob absolute -top-32 -left-32 w-96 h-96 rounded-full bg-amber-300/30 dark:bg-amber-500/10 blur-3xl"></div>
            <div class="blob blob-delay-2 absolute top-1/3 -right-24 w-[28rem] h-[28rem] rounded-full bg-orange-300/30 dark:bg-orange-500/10 blur-3xl"></div>
            <div class="blob blob-delay-4 absolute -bottom-40 left-1/4 w-[30rem] h-[30rem] rounded-full bg-sky-300/20 dark:bg-sky-500/10 blur-3xl"></div>
            <div class="blob blob-delay-6 absolute bottom-1/4 right-1/3 w-80 h-80 rounded-full bg-rose-300/20 dark:bg-rose-500/10 blur-3xl"></div>
        </div>
    }
}

#[component]
fn Footer(cv: &'static CvData, #[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let year = chrono::Utc::now().year();
    view! {
        <footer class="relative z-10 py-8 text-center text-sm text-slate-600 dark:text-slate-400 border-t border-black/5 dark:border-white/10">
            <p>
                {move || {
                    let copy = cv.copy(lang.get());
                    format!("© {year} {}. {}", copy.hero.name, copy.footer.rights)
                }}
            </p>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(lang: Lang) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let (lang, set_lang) = signal(lang);
            let (theme, set_theme) = signal(Theme::default());
            let cv: &'static CvData = &CV;
            view! { <Page cv lang theme set_lang set_theme /> }.to_html()
        })
    }

    #[test]
    fn test_every_nav_target_rendered_once() {
        let html = render(Lang::En);
        for link in &CV.en.nav_links {
            let id = format!("id=\"{}\"", link.target.as_str());
            assert_eq!(html.matches(&id).count(), 1, "{id}");
        }
        assert_eq!(html.matches("id=\"hero\"").count(), 1);
    }

    #[test]
    fn test_dutch_interests_in_order() {
        let html = render(Lang::Nl);
        let mut from = 0;
        for name in ["Tennis", "Fitness", "Fietsen", "Reizen", "Lezen", "Theater"] {
            let at = html[from..]
                .find(name)
                .unwrap_or_else(|| panic!("{name} missing after offset {from}"));
            from += at + name.len();
        }
    }

    #[test]
    fn test_projects_collapsed_by_default() {
        let html = render(Lang::En);
        assert_eq!(html.matches("project-card").count(), 6);
        assert!(html.contains("Show More"));

        let html = render(Lang::Nl);
        assert!(html.contains("Meer weergeven"));
    }

    #[test]
    fn test_contact_follows_language() {
        let html = render(Lang::Nl);
        assert!(html.contains(&CV.nl.contact_section.linkedin_profile));
        assert!(html.contains(&format!("mailto:{}", CV.personal.email)));
    }

    #[test]
    fn test_footer_has_year_and_rights() {
        let html = render(Lang::En);
        let year = chrono::Utc::now().year().to_string();
        assert!(html.contains(&year));
        assert!(html.contains(&CV.en.footer.rights));
    }

    #[test]
    fn test_footer_uses_display_name() {
        let html = render(Lang::Nl);
        let year = chrono::Utc::now().year();
        let line = format!("© {year} {}. {}", CV.nl.hero.name, CV.nl.footer.rights);
        assert!(html.contains(&line), "{line}");
        assert!(!html.contains(&format!("© {year} {}", CV.personal.name)));
    }
}
