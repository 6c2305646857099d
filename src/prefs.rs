//! Persisted user preferences: language and colour theme.
//!
//! Values live in browser local storage as plain strings. Anything missing
//! or unrecognised falls back to the defaults (`en`, light theme); nothing
//! here fails. The document side effects only do work in the browser and
//! are no-ops during server rendering.

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

pub const LANG_KEY: &str = "preferredLanguage";
pub const THEME_KEY: &str = "theme";

/// Class toggled on `<html>` and `<body>` while the dark palette is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_stored(raw: &str) -> Theme {
        match raw.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-sun text-sm",
            Theme::Dark => "fas fa-moon text-sm",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub lang: Lang,
    pub theme: Theme,
}

impl Preferences {
    pub fn from_stored(lang: &str, theme: &str) -> Self {
        Self {
            lang: Lang::from_stored(lang),
            theme: Theme::from_stored(theme),
        }
    }
}

/// Keep the document's declared language in sync with the active one.
pub fn apply_lang(lang: Lang) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if root.set_attribute("lang", lang.code()).is_err() {
            log::warn!("couldn't set document language to {}", lang.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}

/// Add or remove the dark marker class on `<html>` and `<body>`.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let targets = [doc.document_element(), doc.body().map(Into::into)];
        for el in targets.into_iter().flatten() {
            if el
                .class_list()
                .toggle_with_force(DARK_CLASS, theme.is_dark())
                .is_err()
            {
                log::warn!("couldn't toggle {DARK_CLASS} class");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::from_stored(""), Theme::Light);
        assert_eq!(Theme::from_stored("purple"), Theme::Light);
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_preferences_round_trip() {
        // What the root shell writes is what it reads back on the next load
        let written = Preferences {
            lang: Lang::Nl,
            theme: Theme::Dark,
        };
        let read = Preferences::from_stored(written.lang.code(), written.theme.as_str());
        assert_eq!(read, written);

        let read = Preferences::from_stored("fr", "");
        assert_eq!(read.lang, Lang::En);
        assert_eq!(read.theme, Theme::Light);
    }
}
