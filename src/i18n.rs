use serde::{Deserialize, Serialize};

/// The two languages the site is written in. `En` is the first supported
/// code and the fallback for anything unrecognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Nl,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Nl];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Nl => "nl",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Parse a persisted value. Missing or garbage values fall back to the
    /// default language instead of failing.
    pub fn from_stored(raw: &str) -> Lang {
        Self::from_code(raw.trim()).unwrap_or_default()
    }

    pub fn other(self) -> Lang {
        match self {
            Lang::En => Lang::Nl,
            Lang::Nl => Lang::En,
        }
    }

    /// Caption of the header toggle: the language you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self.other() {
            Lang::En => "EN",
            Lang::Nl => "NL",
        }
    }
}

/// A user-facing string carried once per supported language.
///
/// Deserialization requires both codes and rejects any other, so a value
/// that parses is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Localized {
    pub en: String,
    pub nl: String,
}

impl Localized {
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Nl => &self.nl,
        }
    }

    /// Returns the first language whose text is blank, if any.
    pub fn missing(&self) -> Option<Lang> {
        Lang::ALL
            .into_iter()
            .find(|lang| self.get(*lang).trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_language_fallback() {
        assert_eq!(Lang::from_stored("nl"), Lang::Nl);
        assert_eq!(Lang::from_stored("en"), Lang::En);
        assert_eq!(Lang::from_stored(" nl "), Lang::Nl);

        // Unsupported and empty values use the first supported code
        assert_eq!(Lang::from_stored("fr"), Lang::En);
        assert_eq!(Lang::from_stored(""), Lang::En);
        assert_eq!(Lang::from_stored("NL-nl"), Lang::En);
    }

    #[test]
    fn test_round_trip_through_code() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_stored(lang.code()), lang);
        }
    }

    #[test]
    fn test_toggle_label_names_other_language() {
        assert_eq!(Lang::En.toggle_label(), "NL");
        assert_eq!(Lang::Nl.toggle_label(), "EN");
        assert_eq!(Lang::En.other().other(), Lang::En);
    }

    #[test]
    fn test_localized_requires_exactly_two_codes() {
        let ok: Localized = serde_json::from_str(r#"{"en":"Biking","nl":"Fietsen"}"#)
            .expect("both codes should parse");
        assert_eq!(ok.get(Lang::Nl), "Fietsen");

        let missing = serde_json::from_str::<Localized>(r#"{"en":"Biking"}"#);
        assert!(missing.is_err());

        let extra =
            serde_json::from_str::<Localized>(r#"{"en":"Biking","nl":"Fietsen","fr":"Vélo"}"#);
        assert!(extra.is_err());
    }

    fn localized(en: &str, nl: &str) -> Localized {
        Localized {
            en: en.into(),
            nl: nl.into(),
        }
    }

    #[test]
    fn test_missing_reports_blank_language() {
        assert_eq!(localized("Tennis", "Tennis").missing(), None);
        assert_eq!(localized("Tennis", "  ").missing(), Some(Lang::Nl));
        assert_eq!(localized("", "Tennis").missing(), Some(Lang::En));
    }
}
