use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::i18n::{Lang, Localized};

const CV_FILE: &str = "cv.json";

/// The content store, parsed and validated on first access.
pub static CV: LazyLock<CvData> =
    LazyLock::new(|| CvData::load().expect("embedded CV content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file `{0}' not found")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Empty text at {path}")]
    EmptyText { path: String },
    #[error("Level {level} of `{name}' is outside 0..=100")]
    LevelOutOfRange { name: String, level: u8 },
    #[error("Navigation target `{0}' appears more than once")]
    DuplicateNavTarget(&'static str),
}

/// Every region of the page that can be navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Development,
    Interests,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Development,
        SectionId::Interests,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Development => "development",
            SectionId::Interests => "interests",
            SectionId::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

/// One run of rich text. Emphasis is the only markup the content may carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    Text(String),
    Emphasis(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Text(s) | Span::Emphasis(s) => s,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub linkedin_handle: String,
}

impl PersonalInfo {
    /// The short name shown as the header brand.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub target: SectionId,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub subtitle: String,
    pub name: String,
    pub description: String,
    pub cta_experience: String,
    pub cta_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub overview: String,
    pub description: Vec<Span>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionContent {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsContent {
    pub title: String,
    pub show_more: String,
    pub show_less: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsContent {
    pub title: String,
    pub programming: String,
    pub languages: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub title: String,
    pub description: String,
    pub linkedin_profile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub rights: String,
}

/// All copy for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageData {
    pub nav_links: Vec<NavLink>,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub experience_section: SectionContent,
    pub projects_section: ProjectsContent,
    pub skills_section: SkillsContent,
    pub education_section: SectionContent,
    pub development_section: SectionContent,
    pub interests_section: SectionContent,
    pub contact_section: ContactContent,
    pub footer: FooterContent,
}

impl LanguageData {
    fn texts(&self) -> Vec<(&'static str, &str)> {
        let mut texts = vec![
            ("hero.subtitle", self.hero.subtitle.as_str()),
            ("hero.name", self.hero.name.as_str()),
            ("hero.description", self.hero.description.as_str()),
            ("hero.cta_experience", self.hero.cta_experience.as_str()),
            ("hero.cta_email", self.hero.cta_email.as_str()),
            ("about.title", self.about.title.as_str()),
            ("about.overview", self.about.overview.as_str()),
            ("experience_section.title", self.experience_section.title.as_str()),
            ("projects_section.title", self.projects_section.title.as_str()),
            ("projects_section.show_more", self.projects_section.show_more.as_str()),
            ("projects_section.show_less", self.projects_section.show_less.as_str()),
            ("skills_section.title", self.skills_section.title.as_str()),
            ("skills_section.programming", self.skills_section.programming.as_str()),
            ("skills_section.languages", self.skills_section.languages.as_str()),
            ("education_section.title", self.education_section.title.as_str()),
            ("development_section.title", self.development_section.title.as_str()),
            ("interests_section.title", self.interests_section.title.as_str()),
            ("contact_section.title", self.contact_section.title.as_str()),
            ("contact_section.description", self.contact_section.description.as_str()),
            ("contact_section.linkedin_profile", self.contact_section.linkedin_profile.as_str()),
            ("footer.rights", self.footer.rights.as_str()),
        ];
        texts.extend(self.nav_links.iter().map(|l| ("nav_links.text", l.text.as_str())));
        texts.extend(self.about.highlights.iter().map(|h| ("about.highlights", h.as_str())));
        texts.extend(self.about.description.iter().map(|s| ("about.description", s.text())));
        texts
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: Localized,
    pub company: String,
    pub period: String,
    pub tasks: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: Localized,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: Localized,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub name: String,
    pub level: Localized,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub core: SkillCategory,
    pub languages: Vec<LanguageSkill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Backend,
    Data,
    Frontend,
    #[serde(other)]
    Other,
}

impl Category {
    /// Badge colours for a programming language of this category.
    pub fn badge_class(self) -> &'static str {
        match self {
            Category::Backend => "bg-blue-100 text-blue-800 border-blue-200 dark:bg-blue-400/20 dark:text-blue-300 dark:border-blue-400/30",
            Category::Data => "bg-green-100 text-green-800 border-green-200 dark:bg-green-400/20 dark:text-green-300 dark:border-green-400/30",
            Category::Frontend => "bg-purple-100 text-purple-800 border-purple-200 dark:bg-purple-400/20 dark:text-purple-300 dark:border-purple-400/30",
            Category::Other => "bg-slate-100 text-slate-800 border-slate-200 dark:bg-gray-400/20 dark:text-gray-300 dark:border-gray-400/30",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgrammingLang {
    pub name: String,
    pub category: Category,
}

impl ProgrammingLang {
    /// Font Awesome class for the badge, if the language has one.
    pub fn icon(&self) -> Option<&'static str> {
        let icon = match self.name.as_str() {
            "Python" => "fab fa-python",
            "SQL" | "OpenSQL" => "fas fa-database",
            "ABAP" => "fas fa-cogs",
            "TypeScript" => "fas fa-code",
            "JavaScript" => "fab fa-js",
            "React" => "fab fa-react",
            "HTML/CSS" => "fab fa-html5",
            _ => return None,
        };
        Some(icon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: Localized,
    pub institution: String,
    pub period: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevelopmentItem {
    pub title: Localized,
    pub issuer: String,
    pub period: String,
    pub description: Localized,
    #[serde(default)]
    pub tools: Option<Vec<String>>,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    pub name: Localized,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvData {
    pub personal: PersonalInfo,
    pub en: LanguageData,
    pub nl: LanguageData,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub programming_languages: Vec<ProgrammingLang>,
    pub education: Vec<EducationItem>,
    pub development: Vec<DevelopmentItem>,
    pub interests: Vec<Interest>,
}

impl CvData {
    pub fn load() -> Result<CvData, ContentError> {
        let file = Assets::get(CV_FILE).ok_or_else(|| ContentError::Missing(CV_FILE.into()))?;
        Self::from_slice(&file.data)
    }

    /// Parse and validate raw JSON content.
    pub fn from_slice(json: &[u8]) -> Result<CvData, ContentError> {
        let data: CvData = serde_json::from_slice(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn copy(&self, lang: Lang) -> &LanguageData {
        match lang {
            Lang::En => &self.en,
            Lang::Nl => &self.nl,
        }
    }

    /// Every localized value in the store, labelled by where it lives.
    pub fn localized(&self) -> Vec<(&'static str, &Localized)> {
        let mut all = Vec::new();
        all.extend(self.experience.iter().map(|e| ("experience.role", &e.role)));
        all.extend(self.projects.iter().map(|p| ("projects.title", &p.title)));
        all.push(("skills.core.title", &self.skills.core.title));
        all.extend(self.skills.languages.iter().map(|l| ("skills.languages.level", &l.level)));
        all.extend(self.education.iter().map(|e| ("education.degree", &e.degree)));
        for item in &self.development {
            all.push(("development.title", &item.title));
            all.push(("development.description", &item.description));
        }
        all.extend(self.interests.iter().map(|i| ("interests.name", &i.name)));
        all
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        for (path, text) in self.localized() {
            if let Some(lang) = text.missing() {
                return Err(ContentError::EmptyText {
                    path: format!("{path}.{}", lang.code()),
                });
            }
        }

        for lang in Lang::ALL {
            let copy = self.copy(lang);
            if let Some((path, _)) = copy.texts().into_iter().find(|(_, t)| t.trim().is_empty()) {
                return Err(ContentError::EmptyText {
                    path: format!("{}.{path}", lang.code()),
                });
            }
            let mut seen = HashSet::new();
            for link in &copy.nav_links {
                if !seen.insert(link.target) {
                    return Err(ContentError::DuplicateNavTarget(link.target.as_str()));
                }
            }
        }

        let levels = self
            .skills
            .core
            .skills
            .iter()
            .map(|s| (&s.name, s.level))
            .chain(self.skills.languages.iter().map(|l| (&l.name, l.value)));
        for (name, level) in levels {
            if level > 100 {
                return Err(ContentError::LevelOutOfRange {
                    name: name.clone(),
                    level,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> CvData {
        CvData::load().expect("embedded content should load")
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let cv = embedded();
        assert_eq!(cv.personal.first_name(), "Robin");
        assert_eq!(cv.projects.len(), 14);
        assert_eq!(cv.experience.len(), 7);
        assert_eq!(cv.interests.len(), 6);
    }

    #[test]
    fn test_localized_text_is_complete() {
        let cv = embedded();
        for (path, text) in cv.localized() {
            for lang in Lang::ALL {
                assert!(
                    !text.get(lang).is_empty(),
                    "{path} has no {} text",
                    lang.code()
                );
            }
        }
    }

    #[test]
    fn test_nav_targets_name_known_sections() {
        let cv = embedded();
        for lang in Lang::ALL {
            let targets = cv
                .copy(lang)
                .nav_links
                .iter()
                .map(|l| l.target)
                .collect::<Vec<_>>();
            assert_eq!(
                targets,
                vec![
                    SectionId::About,
                    SectionId::Experience,
                    SectionId::Projects,
                    SectionId::Skills,
                    SectionId::Education,
                    SectionId::Contact,
                ]
            );
            for target in targets {
                assert_eq!(
                    SectionId::ALL.iter().filter(|id| **id == target).count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_unknown_nav_target_is_rejected() {
        let link = serde_json::from_str::<NavLink>(r#"{"target":"blog","text":"Blog"}"#);
        assert!(link.is_err());
        let link = serde_json::from_str::<NavLink>(r#"{"target":"skills","text":"Skills"}"#)
            .expect("known section should parse");
        assert_eq!(link.target.anchor(), "#skills");
    }

    #[test]
    fn test_interests_keep_authored_order() {
        let cv = embedded();
        let names = cv
            .interests
            .iter()
            .map(|i| i.name.get(Lang::Nl))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            ["Tennis", "Fitness", "Fietsen", "Reizen", "Lezen", "Theater"]
        );
        assert_eq!(cv.interests[2].name.get(Lang::En), "Biking");
    }

    #[test]
    fn test_levels_within_range() {
        let cv = embedded();
        assert!(cv.skills.core.skills.iter().all(|s| s.level <= 100));
        assert!(cv.skills.languages.iter().all(|l| l.value <= 100));
    }

    #[test]
    fn test_about_emphasis_is_spans() {
        let cv = embedded();
        for lang in Lang::ALL {
            let description = &cv.copy(lang).about.description;
            assert!(description
                .iter()
                .any(|s| matches!(s, Span::Emphasis(t) if t == "AI")));
            assert!(description.iter().all(|s| !s.text().contains('<')));
        }
    }

    #[test]
    fn test_validation_errors() {
        let mut cv = embedded();
        cv.skills.core.skills[0].level = 120;
        assert!(matches!(
            cv.validate(),
            Err(ContentError::LevelOutOfRange { level: 120, .. })
        ));

        let mut cv = embedded();
        cv.interests[0].name.nl = String::new();
        match cv.validate() {
            Err(ContentError::EmptyText { path }) => assert_eq!(path, "interests.name.nl"),
            other => panic!("expected empty text error, got {other:?}"),
        }

        let mut cv = embedded();
        cv.nl.footer.rights = " ".into();
        match cv.validate() {
            Err(ContentError::EmptyText { path }) => assert_eq!(path, "nl.footer.rights"),
            other => panic!("expected empty text error, got {other:?}"),
        }

        let mut cv = embedded();
        let dup = cv.en.nav_links[0].clone();
        cv.en.nav_links.push(dup);
        assert!(matches!(
            cv.validate(),
            Err(ContentError::DuplicateNavTarget("about"))
        ));
    }

    #[test]
    fn test_from_slice_rejects_garbage() {
        assert!(matches!(
            CvData::from_slice(b"{\"personal\": 1}"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let lang = serde_json::from_str::<ProgrammingLang>(r#"{"name":"Go","category":"Systems"}"#)
            .expect("unknown categories should parse");
        assert_eq!(lang.category, Category::Other);
        assert!(lang.icon().is_none());
        assert!(lang.category.badge_class().contains("slate"));
    }

    #[test]
    fn test_every_programming_language_has_an_icon() {
        let cv = embedded();
        for lang in &cv.programming_languages {
            assert!(lang.icon().is_some(), "{} has no icon", lang.name);
            assert_ne!(lang.category, Category::Other);
        }
    }
}
