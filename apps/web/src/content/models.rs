//! CV data model — typed views of the five JSON documents. All records are
//! read-only once parsed; input order is display order and is never re-sorted.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::language::Language;

/// Text localized per language code, e.g. `{"en": "...", "de": "..."}`.
#[derive(Debug, Clone, Default)]
pub struct LocalizedText(Vec<(String, String)>);

impl LocalizedText {
    /// Looks up the value for a language. `None` means the document is missing
    /// a translation; the renderer substitutes a placeholder.
    pub fn get(&self, lang: Language) -> Option<&str> {
        self.0
            .iter()
            .find(|(code, _)| code == lang.code())
            .map(|(_, text)| text.as_str())
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextVisitor;

        impl<'de> Visitor<'de> for TextVisitor {
            type Value = LocalizedText;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of language code to text")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(LocalizedText(entries))
            }
        }

        deserializer.deserialize_map(TextVisitor)
    }
}

/// `structure.json` — the header tagline and the presentation section title.
#[derive(Debug, Clone, Deserialize)]
pub struct Structure {
    pub tagline: LocalizedText,
    pub presentation: LocalizedText,
}

/// `experiences.json` — the presentation body plus the work history.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceDoc {
    pub description: LocalizedText,
    pub experiences: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub period: String,
    pub location: String,
    #[serde(rename = "companySize")]
    pub company_size: String,
    pub title: String,
    pub company: String,
    pub description: LocalizedText,
}

/// `skills.json` — named skill sections in document key order.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillsDoc {
    pub skills: SkillSections,
}

/// Skill sections keyed by section name. JSON object key order is preserved
/// because it determines display order.
#[derive(Debug, Clone, Default)]
pub struct SkillSections(pub Vec<SkillSection>);

#[derive(Debug, Clone)]
pub struct SkillSection {
    pub name: String,
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub level: u8,
}

impl<'de> Deserialize<'de> for SkillSections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = SkillSections;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of section name to skill list")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut sections = Vec::new();
                while let Some((name, skills)) = map.next_entry::<String, Vec<SkillItem>>()? {
                    sections.push(SkillSection { name, skills });
                }
                Ok(SkillSections(sections))
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}

/// `education.json` — the formal education history.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationDoc {
    pub education: Vec<EducationItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationItem {
    pub date: String,
    pub title: String,
    pub institution: String,
    #[serde(default)]
    pub additional: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// `courses.json` — continuous-learning categories, each pairing a course
/// list with the skill ratings it feeds.
#[derive(Debug, Clone, Deserialize)]
pub struct CoursesDoc {
    pub courses: Vec<CourseCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseCategory {
    pub title: String,
    pub courses: Vec<CourseItem>,
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseItem {
    pub date: String,
    pub title: String,
    pub provider: String,
}

/// Immutable snapshot of all five parsed documents, handed to the layout
/// composer once every load has completed.
#[derive(Debug, Clone)]
pub struct CvContent {
    pub structure: Structure,
    pub experiences: ExperienceDoc,
    pub skills: SkillsDoc,
    pub education: EducationDoc,
    pub courses: CoursesDoc,
}
