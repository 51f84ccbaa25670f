//! Layout composition — pure functions from a content snapshot plus the
//! active language to the rendered document. No filtering, no sorting: input
//! order is display order throughout.

pub mod sections;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::content::models::{CvContent, LocalizedText};
use crate::content::Document;
use crate::language::{Language, LANGUAGES};

/// Shown in place of a localized field that has no value for the active
/// language.
const MISSING_TEXT: &str = "[missing translation]";

pub(crate) fn localized(text: &LocalizedText, lang: Language) -> &str {
    text.get(lang).unwrap_or(MISSING_TEXT)
}

const CV_PDF_BASE: &str = "https://github.com/Fdondi/cv-latex/blob/main";

/// Minimal embedded stylesheet so the page stands alone as a single document.
const STYLESHEET: &str = "\
body { font-family: Georgia, serif; margin: 0 auto; max-width: 60rem; padding: 1rem; }
.header { text-align: center; }
.photo { width: 10rem; border-radius: 50%; }
.contact-info p { margin: 0.1rem; }
.main-content { display: flex; gap: 2rem; }
.left-column { flex: 2; }
.right-column { flex: 1; }
.skill { display: flex; justify-content: space-between; }
.period { color: #555; font-size: 0.9rem; }
.language-selector { text-align: right; }
.status-panel { text-align: center; padding: 4rem; }
.status-panel.error { color: #a00; }
@media (max-width: 40rem) { .main-content { flex-direction: column; } }
";

fn document(title: &str, lang: Language, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body { (body) }
        }
    }
}

/// The full page for the Ready state. Pure: the same snapshot and language
/// always produce the same markup.
pub fn page(content: &CvContent, lang: Language) -> Markup {
    document(
        "Francesco Dondi — CV",
        lang,
        html! {
            div class="cv" {
                (header(content, lang))
                (language_selector(lang))
                div class="main-content" {
                    div class="left-column" {
                        (sections::section(localized(&content.structure.presentation, lang), html! {
                            p { (localized(&content.experiences.description, lang)) }
                        }))
                        (sections::section("Professional Experience", html! {
                            @for entry in &content.experiences.experiences {
                                (sections::experience_entry(entry, lang))
                            }
                        }))
                    }
                    div class="right-column" {
                        @for section in &content.skills.skills.0 {
                            (sections::section(&section.name, sections::skill_list(&section.skills)))
                        }
                    }
                }
                (sections::section("Formal Education", html! {
                    @for item in &content.education.education {
                        (sections::education_item(item))
                    }
                }))
                (sections::section("Continuous Learning", html! {
                    @for category in &content.courses.courses {
                        (sections::course_category(category))
                    }
                }))
                (sections::section("Projects", html! {
                    p { "A selection of personal projects is in preparation." }
                }))
                div class="main-content" {
                    div class="left-column" {
                        (sections::section("Competitions", html! {
                            p { "Coming soon." }
                        }))
                    }
                    div class="right-column" {
                        (sections::section("Personal", html! {
                            p { "Reading, hiking, chess and board games." }
                        }))
                    }
                }
            }
        },
    )
}

fn header(content: &CvContent, lang: Language) -> Markup {
    // The downloadable CV is a per-language document (cv_en.pdf, cv_de.pdf).
    let cv_link = format!("{CV_PDF_BASE}/cv_{}.pdf", lang.code());
    html! {
        header class="header" {
            img src="me.jpg" alt="Francesco Dondi" class="photo";
            h1 { "Francesco Dondi" }
            p { (localized(&content.structure.tagline, lang)) }
            p { a href=(cv_link) { "Latest version of this CV" } }
            div class="contact-info" {
                p { "Email: " a href="mailto:francesco314@gmail.com" { "francesco314@gmail.com" } }
                p { "Phone: +41 76 456 50 32" }
                p { "LinkedIn: " a href="https://linkedin.com/in/francesco-dondi" { "francesco-dondi" } }
                p { "GitHub: " a href="https://github.com/Fdondi" { "Fdondi" } }
                p { "Address: Zugerstrasse 66, 8810 Horgen, ZH" }
                p { "Born: 29/10/1990" }
                p { "Citizenship: Italian, C permit" }
                p { "Marital Status: Married, no children" }
            }
        }
    }
}

/// One control per supported language. The active language's button is
/// disabled, so there is no self-transition; the others are plain links that
/// re-request the page with `?lang=<code>`.
fn language_selector(active: Language) -> Markup {
    html! {
        div class="language-selector" {
            @for lang in LANGUAGES {
                @if lang == active {
                    button disabled { (lang.display_name()) }
                } @else {
                    a href={ "?lang=" (lang.code()) } { button { (lang.display_name()) } }
                }
            }
        }
    }
}

/// Shown while any document load is still pending.
pub fn loading_page() -> Markup {
    document(
        "Loading…",
        Language::En,
        html! {
            div class="status-panel" { p { "Loading…" } }
        },
    )
}

/// The all-or-nothing error panel: replaces the entire layout and names every
/// failed document, comma-joined, in declaration order.
pub fn error_page(failed: &[Document]) -> Markup {
    let names = failed
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    document(
        "Error",
        Language::En,
        html! {
            div class="status-panel error" {
                p { "Failed to load: " (names) }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_content() -> CvContent {
        CvContent {
            structure: serde_json::from_value(json!({
                "tagline": {"en": "Seasoned engineer", "de": "Erfahrener Ingenieur"},
                "presentation": {"en": "Who I am", "de": "Wer ich bin"}
            }))
            .unwrap(),
            experiences: serde_json::from_value(json!({
                "description": {"en": "A summary.", "de": "Eine Zusammenfassung."},
                "experiences": [
                    {"period": "2022 - 2024", "location": "Zurich", "companySize": "200",
                     "title": "Senior Engineer", "company": "Alpha",
                     "description": {"en": "Alpha work", "de": "Alpha Arbeit"}},
                    {"period": "2019 - 2022", "location": "Zug", "companySize": "50",
                     "title": "Engineer", "company": "Beta",
                     "description": {"en": "Beta work", "de": "Beta Arbeit"}},
                    {"period": "2016 - 2019", "location": "Milan", "companySize": "10",
                     "title": "Junior Engineer", "company": "Gamma",
                     "description": {"en": "Gamma work", "de": "Gamma Arbeit"}}
                ]
            }))
            .unwrap(),
            skills: serde_json::from_value(json!({
                "skills": {"Programming": [{"name": "Rust", "level": 4}]}
            }))
            .unwrap(),
            education: serde_json::from_value(json!({
                "education": [{"date": "2014", "title": "MSc", "institution": "ETH"}]
            }))
            .unwrap(),
            courses: serde_json::from_value(json!({
                "courses": [{"title": "ML", "courses": [], "skills": []}]
            }))
            .unwrap(),
        }
    }

    #[test]
    fn test_language_round_trip_is_idempotent() {
        let content = sample_content();
        let before = page(&content, Language::En).into_string();
        let _ = page(&content, Language::De).into_string();
        let after = page(&content, Language::En).into_string();
        assert_eq!(before, after);
    }

    #[test]
    fn test_active_language_selects_localized_text() {
        let content = sample_content();
        let rendered = page(&content, Language::De).into_string();
        assert!(rendered.contains("Erfahrener Ingenieur"));
        assert!(rendered.contains("Eine Zusammenfassung."));
        assert!(!rendered.contains("Seasoned engineer"));
    }

    #[test]
    fn test_cv_download_link_is_language_suffixed() {
        let content = sample_content();
        let en = page(&content, Language::En).into_string();
        let de = page(&content, Language::De).into_string();
        assert!(en.contains("cv_en.pdf"));
        assert!(de.contains("cv_de.pdf"));
    }

    #[test]
    fn test_active_language_button_is_disabled() {
        let content = sample_content();
        let rendered = page(&content, Language::De).into_string();
        assert!(rendered.contains("button disabled"));
        assert!(rendered.contains("?lang=en"));
        assert!(!rendered.contains("?lang=de"));
    }

    #[test]
    fn test_experience_entries_keep_input_order() {
        let content = sample_content();
        let rendered = page(&content, Language::En).into_string();
        let alpha = rendered.find("Alpha work").unwrap();
        let beta = rendered.find("Beta work").unwrap();
        let gamma = rendered.find("Gamma work").unwrap();
        assert!(alpha < beta);
        assert!(beta < gamma);
    }

    #[test]
    fn test_missing_translation_renders_placeholder() {
        let mut content = sample_content();
        content.structure = serde_json::from_value(json!({
            "tagline": {"en": "Only English"},
            "presentation": {"en": "Who I am"}
        }))
        .unwrap();
        let rendered = page(&content, Language::De).into_string();
        assert!(rendered.contains(MISSING_TEXT));
    }

    #[test]
    fn test_error_page_joins_names_with_commas() {
        let rendered = error_page(&[Document::Skills, Document::Education]).into_string();
        assert!(rendered.contains("Failed to load: Skills, Education"));
    }

    #[test]
    fn test_loading_page_has_no_error_panel() {
        let rendered = loading_page().into_string();
        assert!(rendered.contains("Loading…"));
        assert!(!rendered.contains("Failed to load"));
    }
}
