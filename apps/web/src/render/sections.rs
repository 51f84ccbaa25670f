//! Leaf renderers — the uniform visual fragments the layout is built from.

use maud::{html, Markup};

use crate::content::models::{CourseCategory, CourseItem, EducationItem, ExperienceEntry, SkillItem};
use crate::language::Language;
use crate::render::localized;

const MAX_LEVEL: u8 = 5;

/// A titled section. Titles are always non-empty strings.
pub fn section(title: &str, body: Markup) -> Markup {
    html! {
        section {
            h2 { (title) }
            (body)
        }
    }
}

pub fn experience_entry(entry: &ExperienceEntry, lang: Language) -> Markup {
    html! {
        div class="experience-entry" {
            h3 { (entry.title) " at " span class="company" { (entry.company) } }
            p class="period" { (entry.period) " | " (entry.location) " | " (entry.company_size) }
            p { (localized(&entry.description, lang)) }
        }
    }
}

/// `level` filled stars followed by `5 - level` empty ones. Levels above 5
/// are clamped so the rating is always exactly five marks wide.
pub fn stars(level: u8) -> Markup {
    let filled = level.min(MAX_LEVEL) as usize;
    html! {
        span class="stars" {
            ("★".repeat(filled))
            ("☆".repeat(MAX_LEVEL as usize - filled))
        }
    }
}

pub fn skill(item: &SkillItem) -> Markup {
    html! {
        div class="skill" {
            span { (item.name) }
            (stars(item.level))
        }
    }
}

pub fn skill_list(items: &[SkillItem]) -> Markup {
    html! {
        @for item in items {
            (skill(item))
        }
    }
}

/// The title becomes a new-tab link when `link` is present and non-empty,
/// plain text otherwise.
pub fn education_item(item: &EducationItem) -> Markup {
    html! {
        div class="education-entry" {
            h3 {
                @match item.link.as_deref().filter(|l| !l.is_empty()) {
                    Some(link) => { a href=(link) target="_blank" rel="noopener" { (item.title) } }
                    None => { (item.title) }
                }
            }
            p { (item.institution) }
            p class="period" { (item.date) }
            @if let Some(additional) = &item.additional {
                p { (additional) }
            }
        }
    }
}

pub fn course_item(item: &CourseItem) -> Markup {
    html! {
        p class="course" { (item.title) " - " (item.provider) " - " (item.date) }
    }
}

/// A course category: heading plus a two-column split of its course list
/// (left) and the skill ratings it feeds (right).
pub fn course_category(category: &CourseCategory) -> Markup {
    html! {
        div class="course-category" {
            h3 { (category.title) }
            div class="main-content" {
                div class="left-column" {
                    @for course in &category.courses {
                        (course_item(course))
                    }
                }
                div class="right-column" {
                    (skill_list(&category.skills))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stars_level_zero_is_all_empty() {
        assert!(stars(0).into_string().contains("☆☆☆☆☆"));
    }

    #[test]
    fn test_stars_level_five_is_all_filled() {
        assert!(stars(5).into_string().contains("★★★★★"));
    }

    #[test]
    fn test_stars_level_three_mixes_marks() {
        assert!(stars(3).into_string().contains("★★★☆☆"));
    }

    #[test]
    fn test_stars_out_of_range_level_is_clamped() {
        assert!(stars(7).into_string().contains("★★★★★"));
    }

    #[test]
    fn test_experience_entry_formats_title_and_meta_line() {
        let entry: ExperienceEntry = serde_json::from_value(json!({
            "period": "2020 - 2024", "location": "Zurich", "companySize": "50-100",
            "title": "Engineer", "company": "Acme",
            "description": {"en": "Built things"}
        }))
        .unwrap();

        let rendered = experience_entry(&entry, Language::En).into_string();
        assert!(rendered.contains("Engineer at "));
        assert!(rendered.contains("Acme"));
        assert!(rendered.contains("2020 - 2024 | Zurich | 50-100"));
        assert!(rendered.contains("Built things"));
    }

    #[test]
    fn test_education_item_with_link_renders_new_tab_anchor() {
        let item: EducationItem = serde_json::from_value(json!({
            "date": "2014", "title": "MSc", "institution": "ETH",
            "link": "https://example.org/msc"
        }))
        .unwrap();

        let rendered = education_item(&item).into_string();
        assert!(rendered.contains(r#"<a href="https://example.org/msc" target="_blank""#));
    }

    #[test]
    fn test_education_item_without_link_is_plain_text() {
        let item: EducationItem = serde_json::from_value(json!({
            "date": "2014", "title": "MSc", "institution": "ETH"
        }))
        .unwrap();

        let rendered = education_item(&item).into_string();
        assert!(rendered.contains("MSc"));
        assert!(!rendered.contains("<a "));
    }

    #[test]
    fn test_education_item_empty_link_is_plain_text() {
        let item: EducationItem = serde_json::from_value(json!({
            "date": "2014", "title": "MSc", "institution": "ETH", "link": ""
        }))
        .unwrap();

        assert!(!education_item(&item).into_string().contains("<a "));
    }

    #[test]
    fn test_education_additional_text_only_when_present() {
        let with: EducationItem = serde_json::from_value(json!({
            "date": "2014", "title": "MSc", "institution": "ETH",
            "additional": "With distinction"
        }))
        .unwrap();
        let without: EducationItem = serde_json::from_value(json!({
            "date": "2014", "title": "MSc", "institution": "ETH"
        }))
        .unwrap();

        assert!(education_item(&with).into_string().contains("With distinction"));
        assert!(!education_item(&without).into_string().contains("With distinction"));
    }

    #[test]
    fn test_course_item_joins_fields_with_dashes() {
        let item: CourseItem = serde_json::from_value(json!({
            "date": "2023", "title": "Deep Learning", "provider": "Coursera"
        }))
        .unwrap();

        assert!(course_item(&item)
            .into_string()
            .contains("Deep Learning - Coursera - 2023"));
    }

    #[test]
    fn test_course_category_renders_heading_courses_and_skills() {
        let category: CourseCategory = serde_json::from_value(json!({
            "title": "Machine Learning",
            "courses": [{"date": "2023", "title": "DL", "provider": "Coursera"}],
            "skills": [{"name": "PyTorch", "level": 3}]
        }))
        .unwrap();

        let rendered = course_category(&category).into_string();
        assert!(rendered.contains("Machine Learning"));
        assert!(rendered.contains("DL - Coursera - 2023"));
        assert!(rendered.contains("PyTorch"));
        assert!(rendered.contains("★★★☆☆"));
    }
}
