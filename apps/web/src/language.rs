//! Language selection: the closed set of supported page languages and the
//! query-parameter seeding rule.

use serde::Deserialize;

/// A supported page language. The set is closed — every localized field in
/// the content documents is expected to carry a value for each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

/// All supported languages, in the order their selector buttons appear.
pub const LANGUAGES: [Language; 2] = [Language::En, Language::De];

impl Language {
    /// The language code used in `lang` query parameters and localized lookups.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// The label shown on the selector button.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    /// Parses a `lang` query value. Unrecognized codes fall back to English
    /// instead of propagating into localized lookups.
    pub fn from_code(code: &str) -> Language {
        match code {
            "de" => Language::De,
            _ => Language::En,
        }
    }
}

/// Query parameters accepted by the page route.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
}

impl PageQuery {
    /// The active language for this request: the `lang` parameter when present
    /// and non-empty, English otherwise.
    pub fn language(&self) -> Language {
        self.lang
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(Language::from_code)
            .unwrap_or_default()
    }
}
