//! Translation lookup for user-facing strings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages resolve every label through [`t`] with the language held in the
//! shared `RwSignal<Language>` context. Lookups never fail:
//! a key missing from the active language's catalog renders as the key itself.


mod catalog;

use serde::{Deserialize, Serialize};

use catalog::{CATALOG_EN, CATALOG_HI, CATALOG_TA};

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
    Hi,
}

/// Ordered list for the language selector.
pub const LANGUAGES: &[Language] = &[Language::En, Language::Ta, Language::Hi];

impl Language {
    /// Wire and storage code (`en`, `ta`, `hi`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ta => "ta",
            Self::Hi => "hi",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ta => "தமிழ்",
            Self::Hi => "हिंदी",
        }
    }

    /// Parse a stored or selected language code.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "en" => Some(Self::En),
            "ta" => Some(Self::Ta),
            "hi" => Some(Self::Hi),
            _ => None,
        }
    }

    fn catalog(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => CATALOG_EN,
            Self::Ta => CATALOG_TA,
            Self::Hi => CATALOG_HI,
        }
    }
}

/// Resolve `key` in `language`'s catalog, returning `key` when absent.
#[must_use]
pub fn t(language: Language, key: &str) -> &str {
    language
        .catalog()
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, v)| *v)
}
