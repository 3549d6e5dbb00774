//! Persisted UI language preference.
//!
//! The language lives in its own `RwSignal<Language>` context, independent of
//! the session, and is written back to storage whenever it changes.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use crate::i18n::Language;
use crate::util::storage::{HintStore, LANG_KEY};

/// Read the stored language, defaulting to English for absent or unknown codes.
pub fn restore_language<S: HintStore>(store: &S) -> Language {
    store
        .get(LANG_KEY)
        .and_then(|code| Language::parse(&code))
        .unwrap_or_default()
}

/// Persist `language` for the next page load.
pub fn persist_language<S: HintStore>(store: &S, language: Language) {
    store.set(LANG_KEY, language.code());
}
