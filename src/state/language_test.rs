use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn restore_defaults_to_english_when_unset() {
    assert_eq!(restore_language(&MemoryStorage::new()), Language::En);
}

#[test]
fn restore_reads_stored_code() {
    let store = MemoryStorage::with_entry(LANG_KEY, "hi");
    assert_eq!(restore_language(&store), Language::Hi);
}

#[test]
fn restore_ignores_unknown_code() {
    let store = MemoryStorage::with_entry(LANG_KEY, "klingon");
    assert_eq!(restore_language(&store), Language::En);
}

#[test]
fn persisted_language_survives_restore() {
    let store = MemoryStorage::new();
    persist_language(&store, Language::Ta);
    assert_eq!(store.get(LANG_KEY).as_deref(), Some("ta"));
    assert_eq!(restore_language(&store), Language::Ta);
}
