use super::*;

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert_eq!(store.get(ROLE_KEY), None);
}

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    store.set(ROLE_KEY, "doctor");
    assert_eq!(store.get(ROLE_KEY).as_deref(), Some("doctor"));
    store.set(ROLE_KEY, "worker");
    assert_eq!(store.get(ROLE_KEY).as_deref(), Some("worker"));
    store.remove(ROLE_KEY);
    assert_eq!(store.get(ROLE_KEY), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::with_entry(LANG_KEY, "ta");
    let handle = store.clone();
    store.remove(LANG_KEY);
    assert_eq!(handle.get(LANG_KEY), None);
}

#[test]
fn removing_missing_key_is_noop() {
    let store = MemoryStorage::new();
    store.remove("absent");
    assert_eq!(store.get("absent"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_outside_browser() {
    let store = BrowserStorage;
    store.set(ROLE_KEY, "admin");
    assert_eq!(store.get(ROLE_KEY), None);
    store.remove(ROLE_KEY);
}
