use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_is_available() {
    assert!(MemoryStore::new().is_available());
}

#[test]
fn memory_store_get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("missing"), Ok(None));
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::new();
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k"), Ok(Some("second".to_owned())));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_missing_key_succeeds() {
    let store = MemoryStore::new();
    assert_eq!(store.remove("nothing"), Ok(()));
    assert!(store.is_empty());
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::new();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.remove("a").unwrap();
    assert_eq!(store.get("a"), Ok(None));
    assert_eq!(store.get("b"), Ok(Some("2".to_owned())));
}

// =============================================================
// BrowserSessionStore outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_unavailable_without_hydrate() {
    let store = BrowserSessionStore::new();
    assert!(!store.is_available());
    assert_eq!(store.get("k"), Err(StorageError::Unavailable));
    assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(store.remove("k"), Err(StorageError::Unavailable));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "session storage unavailable");
    assert_eq!(
        StorageError::Rejected("QuotaExceededError".to_owned()).to_string(),
        "session storage rejected operation: QuotaExceededError"
    );
}
