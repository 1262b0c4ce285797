use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    assert_eq!(store.get("user"), None);
}

#[test]
fn memory_storage_set_then_get() {
    let mut store = MemoryStorage::new();
    store.set("token", "abc").unwrap();
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    assert!(store.contains("token"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_set_overwrites() {
    let mut store = MemoryStorage::new();
    store.set("token", "old").unwrap();
    store.set("token", "new").unwrap();
    assert_eq!(store.get("token").as_deref(), Some("new"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_absent_key_is_ok() {
    let mut store = MemoryStorage::new();
    assert_eq!(store.remove("missing"), Ok(()));
    assert!(store.is_empty());
}

#[test]
fn memory_storage_remove_deletes_entry() {
    let mut store = MemoryStorage::new();
    store.set("user", "{}").unwrap();
    store.remove("user").unwrap();
    assert!(!store.contains("user"));
}

// =============================================================
// save_json
// =============================================================

#[test]
fn save_json_writes_compact_json() {
    let mut store = MemoryStorage::new();
    save_json(&mut store, "draft", &serde_json::json!({ "a": 1 })).unwrap();
    assert_eq!(store.get("draft").as_deref(), Some(r#"{"a":1}"#));
}

#[test]
fn save_json_plain_string_is_quoted() {
    let mut store = MemoryStorage::new();
    save_json(&mut store, "name", &"A B").unwrap();
    assert_eq!(store.get("name").as_deref(), Some("\"A B\""));
}

// =============================================================
// BrowserStorage (non-hydrate)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_and_accepts_writes_off_browser() {
    let mut store = BrowserStorage;
    assert_eq!(store.set("user", "{}"), Ok(()));
    assert_eq!(store.get("user"), None);
    assert_eq!(store.remove("user"), Ok(()));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "user".to_owned() };
    assert_eq!(err.to_string(), "failed to write storage key user");
}
