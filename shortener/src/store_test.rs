use super::*;

#[test]
fn memory_store_set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set("accessToken", "abc");
    assert_eq!(store.get("accessToken").as_deref(), Some("abc"));
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::with_entries([("username", "alice")]);
    store.set("username", "bob");
    assert_eq!(store.get("username").as_deref(), Some("bob"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_delete_removes_key_and_tolerates_missing() {
    let store = MemoryStore::with_entries([("userId", "7")]);
    store.delete("userId");
    store.delete("userId");
    assert!(!store.contains("userId"));
    assert!(store.is_empty());
}

#[test]
fn store_reference_delegates_to_inner_store() {
    let store = MemoryStore::new();
    let by_ref: &MemoryStore = &store;
    KeyValueStore::set(&by_ref, "k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
}
