use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    assert!(store.read("k").is_none());
    store.write("k", "v1");
    assert_eq!(store.read("k").as_deref(), Some("v1"));
    store.write("k", "v2");
    assert_eq!(store.read("k").as_deref(), Some("v2"));
}

#[test]
fn memory_store_clear_removes_only_that_key() {
    let store = MemoryStore::default();
    store.write("a", "1");
    store.write("b", "2");
    store.clear("a");
    assert!(store.read("a").is_none());
    assert_eq!(store.read("b").as_deref(), Some("2"));
}

#[test]
fn browser_store_is_inert_without_a_browser() {
    let store = BrowserStore;
    store.write("k", "v");
    assert!(store.read("k").is_none());
    store.clear("k");
}
