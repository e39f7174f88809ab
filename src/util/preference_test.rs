use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::default();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn memory_store_overwrites() {
    let mut store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}
