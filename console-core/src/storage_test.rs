use super::*;

#[test]
fn save_load_clear() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load(), None);
    store.save("t1");
    assert_eq!(store.load().as_deref(), Some("t1"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn clones_share_the_same_slot() {
    let store = MemoryTokenStore::with_token("t1");
    let other = store.clone();
    other.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn references_are_stores_too() {
    fn roundtrip(store: impl TokenStore) -> Option<String> {
        store.save("t2");
        store.load()
    }
    let store = MemoryTokenStore::default();
    assert_eq!(roundtrip(&store).as_deref(), Some("t2"));
}
