use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_store_reads_empty_and_ignores_writes() {
    let store = LocalStorageTokenStore;
    store.save("t1");
    assert_eq!(store.load(), None);
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn token_key_matches_persisted_name() {
    assert_eq!(TOKEN_KEY, "chaos_console_token");
}
