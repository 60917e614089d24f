use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.token(), None);
    assert!(!store.has_token());
}

#[test]
fn memory_store_round_trips_token() {
    let store = MemoryTokenStore::default();
    store.set_token("abc123");
    assert_eq!(store.token().as_deref(), Some("abc123"));
    store.clear_token();
    assert_eq!(store.token(), None);
}

#[test]
fn empty_token_reads_as_absent() {
    let store = MemoryTokenStore::with_token("");
    assert!(!store.has_token());
}

#[test]
fn clearing_an_empty_store_is_harmless() {
    let store = MemoryTokenStore::default();
    store.clear_token();
    assert!(!store.has_token());
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_store_is_inert_outside_browser() {
    let store = LocalTokenStore;
    store.set_token("abc123");
    assert_eq!(store.token(), None);
    store.clear_token();
}
