use super::*;

/// Store whose backend is gone: reads are empty, writes fail.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("SecurityError".to_owned()))
    }
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.set("token", "abc").expect("set");
    assert_eq!(other.get("token"), Some("abc".to_owned()));
    other.remove("token").expect("remove");
    assert_eq!(store.get("token"), None);
}

#[test]
fn token_store_round_trips_under_its_key() {
    let backing = MemoryStore::new();
    let tokens = TokenStore::new(backing.clone(), "token");
    assert_eq!(tokens.load(), None);

    tokens.save("a.b.c");
    assert_eq!(tokens.load(), Some("a.b.c".to_owned()));
    assert_eq!(backing.get("token"), Some("a.b.c".to_owned()));
    assert_eq!(tokens.key(), "token");

    tokens.clear();
    assert_eq!(tokens.load(), None);
}

#[test]
fn token_store_accepts_malformed_tokens() {
    let tokens = TokenStore::new(MemoryStore::new(), "token");
    tokens.save("definitely not a jwt");
    assert_eq!(tokens.load(), Some("definitely not a jwt".to_owned()));
}

#[test]
fn blank_stored_token_reads_as_absent() {
    let backing = MemoryStore::new();
    backing.set("token", "  ").expect("set");
    let tokens = TokenStore::new(backing, "token");
    assert_eq!(tokens.load(), None);
    assert_eq!(tokens.raw(), Some("  ".to_owned()));
}

#[test]
fn clear_without_token_is_harmless() {
    let tokens = TokenStore::new(MemoryStore::new(), "token");
    tokens.clear();
    tokens.clear();
    assert_eq!(tokens.load(), None);
}

#[test]
fn broken_store_degrades_to_no_token() {
    let tokens = TokenStore::new(BrokenStore, "token");
    tokens.save("a.b.c");
    assert_eq!(tokens.load(), None);
    tokens.clear();
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_unavailable_outside_browser() {
    let store = LocalStorage;
    assert_eq!(store.get("token"), None);
    assert_eq!(store.set("token", "x"), Err(StorageError::Unavailable));
    assert_eq!(store.remove("token"), Err(StorageError::Unavailable));
}
