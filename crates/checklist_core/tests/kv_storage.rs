use checklist_core::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
use std::sync::Arc;

#[tokio::test]
async fn sqlite_get_of_missing_key_is_none() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();
    assert_eq!(store.get("todos").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_set_overwrites_and_keeps_keys_separate() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();

    store.set("todos", "[]".to_string()).await.unwrap();
    store.set("todos", "[{}]".to_string()).await.unwrap();
    store.set("other", "x".to_string()).await.unwrap();

    assert_eq!(store.get("todos").await.unwrap().as_deref(), Some("[{}]"));
    assert_eq!(store.get("other").await.unwrap().as_deref(), Some("x"));
}

#[tokio::test]
async fn sqlite_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.sqlite3");

    {
        let store = SqliteKeyValueStore::open(&path).unwrap();
        store.set("todos", "persisted".to_string()).await.unwrap();
    }

    let reopened = SqliteKeyValueStore::open(&path).unwrap();
    assert_eq!(
        reopened.get("todos").await.unwrap().as_deref(),
        Some("persisted")
    );
}

#[tokio::test]
async fn shared_memory_store_is_visible_through_arc() {
    let shared = Arc::new(MemoryKeyValueStore::new());
    let handle: Arc<dyn KeyValueStore> = shared.clone();

    handle.set("todos", "[]".to_string()).await.unwrap();

    assert_eq!(shared.peek("todos").unwrap().as_deref(), Some("[]"));
}
