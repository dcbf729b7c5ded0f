use async_trait::async_trait;
use checklist_core::{
    ChecklistRepository, Item, KeyValueStore, KvChecklistRepository, MemoryKeyValueStore,
    RepoError, SqliteKeyValueStore, StorageError, StorageResult, CHECKLIST_STORAGE_KEY,
};
use std::sync::Arc;

struct UnreadableStore;

#[async_trait]
impl KeyValueStore for UnreadableStore {
    async fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Task("read refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: String) -> StorageResult<()> {
        Err(StorageError::Task("write refused".to_string()))
    }
}

#[tokio::test]
async fn load_of_empty_backend_is_none() {
    let repo = KvChecklistRepository::new(MemoryKeyValueStore::new());
    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn save_writes_json_array_under_fixed_key() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let repo = KvChecklistRepository::new(backend.clone());
    let item = Item::with_id("1", "Buy milk", "2%").unwrap();

    repo.save(&[item]).await.unwrap();

    let raw = backend.peek(CHECKLIST_STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"id": "1", "title": "Buy milk", "notes": "2%", "done": false}])
    );
}

#[tokio::test]
async fn save_then_load_roundtrips_through_sqlite() {
    let repo = KvChecklistRepository::new(SqliteKeyValueStore::open_in_memory().unwrap());
    let mut done = Item::new("Call Alice", "").unwrap();
    done.done = true;
    let items = vec![Item::new("Buy milk", "2%").unwrap(), done];

    repo.save(&items).await.unwrap();

    assert_eq!(repo.load().await.unwrap(), Some(items));
}

#[tokio::test]
async fn custom_key_isolates_checklists() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let work = KvChecklistRepository::with_key(backend.clone(), "work");
    let home = KvChecklistRepository::new(backend.clone());

    work.save(&[Item::new("Ship release", "").unwrap()]).await.unwrap();

    assert!(home.load().await.unwrap().is_none());
    assert_eq!(work.load().await.unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_value_is_codec_error() {
    let repo =
        KvChecklistRepository::new(MemoryKeyValueStore::with_entry("todos", "[{\"id\": 1}"));
    let err = repo.load().await.unwrap_err();
    assert!(matches!(err, RepoError::Codec(_)));
    assert_eq!(err.code(), "codec_failed");
}

#[tokio::test]
async fn backend_failures_are_storage_errors() {
    let repo = KvChecklistRepository::new(UnreadableStore);

    let load_err = repo.load().await.unwrap_err();
    assert!(matches!(load_err, RepoError::Storage(_)));

    let save_err = repo.save(&[]).await.unwrap_err();
    assert!(matches!(save_err, RepoError::Storage(_)));
    assert_eq!(save_err.code(), "storage_failed");
}

#[tokio::test]
async fn blank_stored_value_loads_as_nothing_saved() {
    for blank in ["", "  \n"] {
        let repo = KvChecklistRepository::new(MemoryKeyValueStore::with_entry("todos", blank));
        assert!(repo.load().await.unwrap().is_none(), "value {blank:?}");
    }
}
