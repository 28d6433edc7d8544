use todo_core::db::DbError;
use todo_core::{
    decode_tasks, Intent, KeyValueStore, MemoryStore, PersistError, SequentialIdGenerator,
    StoreError, StoreResult, TaskId, TodoService, UuidIdGenerator, EMPTY_LIST_MESSAGE,
    TODOS_STORAGE_KEY,
};

/// Store whose reads always fail; writes are recorded.
#[derive(Default)]
struct UnreadableStore {
    writes: Vec<(String, String)>,
}

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Db(DbError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

fn sequential(store: MemoryStore) -> TodoService<MemoryStore, SequentialIdGenerator> {
    TodoService::initialize_with(store, SequentialIdGenerator::seeded_after)
}

fn stored(service: &TodoService<MemoryStore, SequentialIdGenerator>) -> String {
    service.store().raw(TODOS_STORAGE_KEY).unwrap().to_string()
}

#[test]
fn empty_store_initializes_empty_list_and_normalizes_storage() {
    let service = sequential(MemoryStore::new());

    assert!(service.is_empty());
    assert_eq!(service.draft(), "");
    assert!(!service.can_add());
    assert_eq!(stored(&service), "[]");
    assert_eq!(service.view().empty_placeholder, Some(EMPTY_LIST_MESSAGE));
}

#[test]
fn add_appends_trimmed_text_clears_draft_and_persists() {
    let mut service = sequential(MemoryStore::new());

    service.set_draft("  Buy milk  ");
    assert!(service.can_add());
    let id = service.add_task().unwrap();

    assert_eq!(service.len(), 1);
    assert_eq!(service.tasks()[0].id, id);
    assert_eq!(service.tasks()[0].text, "Buy milk");
    assert_eq!(service.draft(), "");
    assert_eq!(
        stored(&service),
        format!(r#"[{{"id":"{id}","text":"Buy milk"}}]"#)
    );
}

#[test]
fn add_with_blank_draft_changes_nothing() {
    let mut service = sequential(MemoryStore::with_entry(
        TODOS_STORAGE_KEY,
        r#"[{"id":"1","text":"Saved Todo"}]"#,
    ));
    let before = stored(&service);

    service.set_draft("   \t");
    assert_eq!(service.add_task(), None);

    assert_eq!(service.len(), 1);
    assert_eq!(service.draft(), "   \t");
    assert_eq!(stored(&service), before);
}

#[test]
fn remove_keeps_relative_order_and_persists() {
    let mut service = sequential(MemoryStore::new());
    let mut ids = Vec::new();
    for text in ["A", "B", "C"] {
        service.set_draft(text);
        ids.push(service.add_task().unwrap());
    }

    assert!(service.remove_task(&ids[0]));

    let texts: Vec<&str> = service.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["B", "C"]);
    assert!(service.tasks().iter().all(|t| t.id != ids[0]));
    let persisted = decode_tasks(&stored(&service)).unwrap();
    assert_eq!(persisted, service.tasks());
}

#[test]
fn remove_unknown_id_is_a_no_op() {
    let mut service = sequential(MemoryStore::new());
    service.set_draft("only");
    let id = service.add_task().unwrap();
    assert!(service.remove_task(&id));

    assert!(!service.remove_task(&id));
    assert!(!service.remove_task(&TaskId::from("missing")));
    assert!(service.is_empty());
}

#[test]
fn saved_list_is_loaded_as_is() {
    let service = sequential(MemoryStore::with_entry(
        TODOS_STORAGE_KEY,
        r#"[{"id":"1","text":"Saved Todo"}]"#,
    ));

    assert_eq!(service.len(), 1);
    assert_eq!(service.tasks()[0].id.as_str(), "1");
    assert_eq!(service.tasks()[0].text, "Saved Todo");
    assert_eq!(service.view().rows[0].text, "Saved Todo");
}

#[test]
fn invalid_json_falls_back_to_empty_and_overwrites_storage() {
    let service = sequential(MemoryStore::with_entry(TODOS_STORAGE_KEY, "{not json"));

    assert!(service.is_empty());
    assert_eq!(stored(&service), "[]");
    assert!(service.last_persist_error().is_none());
}

#[test]
fn one_bad_entry_discards_the_whole_list() {
    let service = sequential(MemoryStore::with_entry(
        TODOS_STORAGE_KEY,
        r#"[{"id":"1","text":"ok"},{"id":"2"}]"#,
    ));
    assert!(service.is_empty());
}

#[test]
fn next_session_reproduces_list_and_never_reuses_ids() {
    let mut first = sequential(MemoryStore::new());
    for text in ["one", "two", "three"] {
        first.set_draft(text);
        first.add_task().unwrap();
    }
    let removed = first.tasks()[2].id.clone();
    first.remove_task(&removed);
    let saved = first.tasks().to_vec();
    let store = first.store().clone();

    let mut second = sequential(store);
    assert_eq!(second.tasks(), saved.as_slice());

    second.set_draft("four");
    let id = second.add_task().unwrap();
    assert!(saved.iter().all(|task| task.id != id));
}

#[test]
fn write_failure_keeps_memory_state_and_is_reported_once() {
    let saved = r#"[{"id":"1","text":"kept"}]"#;
    let mut store = MemoryStore::with_entry(TODOS_STORAGE_KEY, saved);
    store.reject_writes(true);

    let mut service = TodoService::initialize(&mut store, UuidIdGenerator);
    assert!(matches!(
        service.take_persist_error(),
        Some(PersistError::Store(StoreError::WriteRejected { .. }))
    ));

    service.set_draft("survives");
    let id = service.add_task().unwrap();
    assert_eq!(service.len(), 2);
    assert_eq!(service.tasks()[1].id, id);
    assert!(service.last_persist_error().is_some());
    assert!(service.take_persist_error().is_some());
    assert!(service.take_persist_error().is_none());
    drop(service);

    assert_eq!(store.raw(TODOS_STORAGE_KEY), Some(saved));
}

#[test]
fn intents_drive_the_same_operations() {
    let mut service = sequential(MemoryStore::new());

    assert!(!service.apply(Intent::DraftChanged("Walk dog".to_string())));
    assert!(service.apply(Intent::AddRequested));
    assert!(!service.apply(Intent::AddRequested));
    let id = service.tasks()[0].id.clone();
    assert!(service.apply(Intent::RemoveRequested(id)));
    assert!(service.is_empty());
}

#[test]
fn unreadable_store_starts_empty_and_still_writes_normalized_list() {
    let service = TodoService::initialize(UnreadableStore::default(), UuidIdGenerator);

    assert!(service.is_empty());
    assert!(service.last_persist_error().is_none());
    assert_eq!(
        service.store().writes,
        [(TODOS_STORAGE_KEY.to_string(), "[]".to_string())]
    );
}

#[test]
fn add_still_works_after_max_numeric_id_was_stored() {
    let max_id = u64::MAX.to_string();
    let mut service = sequential(MemoryStore::with_entry(
        TODOS_STORAGE_KEY,
        format!(r#"[{{"id":"{max_id}","text":"Saved"}}]"#),
    ));

    service.set_draft("Buy milk");
    let id = service.add_task().unwrap();

    assert_ne!(id.as_str(), max_id);
    assert_eq!(service.len(), 2);
    assert_eq!(service.draft(), "");
    assert_eq!(service.tasks()[1].text, "Buy milk");
}
