use deskpad_core::store::{load_collection, save_collection};
use deskpad_core::{KvBackend, MemoryKv, SqliteKv, Task, TaskService, NOTES_KEY, TASKS_KEY};

#[test]
fn absent_key_loads_as_empty_collection() {
    let kv = MemoryKv::new();
    let tasks: Vec<Task> = load_collection(&kv, TASKS_KEY);
    assert!(tasks.is_empty());
}

#[test]
fn corrupted_blob_loads_as_empty_collection() {
    let kv = MemoryKv::new();
    kv.seed(TASKS_KEY, "{not json at all");
    let tasks: Vec<Task> = load_collection(&kv, TASKS_KEY);
    assert!(tasks.is_empty());
}

#[test]
fn non_array_blob_loads_as_empty_collection() {
    let kv = MemoryKv::new();
    kv.seed(TASKS_KEY, r#"{"id": "not-a-sequence"}"#);
    let tasks: Vec<Task> = load_collection(&kv, TASKS_KEY);
    assert!(tasks.is_empty());
}

#[test]
fn save_then_load_round_trips_field_for_field() {
    let kv = MemoryKv::new();
    let original = vec![Task::new("alpha"), Task::new("beta")];
    save_collection(&kv, TASKS_KEY, &original);

    let loaded: Vec<Task> = load_collection(&kv, TASKS_KEY);
    // timestamps compare by instant through chrono, not by string form
    assert_eq!(loaded, original);
}

#[test]
fn collections_are_independently_keyed() {
    let kv = MemoryKv::new();
    save_collection(&kv, TASKS_KEY, &[Task::new("solo")]);

    let notes: Vec<deskpad_core::Note> = load_collection(&kv, NOTES_KEY);
    assert!(notes.is_empty());
    let tasks: Vec<Task> = load_collection(&kv, TASKS_KEY);
    assert_eq!(tasks.len(), 1);
}

#[test]
fn sqlite_backend_reads_back_what_it_wrote() {
    let kv = SqliteKv::open_in_memory().unwrap();
    assert!(kv.read("missing").unwrap().is_none());

    kv.write("k", "v1").unwrap();
    kv.write("k", "v2").unwrap();
    assert_eq!(kv.read("k").unwrap().as_deref(), Some("v2"));
}

#[test]
fn sqlite_store_survives_reopen_on_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deskpad.db");

    {
        let kv = SqliteKv::open(&path).unwrap();
        let mut tasks = TaskService::load(&kv);
        tasks.add("durable").unwrap();
    }

    let kv = SqliteKv::open(&path).unwrap();
    let tasks = TaskService::load(&kv);
    assert_eq!(tasks.tasks().len(), 1);
    assert_eq!(tasks.tasks()[0].title, "durable");
}

#[test]
fn corrupted_sqlite_blob_degrades_to_empty_without_error() {
    let kv = SqliteKv::open_in_memory().unwrap();
    kv.write(NOTES_KEY, "[[[").unwrap();

    let notes: Vec<deskpad_core::Note> = load_collection(&kv, NOTES_KEY);
    assert!(notes.is_empty());
}
