use deskpad_core::{KvBackend, MemoryKv, TaskFilter, TaskService, TASKS_KEY};
use uuid::Uuid;

#[test]
fn add_prepends_newest_first() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);

    tasks.add("Buy milk").unwrap();
    tasks.add("Walk dog").unwrap();

    let all = tasks.filtered(TaskFilter::All);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Walk dog");
    assert_eq!(all[1].title, "Buy milk");
}

#[test]
fn add_trims_title_before_storage() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);

    tasks.add("  water plants  ").unwrap();
    assert_eq!(tasks.tasks()[0].title, "water plants");
}

#[test]
fn add_whitespace_only_is_a_noop() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);

    assert!(tasks.add("   \t ").is_none());
    assert!(tasks.tasks().is_empty());
    // nothing was persisted either
    assert!(kv.raw(TASKS_KEY).is_none());
}

#[test]
fn toggle_flips_completed_and_updates_counts() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);

    let milk = tasks.add("Buy milk").unwrap();
    tasks.add("Walk dog").unwrap();

    tasks.toggle(milk);
    let counts = tasks.counts();
    assert_eq!(counts.all, 2);
    assert_eq!(counts.active, 1);
    assert_eq!(counts.completed, 1);
    assert_eq!(tasks.completion_rate(), 50);

    tasks.toggle(milk);
    assert_eq!(tasks.counts().completed, 0);
}

#[test]
fn toggle_unknown_id_is_a_noop() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);
    tasks.add("one").unwrap();

    tasks.toggle(Uuid::new_v4());
    assert_eq!(tasks.counts().completed, 0);
}

#[test]
fn counts_invariant_holds_across_operation_sequences() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);

    let a = tasks.add("a").unwrap();
    let b = tasks.add("b").unwrap();
    tasks.add("c").unwrap();
    tasks.toggle(a);
    tasks.toggle(b);
    tasks.edit(a, "a2");
    tasks.delete(b);
    tasks.toggle(a);

    let counts = tasks.counts();
    assert_eq!(counts.all, counts.active + counts.completed);
}

#[test]
fn completion_rate_is_zero_when_empty_and_rounds_otherwise() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);
    assert_eq!(tasks.completion_rate(), 0);

    let a = tasks.add("a").unwrap();
    tasks.add("b").unwrap();
    tasks.add("c").unwrap();
    tasks.toggle(a);
    // 1 of 3 -> 33.33 rounds down
    assert_eq!(tasks.completion_rate(), 33);

    let b = tasks.tasks()[1].id;
    tasks.toggle(b);
    // 2 of 3 -> 66.67 rounds up
    assert_eq!(tasks.completion_rate(), 67);
}

#[test]
fn edit_replaces_title_and_rejects_whitespace_only() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);
    let id = tasks.add("draft").unwrap();

    tasks.edit(id, "  final  ");
    assert_eq!(tasks.tasks()[0].title, "final");

    tasks.edit(id, "   ");
    assert_eq!(tasks.tasks()[0].title, "final");
}

#[test]
fn delete_removes_matching_task_only() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);
    let a = tasks.add("a").unwrap();
    tasks.add("b").unwrap();

    tasks.delete(a);
    assert_eq!(tasks.tasks().len(), 1);
    assert_eq!(tasks.tasks()[0].title, "b");

    tasks.delete(Uuid::new_v4());
    assert_eq!(tasks.tasks().len(), 1);
}

#[test]
fn filtered_views_preserve_insertion_order() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);
    let a = tasks.add("a").unwrap();
    tasks.add("b").unwrap();
    let c = tasks.add("c").unwrap();
    tasks.toggle(a);
    tasks.toggle(c);

    let active: Vec<&str> = tasks
        .filtered(TaskFilter::Active)
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(active, ["b"]);

    let completed: Vec<&str> = tasks
        .filtered(TaskFilter::Completed)
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    // newest first, untouched by filtering
    assert_eq!(completed, ["c", "a"]);
}

#[test]
fn collection_round_trips_through_the_backend() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);
    let id = tasks.add("persisted").unwrap();
    tasks.toggle(id);
    let snapshot = tasks.tasks().to_vec();

    let reloaded = TaskService::load(&kv);
    // field-for-field, timestamps compared by instant
    assert_eq!(reloaded.tasks(), snapshot.as_slice());
}

#[test]
fn rejected_writes_leave_in_memory_state_authoritative() {
    let kv = MemoryKv::new();
    let mut tasks = TaskService::load(&kv);
    tasks.add("kept on disk").unwrap();

    kv.set_fail_writes(true);
    tasks.add("memory only").unwrap();
    assert_eq!(tasks.tasks().len(), 2);

    // the stored blob still holds the last successful write
    let stored = kv.read(TASKS_KEY).unwrap().unwrap();
    assert!(stored.contains("kept on disk"));
    assert!(!stored.contains("memory only"));
}
