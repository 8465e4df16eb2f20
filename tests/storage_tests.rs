use std::fs;

use pinlist::core::storage::{Storage, StorageError};
use pinlist::core::todo::{Item, TodoList};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn storage_in(dir: &TempDir) -> Storage {
    Storage::new(dir.path().join("todos.csv"))
}

fn records(items: &[Item]) -> Vec<(bool, &str)> {
    items
        .iter()
        .map(|item| (item.completed, item.content.as_str()))
        .collect()
}

// ============================================================================
// Load / Save Tests
// ============================================================================

#[test]
fn test_missing_file_is_created_with_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);

    let items = storage.load().unwrap();

    assert!(items.is_empty());
    let raw = fs::read_to_string(storage.path()).unwrap();
    assert_eq!(raw.trim_end(), "completed,content");
}

#[test]
fn test_save_then_load_preserves_order_and_awkward_text() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    let items = vec![
        Item::new(false, "Buy milk"),
        Item::new(true, "Call Ann, then Bob"),
        Item::new(false, "Say \"hello\""),
        Item::new(true, "line one\nline two"),
        Item::new(false, "待办事项"),
    ];

    storage.save(&items).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(records(&loaded), records(&items));
}

#[test]
fn test_empty_list_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);

    storage.save(&[]).unwrap();

    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_load_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage
        .save(&[Item::new(true, "a"), Item::new(false, "b")])
        .unwrap();

    let first = storage.load().unwrap();
    let second = storage.load().unwrap();

    assert_eq!(records(&first), records(&second));
}

#[test]
fn test_completed_column_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(
        storage.path(),
        "completed,content\nTRUE,a\nTrue,b\nfalse,c\nyes,d\n",
    )
    .unwrap();

    let loaded = storage.load().unwrap();

    let flags: Vec<bool> = loaded.iter().map(|item| item.completed).collect();
    assert_eq!(flags, vec![true, true, false, false]);
}

#[test]
fn test_save_writes_lowercase_flags() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);

    storage
        .save(&[Item::new(true, "done"), Item::new(false, "open")])
        .unwrap();

    let raw = fs::read_to_string(storage.path()).unwrap();
    assert_eq!(raw, "completed,content\ntrue,done\nfalse,open\n");
}

#[test]
fn test_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);

    storage.save(&[Item::new(false, "x")]).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("todos.csv")]);
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(dir.path().join("nested").join("todos.csv"));

    storage.save(&[Item::new(false, "deep")]).unwrap();

    assert_eq!(records(&storage.load().unwrap()), vec![(false, "deep")]);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_row_with_missing_column_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(storage.path(), "completed,content\nfalse,ok\ntrue\n").unwrap();

    let result = storage.load();

    assert!(matches!(result, Err(StorageError::Csv(_))));
}

#[test]
fn test_wrong_header_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(storage.path(), "done,text\nfalse,a\n").unwrap();

    match storage.load() {
        Err(StorageError::Header(found)) => assert_eq!(found, "done,text"),
        other => panic!("expected header error, got {other:?}"),
    }
}

#[test]
fn test_error_message_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(storage.path(), "done,text\n").unwrap();

    let message = storage.load().unwrap_err().to_string();

    assert!(message.contains("completed,content"));
}

// ============================================================================
// Model + Storage
// ============================================================================

#[test]
fn test_delete_completed_then_reload() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    let mut list = TodoList::from_items(vec![
        Item::new(false, "A"),
        Item::new(true, "B"),
        Item::new(true, "C"),
        Item::new(false, "D"),
    ]);

    let removed = list.delete_where(|item| item.completed);
    storage.save(list.items()).unwrap();

    assert_eq!(removed.len(), 2);
    assert_eq!(
        records(&storage.load().unwrap()),
        vec![(false, "A"), (false, "D")]
    );
}
