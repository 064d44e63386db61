mod common;

use common::{FailingStore, get_test_store, ids, store_with_items};
use std::collections::HashSet;
use todo_reminder::{
    MemoryStore, THEME_KEY, TODO_LIST_KEY, Theme, TodoId, TodoList, TodoStore, ValidationError,
};

/// Deserialize the persisted snapshot of a store
fn persisted(store: &TodoStore<MemoryStore>) -> TodoList {
    store.storage().load_list()
}

// 空のリストへの追加テスト
// "Buy milk" を追加し、reminder が date + "T" + time になることを確認
#[test]
fn test_add_to_empty_list() {
    let mut store = get_test_store();
    store.add("Buy milk", "2024-01-01", "09:00").unwrap();

    assert_eq!(store.items().len(), 1);
    let item = &store.items()[0];
    assert_eq!(item.value, "Buy milk");
    assert_eq!(item.date, "2024-01-01");
    assert_eq!(item.reminder, "2024-01-01T09:00");
    assert!(!item.completed);
}

// 追加ごとにリスト長が1ずつ増え、IDが一意であることを確認
#[test]
fn test_add_grows_by_one_with_unique_ids() {
    let mut store = get_test_store();
    let cases = [
        ("a", "2024-01-01", "00:00"),
        ("b", "2024-12-31", "23:59"),
        ("same", "2024-06-15", "12:30:45"),
        ("same", "2024-06-15", "12:30:45"),
    ];

    for (i, (text, date, time)) in cases.iter().enumerate() {
        let item = store.add(text, date, time).unwrap();
        assert_eq!(store.items().len(), i + 1);
        assert_eq!(item.reminder, format!("{}T{}", date, time));
    }

    let unique: HashSet<TodoId> = ids(&store).into_iter().collect();
    assert_eq!(unique.len(), cases.len());
}

// 不正な入力では何も変更されないことを確認
#[test]
fn test_add_validation_leaves_list_unchanged() {
    let mut store = store_with_items(1);
    let before = store.items().to_vec();

    let cases = [
        ("", "2024-01-01", "09:00", ValidationError::EmptyTask),
        ("Buy milk", "", "09:00", ValidationError::MissingSchedule),
        ("Buy milk", "2024-01-01", "", ValidationError::MissingSchedule),
        (
            "Buy milk",
            "tomorrow",
            "09:00",
            ValidationError::InvalidDate("tomorrow".to_string()),
        ),
        (
            "Buy milk",
            "2024-01-01",
            "25:00",
            ValidationError::InvalidTime("25:00".to_string()),
        ),
    ];

    for (text, date, time, expected) in cases {
        let err = store.add(text, date, time).unwrap_err();
        assert_eq!(err.as_validation(), Some(&expected));
        assert_eq!(store.items(), before.as_slice());
        assert_eq!(persisted(&store).items(), before.as_slice());
    }
}

// 存在しないIDの削除は何もしないことを確認
#[test]
fn test_delete_missing_id_is_noop() {
    let mut store = store_with_items(3);
    assert!(!store.delete(TodoId(99)).unwrap());
    assert_eq!(store.items().len(), 3);
}

// 削除テスト
// 削除したIDが選択からも外れ、永続化されることを確認
#[test]
fn test_delete_removes_and_unselects() {
    let mut store = store_with_items(3);
    store.toggle_select(TodoId(2));

    assert!(store.delete(TodoId(2)).unwrap());
    assert_eq!(ids(&store), vec![TodoId(1), TodoId(3)]);
    assert!(store.selection().is_empty());
    assert_eq!(persisted(&store).ids(), vec![TodoId(1), TodoId(3)]);
}

// IDによる編集テスト
// 空白のみのテキストでは変更されないことを確認
#[test]
fn test_edit_by_id() {
    let mut store = store_with_items(2);

    assert!(store.edit(TodoId(2), "Call mom ").unwrap());
    assert_eq!(store.items()[1].value, "Call mom ");
    assert_eq!(persisted(&store).items()[1].value, "Call mom ");

    assert!(!store.edit(TodoId(2), "   ").unwrap());
    assert!(!store.edit(TodoId(7), "ghost").unwrap());
    assert_eq!(store.items()[1].value, "Call mom ");
}

// 位置による編集テスト
#[test]
fn test_edit_at_position() {
    let mut store = store_with_items(3);
    store.delete(TodoId(1)).unwrap();

    // Position 0 now holds the item with id 2
    assert!(store.edit_at(0, "second").unwrap());
    assert_eq!(store.list().get(TodoId(2)).unwrap().value, "second");
    assert!(!store.edit_at(5, "out of range").unwrap());
}

// シナリオ: ID [1,2,3] で 2 を選択して一括削除 → [1,3]、選択は空
#[test]
fn test_toggle_select_then_bulk_delete() {
    let mut store = store_with_items(3);
    assert_eq!(ids(&store), vec![TodoId(1), TodoId(2), TodoId(3)]);

    assert!(store.toggle_select(TodoId(2)));
    assert_eq!(store.bulk_delete().unwrap(), 1);

    assert_eq!(ids(&store), vec![TodoId(1), TodoId(3)]);
    assert!(store.selection().is_empty());
    assert_eq!(persisted(&store).ids(), vec![TodoId(1), TodoId(3)]);
}

// 一括削除テスト
// 選択したものだけが削除されることを確認
#[test]
fn test_bulk_delete_removes_exactly_selection() {
    let mut store = store_with_items(6);
    for id in [1, 4, 6] {
        store.toggle_select(TodoId(id));
    }

    assert_eq!(store.bulk_delete().unwrap(), 3);
    assert_eq!(ids(&store), vec![TodoId(2), TodoId(3), TodoId(5)]);
    assert!(store.selection().is_empty());
}

// 存在しないIDの選択は無視されることを確認
#[test]
fn test_toggle_select_ignores_unknown_ids() {
    let mut store = store_with_items(2);
    assert!(!store.toggle_select(TodoId(42)));
    assert!(store.selection().is_empty());
}

// 全選択の切り替えテスト
// 2回呼ぶと元の選択状態 (なし/すべて) に戻ることを確認
#[test]
fn test_select_all_toggles() {
    let mut store = store_with_items(3);

    store.select_all();
    assert_eq!(store.selection().len(), 3);
    assert!(store.all_selected());
    store.select_all();
    assert!(store.selection().is_empty());

    // Partial selection goes to all first
    store.toggle_select(TodoId(1));
    store.select_all();
    assert_eq!(store.selection().len(), 3);
    store.select_all();
    store.select_all();
    assert_eq!(store.selection().len(), 3);
}

// 空のリストでの全選択テスト
// 何度呼んでも選択は空のままであることを確認
#[test]
fn test_select_all_on_empty_list_is_idempotent() {
    let mut store = get_test_store();
    store.select_all();
    store.select_all();
    assert!(store.selection().is_empty());
    assert!(store.all_selected());
}

// 選択解除テスト
#[test]
fn test_clear_selection() {
    let mut store = store_with_items(2);
    store.select_all();
    store.clear_selection();
    assert!(store.selection().is_empty());
}

// 永続化スナップショットがメモリ上のリストと一致することを確認
#[test]
fn test_snapshot_matches_memory_after_mixed_operations() {
    let mut store = store_with_items(4);
    store.edit(TodoId(3), "renamed").unwrap();
    store.delete(TodoId(1)).unwrap();
    store.toggle_select(TodoId(4));
    store.bulk_delete().unwrap();
    store.add("late", "2024-02-02", "08:15").unwrap();

    assert_eq!(persisted(&store).items(), store.items());

    // Reopening the same backend yields the same list
    let raw = store.storage().backend().clone();
    let reopened = TodoStore::load(raw);
    assert_eq!(reopened.items(), store.items());
}

// シナリオ: テーマ light → dark、保存キーが更新されることを確認
#[test]
fn test_toggle_theme_persists() {
    let mut store = get_test_store();
    assert_eq!(store.theme(), Theme::Light);

    assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(store.theme(), Theme::Dark);

    let backend = store.storage().backend();
    assert_eq!(
        todo_reminder::KeyValueStore::get(backend, THEME_KEY).as_deref(),
        Some("dark")
    );
}

// 書き込み失敗時にメモリと永続化状態が乖離しないことを確認
#[test]
fn test_failed_write_changes_nothing() {
    let mut seeded = store_with_items(2);
    seeded.toggle_theme().unwrap();
    let backend = FailingStore {
        inner: seeded.storage().backend().clone(),
        fail_writes: true,
    };

    let mut store = TodoStore::load(backend);
    store.toggle_select(TodoId(1));

    assert!(store.add("new", "2024-01-01", "09:00").is_err());
    assert!(store.delete(TodoId(1)).is_err());
    assert!(store.edit(TodoId(2), "changed").is_err());
    assert!(store.bulk_delete().is_err());
    assert!(store.toggle_theme().is_err());

    assert_eq!(ids(&store), vec![TodoId(1), TodoId(2)]);
    assert_eq!(store.items()[1].value, "Task 2");
    assert!(store.selection().contains(TodoId(1)));
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.storage().load_list().items(), store.items());
}

// 旧クライアントのスナップショット読み込みテスト
// 小数IDが振り直され、次のIDが続きになることを確認
#[test]
fn test_load_snapshot_from_older_client() {
    let mut backend = MemoryStore::new();
    todo_reminder::KeyValueStore::set(
        &mut backend,
        TODO_LIST_KEY,
        r#"[{"id":0.5512,"value":"Buy milk","date":"2024-01-01","reminder":"2024-01-01T09:00","completed":false}]"#
            .to_string(),
    )
    .unwrap();

    let mut store = TodoStore::load(backend);
    assert_eq!(ids(&store), vec![TodoId(1)]);

    let item = store.add("Next", "2024-01-02", "10:00").unwrap();
    assert_eq!(item.id, TodoId(2));
}
