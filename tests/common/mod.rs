//! Common test utilities for integration tests
#![allow(dead_code)]

use std::io;
use todo_reminder::{Error, KeyValueStore, MemoryStore, TodoId, TodoStore};

/// Create an empty store backed by memory
pub fn get_test_store() -> TodoStore<MemoryStore> {
    TodoStore::load(MemoryStore::new())
}

/// Create a store holding `n` items with ids 1..=n
pub fn store_with_items(n: usize) -> TodoStore<MemoryStore> {
    let mut store = get_test_store();
    for i in 1..=n {
        store
            .add(&format!("Task {}", i), "2024-01-01", "09:00")
            .unwrap();
    }
    store
}

/// Ids of the store's items in display order
pub fn ids<S: KeyValueStore>(store: &TodoStore<S>) -> Vec<TodoId> {
    store.items().iter().map(|item| item.id).collect()
}

/// Backend that accepts reads and refuses every write
#[derive(Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_writes: bool,
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> todo_reminder::Result<()> {
        if self.fail_writes {
            return Err(Error::Io(io::Error::other("disk full")));
        }
        self.inner.set(key, value)
    }
}
