use crate::todo::todo_item::{TodoId, TodoItem};
use std::collections::HashSet;

/// Ordered list of to-do items
///
/// Insertion order is display order. The list issues ids from a monotonic
/// counter that always stays above every id it holds, so a freshly issued
/// id never collides with an existing item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    pub(crate) items: Vec<TodoItem>,

    /// Next id to hand out
    pub(crate) next_id: u64,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TodoList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// All items in display order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of all items in display order
    pub fn ids(&self) -> Vec<TodoId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Whether an item with `id` exists
    pub fn contains(&self, id: TodoId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Find an item by its id
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Find an item by its id and return a mutable reference
    pub fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Issue a new unique id
    pub fn generate_id(&mut self) -> TodoId {
        let id = TodoId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    /// Append an item to the end of the list
    ///
    /// The id counter is advanced past the item's id so later ids stay unique.
    pub fn push(&mut self, item: TodoItem) {
        if item.id.0 >= self.next_id {
            self.next_id = item.id.0 + 1;
        }
        self.items.push(item);
    }

    /// Remove an item from the list and return it
    ///
    /// # Arguments
    /// * `id` - The item id to remove
    ///
    /// # Returns
    /// The removed item if found
    pub fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Remove every item whose id is in `ids`
    ///
    /// # Returns
    /// The number of removed items
    pub fn remove_all(&mut self, ids: &HashSet<TodoId>) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id));
        before - self.items.len()
    }
}
