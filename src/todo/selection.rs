use crate::todo::todo_item::TodoId;
use std::collections::HashSet;

/// Ids currently marked for bulk action
///
/// Pure UI state: never persisted. The owning store keeps it a subset of
/// the ids in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<TodoId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present
    ///
    /// # Returns
    /// `true` if the id is selected afterwards
    pub fn toggle(&mut self, id: TodoId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Replace the selection with `ids`
    pub fn select(&mut self, ids: impl IntoIterator<Item = TodoId>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids for which `keep` returns false
    pub fn retain(&mut self, mut keep: impl FnMut(TodoId) -> bool) {
        self.ids.retain(|id| keep(*id));
    }

    /// The selected ids as a set
    pub fn ids(&self) -> &HashSet<TodoId> {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut selection = Selection::new();
        assert!(selection.toggle(TodoId(2)));
        assert!(selection.contains(TodoId(2)));
        assert!(!selection.toggle(TodoId(2)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_keeps_existing() {
        let mut selection = Selection::new();
        selection.toggle(TodoId(3));
        selection.select([TodoId(1), TodoId(3)]);
        assert_eq!(selection.len(), 2);
    }
}
