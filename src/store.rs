//! The to-do store
//!
//! [`TodoStore`] owns the authoritative list, the selection set and the
//! theme, and mirrors every mutation to its [`Storage`] before it becomes
//! visible. A mutation is built on a copy of the list; the copy replaces
//! the live list only after the snapshot has been written, so a failed
//! write changes nothing.

use crate::error::Result;
use crate::storage::{KeyValueStore, Storage};
use crate::todo::{Selection, Theme, TodoId, TodoItem, TodoList};
use crate::validation;
use tracing::debug;

/// Authoritative to-do state mirrored to a key-value backend
///
/// Owns the ordered list, the selection set and the theme. The list and
/// theme are saved through [`Storage`] after every change; the selection
/// is session state and is never saved.
pub struct TodoStore<S> {
    list: TodoList,
    selection: Selection,
    theme: Theme,
    storage: Storage<S>,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Create a store from the state saved in `backend`
    ///
    /// Absent or invalid saved state yields an empty list and the light theme.
    pub fn load(backend: S) -> Self {
        let storage = Storage::new(backend);
        let list = storage.load_list();
        let theme = storage.load_theme();
        debug!(items = list.len(), %theme, "loaded store");
        Self {
            list,
            selection: Selection::new(),
            theme,
            storage,
        }
    }

    /// All items in display order
    pub fn items(&self) -> &[TodoItem] {
        self.list.items()
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    /// Persist `list` and make it the live list
    fn commit(&mut self, list: TodoList) -> Result<()> {
        self.storage.save_list(&list)?;
        self.list = list;

        let list = &self.list;
        self.selection.retain(|id| list.contains(id));
        Ok(())
    }

    /// Add a new item at the end of the list
    ///
    /// # Arguments
    /// * `text` - Task description, must not be empty
    /// * `date` - Date in YYYY-MM-DD format
    /// * `time` - Reminder time in HH:MM or HH:MM:SS format
    ///
    /// # Returns
    /// The created item, or a validation error with nothing changed
    pub fn add(&mut self, text: &str, date: &str, time: &str) -> Result<TodoItem> {
        validation::validate_new_item(text, date, time)?;

        let mut list = self.list.clone();
        let id = list.generate_id();
        let item = TodoItem::new(id, text, date, time);
        list.push(item.clone());
        self.commit(list)?;

        debug!(%id, reminder = %item.reminder, "added item");
        Ok(item)
    }

    /// Delete the item with `id`
    ///
    /// A missing id is not an error. The snapshot is rewritten either way.
    ///
    /// # Returns
    /// `true` if an item was removed
    pub fn delete(&mut self, id: TodoId) -> Result<bool> {
        let mut list = self.list.clone();
        let removed = list.remove(id).is_some();
        self.commit(list)?;

        debug!(%id, removed, "delete");
        Ok(removed)
    }

    /// Replace the text of the item with `id`
    ///
    /// Blank text (after trimming) or a missing id leaves everything as is.
    /// The text is stored untrimmed.
    ///
    /// # Returns
    /// `true` if the item was changed
    pub fn edit(&mut self, id: TodoId, new_text: &str) -> Result<bool> {
        if new_text.trim().is_empty() || !self.list.contains(id) {
            return Ok(false);
        }

        let mut list = self.list.clone();
        if let Some(item) = list.get_mut(id) {
            item.value = new_text.to_string();
        }
        self.commit(list)?;

        debug!(%id, "edited item");
        Ok(true)
    }

    /// Replace the text of the item at display position `index`
    ///
    /// Same rules as [`TodoStore::edit`]. Prefer the id-based form: a
    /// position goes stale as soon as the list changes.
    pub fn edit_at(&mut self, index: usize, new_text: &str) -> Result<bool> {
        match self.list.items().get(index) {
            Some(item) => {
                let id = item.id;
                self.edit(id, new_text)
            }
            None => Ok(false),
        }
    }

    /// Delete every selected item and clear the selection
    ///
    /// # Returns
    /// The number of removed items
    pub fn bulk_delete(&mut self) -> Result<usize> {
        let mut list = self.list.clone();
        let removed = list.remove_all(self.selection.ids());
        self.commit(list)?;
        self.selection.clear();

        debug!(removed, "bulk delete");
        Ok(removed)
    }

    /// Select or unselect the item with `id`
    ///
    /// Ids that are not in the list are ignored.
    ///
    /// # Returns
    /// `true` if the item is selected afterwards
    pub fn toggle_select(&mut self, id: TodoId) -> bool {
        if !self.list.contains(id) {
            return false;
        }
        self.selection.toggle(id)
    }

    /// Whether every item is selected (vacuously true for an empty list)
    pub fn all_selected(&self) -> bool {
        self.selection.len() == self.list.len()
    }

    /// Select every item, or none if every item is already selected
    pub fn select_all(&mut self) {
        if self.all_selected() {
            self.selection.clear();
        } else {
            self.selection.select(self.list.ids());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Switch between light and dark and persist the choice
    ///
    /// # Returns
    /// The new theme
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme.toggled();
        self.storage.save_theme(theme)?;
        self.theme = theme;

        debug!(%theme, "theme changed");
        Ok(theme)
    }
}
