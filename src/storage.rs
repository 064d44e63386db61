//! Persistence layer
//!
//! The store keeps its state in a string key-value store shaped like a
//! browser's `localStorage`: the list under [`TODO_LIST_KEY`] as a JSON
//! array, and the theme under [`THEME_KEY`] as a bare string.

use crate::error::Result;
use crate::todo::{Theme, TodoList};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key holding the serialized list
pub const TODO_LIST_KEY: &str = "todoList";

/// Key holding the theme name
pub const THEME_KEY: &str = "theme";

/// A durable string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`
    ///
    /// The write is durable when this returns `Ok`.
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// Volatile store for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object file mapping keys to string values
///
/// The file is read once when opened and rewritten in full on every `set`.
pub struct FileStore {
    file_path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `file_path`
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// also treated as empty and will be overwritten by the next write.
    pub fn open(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let entries = Self::read_entries(&file_path);
        Self { file_path, entries }
    }

    fn read_entries(file_path: &Path) -> BTreeMap<String, String> {
        if !file_path.exists() {
            debug!(path = %file_path.display(), "data file not found, starting empty");
            return BTreeMap::new();
        }

        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %file_path.display(), error = %e, "cannot read data file, starting empty");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %file_path.display(), error = %e, "corrupt data file, starting empty");
            BTreeMap::new()
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);

        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.file_path, content)?;

        self.entries = entries;
        Ok(())
    }
}

/// Load/save adapter between the domain types and a key-value backend
pub struct Storage<S> {
    backend: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the saved list
    ///
    /// Returns an empty list if nothing was saved or the saved value does
    /// not parse.
    pub fn load_list(&self) -> TodoList {
        let Some(raw) = self.backend.get(TODO_LIST_KEY) else {
            return TodoList::new();
        };

        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "stored to-do list is invalid, starting empty");
                TodoList::new()
            }
        }
    }

    /// Overwrite the saved list
    pub fn save_list(&mut self, list: &TodoList) -> Result<()> {
        let content = serde_json::to_string(list)?;
        self.backend.set(TODO_LIST_KEY, content)?;
        debug!(items = list.len(), "saved to-do list");
        Ok(())
    }

    /// Load the saved theme, falling back to light
    pub fn load_theme(&self) -> Theme {
        self.backend
            .get(THEME_KEY)
            .and_then(|raw| match raw.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!(error = %e, "stored theme is invalid, using default");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Overwrite the saved theme
    pub fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.backend.set(THEME_KEY, theme.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoItem;

    #[test]
    fn test_empty_backend_loads_defaults() {
        let storage = Storage::new(MemoryStore::new());
        assert!(storage.load_list().is_empty());
        assert_eq!(storage.load_theme(), Theme::Light);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let mut backend = MemoryStore::new();
        backend.set(TODO_LIST_KEY, "{not json".to_string()).unwrap();
        backend.set(THEME_KEY, "purple".to_string()).unwrap();

        let storage = Storage::new(backend);
        assert!(storage.load_list().is_empty());
        assert_eq!(storage.load_theme(), Theme::Light);
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = Storage::new(MemoryStore::new());
        let mut list = TodoList::new();
        let id = list.generate_id();
        list.push(TodoItem::new(id, "Buy milk", "2024-01-01", "09:00"));

        storage.save_list(&list).unwrap();
        storage.save_theme(Theme::Dark).unwrap();

        assert_eq!(storage.load_list().items(), list.items());
        assert_eq!(storage.load_theme(), Theme::Dark);
        assert_eq!(storage.backend().get(THEME_KEY).as_deref(), Some("dark"));
    }
}
