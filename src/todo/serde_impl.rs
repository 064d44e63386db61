//! Serialization and deserialization implementations for TodoList
//!
//! A list is persisted as a bare JSON array of items. Loading goes through
//! a lenient helper type so that snapshots written by older clients load
//! intact: those clients issued fractional random ids (e.g. `0.7134...`),
//! which are reassigned here from the list's counter.

use super::todo_item::{TodoId, TodoItem};
use super::todo_list::TodoList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// Largest integer an f64 represents exactly
const MAX_EXACT_ID: f64 = 9_007_199_254_740_992.0;

/// Item as found in a stored snapshot, before id normalization
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredItem {
    id: Option<f64>,
    value: String,
    date: String,
    reminder: String,
    completed: bool,
}

/// Accept an id only if it is a positive integer an f64 holds exactly
fn integral_id(raw: Option<f64>) -> Option<u64> {
    let raw = raw?;
    if raw.is_finite() && raw.fract() == 0.0 && raw >= 1.0 && raw <= MAX_EXACT_ID {
        Some(raw as u64)
    } else {
        None
    }
}

impl<'de> Deserialize<'de> for TodoList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = Vec::<StoredItem>::deserialize(deserializer)?;

        // First pass: keep the first occurrence of every usable id
        let mut seen = HashSet::new();
        let kept: Vec<Option<u64>> = stored
            .iter()
            .map(|item| integral_id(item.id).filter(|id| seen.insert(*id)))
            .collect();

        let mut list = TodoList::new();
        list.next_id = kept.iter().flatten().max().map_or(1, |max| max + 1);

        // Second pass: issue fresh ids for the rest, preserving order
        for (item, id) in stored.into_iter().zip(kept) {
            let id = match id {
                Some(id) => TodoId(id),
                None => list.generate_id(),
            };
            list.push(TodoItem {
                id,
                value: item.value,
                date: item.date,
                reminder: item.reminder,
                completed: item.completed,
            });
        }

        Ok(list)
    }
}

impl Serialize for TodoList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}
