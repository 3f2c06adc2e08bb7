//! Selection state for the dropdown.

use crate::item::{Item, Key, key_of};

/// Selection mode, fixed when the dropdown is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one item (plain dropdown).
    Single,
    /// Any subset of the list (checkbox style).
    #[default]
    Multi,
}

impl SelectionMode {
    pub fn from_multiple(multiple_select: bool) -> Self {
        if multiple_select {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }
}

/// Selected items and their keys.
///
/// `ids[i]` is always the key of `items[i]`.
#[derive(Debug, Clone)]
pub struct Selection {
    mode: SelectionMode,
    key_field: String,
    ids: Vec<Key>,
    items: Vec<Item>,
}

impl Selection {
    pub fn new(mode: SelectionMode, key_field: impl Into<String>) -> Self {
        Self {
            mode,
            key_field: key_field.into(),
            ids: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Create single-selection state.
    pub fn single(key_field: impl Into<String>) -> Self {
        Self::new(SelectionMode::Single, key_field)
    }

    /// Create multi-selection state.
    pub fn multi(key_field: impl Into<String>) -> Self {
        Self::new(SelectionMode::Multi, key_field)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// Keys of the selected items, in selection order.
    pub fn ids(&self) -> &[Key] {
        &self.ids
    }

    /// Selected items, in selection order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if an item with `key` is selected.
    pub fn is_selected(&self, key: &Key) -> bool {
        self.ids.contains(key)
    }

    /// Check if `item` is selected.
    pub fn contains(&self, item: &Item) -> bool {
        self.is_selected(&key_of(item, &self.key_field))
    }

    /// Whether every item of a list of `total` items is selected.
    pub fn is_all_selected(&self, total: usize) -> bool {
        !self.ids.is_empty() && self.ids.len() == total
    }

    /// Set or unset `item`. Returns true if the selection changed.
    ///
    /// Multi mode adds by key (no duplicates) or removes every entry with
    /// that key. Single mode replaces the whole selection with `[item]` or
    /// nothing.
    pub fn toggle(&mut self, item: &Item, selected: bool) -> bool {
        let key = key_of(item, &self.key_field);
        match self.mode {
            SelectionMode::Multi => {
                if selected {
                    if self.ids.contains(&key) {
                        return false;
                    }
                    self.items.push(item.clone());
                } else {
                    let before = self.items.len();
                    let key_field = &self.key_field;
                    self.items.retain(|it| key_of(it, key_field) != key);
                    if self.items.len() == before {
                        return false;
                    }
                }
                self.sync_ids();
                true
            }
            SelectionMode::Single => {
                if selected {
                    self.items = vec![item.clone()];
                    self.ids = vec![key];
                } else {
                    if self.items.is_empty() {
                        return false;
                    }
                    self.clear();
                }
                true
            }
        }
    }

    /// Select every item of `data`, in list order.
    pub fn select_all(&mut self, data: &[Item]) {
        self.items = data.to_vec();
        self.sync_ids();
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.items.clear();
    }

    /// Get the single selected item (for Single mode).
    pub fn first(&self) -> Option<&Item> {
        self.items.first()
    }

    fn sync_ids(&mut self) {
        let key_field = &self.key_field;
        self.ids = self.items.iter().map(|it| key_of(it, key_field)).collect();
    }
}
