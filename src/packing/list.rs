//! Packing list state and its update operations.
//!
//! Every operation computes a new list from the current one and swaps it in,
//! so a reader never sees a half-applied change. The pure `with_*`/`without_*`
//! functions are the transitions; [`PackingList`] owns the current value.

use super::item::{Item, ItemId};
use crate::confirm::Confirm;
use tracing::info;

pub const CLEAR_LIST_PROMPT: &str = "Are you sure you want to delete all items?";

/// `items` with `item` appended. Duplicate ids are not checked.
pub fn with_item_added(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// `items` without the item whose id is `id`.
pub fn without_item(items: &[Item], id: ItemId) -> Vec<Item> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// `items` with the packed flag of `id` inverted.
pub fn with_item_toggled(items: &[Item], id: ItemId) -> Vec<Item> {
    items
        .iter()
        .map(|item| if item.id == id { item.toggled() } else { item.clone() })
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PackingList {
    items: Vec<Item>,
}

impl PackingList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append `item` and return its id.
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = item.id;
        info!(id, description = %item.description, quantity = item.quantity, "item added");
        self.items = with_item_added(&self.items, item);
        id
    }

    /// Remove the item with `id`. Returns `false` when nothing matched.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let next = without_item(&self.items, id);
        let removed = next.len() != self.items.len();
        if removed {
            info!(id, "item deleted");
        }
        self.items = next;
        removed
    }

    /// Flip the packed flag of `id`. Returns `false` when nothing matched.
    pub fn toggle_item(&mut self, id: ItemId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.items = with_item_toggled(&self.items, id);
        info!(id, "item toggled");
        true
    }

    /// Empty the list if `gate` confirms. Returns whether the list was cleared.
    pub fn clear_list<C>(&mut self, gate: &mut C) -> bool
    where
        C: Confirm + ?Sized,
    {
        if !gate.confirm(CLEAR_LIST_PROMPT) {
            info!(items = self.items.len(), "clear declined");
            return false;
        }
        info!(items = self.items.len(), "list cleared");
        self.items = Vec::new();
        true
    }
}
