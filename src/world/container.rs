use std::collections::HashMap;

use super::model::Item;

/// Keyed item storage. Used both for what lies on a room's floor and for
/// the player's inventory. Keys are lower-cased item names.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Container {
    items: HashMap<String, Item>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, replacing whatever was stored under the same name.
    pub fn put(&mut self, name: &str, item: Item) {
        self.items.insert(name.to_lowercase(), item);
    }

    /// Remove and return the named item. Leaves the container untouched on a miss.
    pub fn take_by_name(&mut self, name: &str) -> Option<Item> {
        self.items.remove(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(&name.to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(&name.to_lowercase())
    }

    pub fn list_items(&self) -> &HashMap<String, Item> {
        &self.items
    }

    /// Items ordered by key, for stable display.
    pub fn sorted(&self) -> Vec<(&String, &Item)> {
        let mut entries: Vec<(&String, &Item)> = self.items.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ItemKind;

    fn rope() -> Item {
        Item::new("rope", "Rope", 5, ItemKind::Simple)
    }

    #[test]
    fn put_overwrites_same_name() {
        let mut chest = Container::new();
        chest.put("rope", rope());
        chest.put("Rope", Item::new("rope", "Old rope", 7, ItemKind::Simple));

        assert_eq!(chest.len(), 1);
        assert_eq!(chest.get("rope").map(|i| i.weight), Some(7));
    }

    #[test]
    fn take_missing_item_changes_nothing() {
        let mut chest = Container::new();
        chest.put("rope", rope());
        let before = chest.clone();

        assert!(chest.take_by_name("lantern").is_none());
        assert_eq!(chest, before);
    }

    #[test]
    fn take_removes_item() {
        let mut chest = Container::new();
        chest.put("rope", rope());

        let taken = chest.take_by_name("ROPE").expect("rope present");
        assert_eq!(taken.name, "rope");
        assert!(chest.is_empty());
    }
}
