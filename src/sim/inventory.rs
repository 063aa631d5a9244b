use std::collections::BTreeMap;

use crate::model::{InventoryEntry, ItemPrototype};

/// Item id → held quantity, with per-entry effect snapshots.
///
/// Enforces `1 <= quantity <= max_stack` for every stored entry.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    entries: BTreeMap<String, InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `proto`. Returns how many units were actually
    /// kept after the stack cap.
    ///
    /// Stackable items top up an existing entry; anything else replaces it
    /// with a fresh entry and a fresh copy of the prototype's effects.
    pub fn add(&mut self, proto: &ItemPrototype, quantity: u32) -> u32 {
        if quantity == 0 {
            return 0;
        }
        if proto.stackable {
            if let Some(existing) = self.entries.get_mut(&proto.id) {
                let before = existing.quantity;
                existing.quantity = before.saturating_add(quantity).min(proto.max_stack);
                return existing.quantity.saturating_sub(before);
            }
        }
        let kept = quantity.min(proto.max_stack);
        self.entries.insert(
            proto.id.clone(),
            InventoryEntry {
                item_id: proto.id.clone(),
                quantity: kept,
                effects: proto.effects.clone(),
            },
        );
        kept
    }

    /// Take `quantity` units away. Returns `None` if the item is not held,
    /// otherwise the remaining quantity; the entry is evicted at zero.
    pub fn remove(&mut self, item_id: &str, quantity: u32) -> Option<u32> {
        let entry = self.entries.get_mut(item_id)?;
        if quantity >= entry.quantity {
            self.entries.remove(item_id);
            return Some(0);
        }
        entry.quantity -= quantity;
        Some(entry.quantity)
    }

    pub fn get(&self, item_id: &str) -> Option<&InventoryEntry> {
        self.entries.get(item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.entries.contains_key(item_id)
    }

    /// Held quantity, zero when absent.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.entries.get(item_id).map_or(0, |e| e.quantity)
    }

    pub fn entries(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeKind, ItemEffect};

    fn proto(id: &str, stackable: bool, max_stack: u32) -> ItemPrototype {
        ItemPrototype {
            id: id.to_string(),
            name: id.to_string(),
            describe: None,
            icon: None,
            max_stack,
            stackable,
            effects: vec![ItemEffect::instant(AttributeKind::Satiety, 10.0)],
            category: None,
        }
    }

    #[test]
    fn stackable_tops_up_to_cap() {
        let apple = proto("apple", true, 8);
        let mut inv = Inventory::new();
        assert_eq!(inv.add(&apple, 3), 3);
        assert_eq!(inv.add(&apple, 7), 5);
        assert_eq!(inv.quantity_of("apple"), 8);
        assert_eq!(inv.add(&apple, 1), 0);
        assert_eq!(inv.quantity_of("apple"), 8);
    }

    #[test]
    fn non_stackable_overwrites_entry() {
        let drink = proto("drink", false, 2);
        let mut inv = Inventory::new();
        inv.add(&drink, 2);
        inv.add(&drink, 1);
        assert_eq!(inv.quantity_of("drink"), 1);
        inv.add(&drink, 5);
        assert_eq!(inv.quantity_of("drink"), 2);
    }

    #[test]
    fn entry_snapshots_effects() {
        let mut bread = proto("bread", true, 4);
        let mut inv = Inventory::new();
        inv.add(&bread, 1);
        bread.effects.clear();
        assert_eq!(inv.get("bread").unwrap().effects.len(), 1);
    }

    #[test]
    fn zero_quantity_add_creates_nothing() {
        let mut inv = Inventory::new();
        assert_eq!(inv.add(&proto("apple", true, 8), 0), 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn remove_absent_is_none() {
        let mut inv = Inventory::new();
        assert_eq!(inv.remove("ghost", 1), None);
    }

    #[test]
    fn remove_decrements_then_evicts() {
        let mut inv = Inventory::new();
        inv.add(&proto("apple", true, 8), 5);
        assert_eq!(inv.remove("apple", 2), Some(3));
        assert_eq!(inv.remove("apple", 10), Some(0));
        assert!(!inv.contains("apple"));
        assert_eq!(inv.len(), 0);
    }
}
