#![allow(dead_code)]

use lifesim::model::*;
use lifesim::{Character, ItemCatalog};

/// Seeded catalog plus a couple of test-only timed items.
pub fn build_test_catalog() -> ItemCatalog {
    let mut catalog = ItemCatalog::seeded().unwrap();
    catalog
        .add(ItemPrototype {
            id: "slow_poison".to_string(),
            name: "Slow Poison".to_string(),
            describe: None,
            icon: None,
            max_stack: 3,
            stackable: true,
            effects: vec![ItemEffect::timed(AttributeKind::Health, -1.0, 10.0)],
            category: Some("hazard".to_string()),
        })
        .unwrap();
    catalog
        .add(ItemPrototype {
            id: "hemlock".to_string(),
            name: "Hemlock".to_string(),
            describe: None,
            icon: None,
            max_stack: 1,
            stackable: false,
            effects: vec![ItemEffect::instant(AttributeKind::Health, -5.0)],
            category: Some("hazard".to_string()),
        })
        .unwrap();
    catalog
}

pub fn character_with(attrs: &[(AttributeKind, f64)]) -> Character {
    let mut c = Character::new("hero", "Hero");
    for (kind, value) in attrs {
        c.set_attribute(*kind, *value);
    }
    c.drain_events();
    c
}

pub fn count_events(c: &Character, type_str: &str) -> usize {
    c.events()
        .iter()
        .filter(|e| e.kind.type_str() == type_str)
        .count()
}
