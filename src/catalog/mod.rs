//! Item prototype registry.
//!
//! Built once at startup (usually via [`ItemCatalog::seeded`]), then handed to
//! characters by reference for every inventory operation.

mod seed;
mod validate;

use std::collections::BTreeMap;

use serde_json::Value;

pub use seed::SEED_FILES;
pub use validate::{prototype_from_value, validate_prototype};

use crate::error::{Error, Result};
use crate::model::{AttributeKind, ItemPrototype};

/// Bucket used by [`ItemCatalog::category_stats`] for items without a category.
pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Default, Clone)]
pub struct ItemCatalog {
    items: BTreeMap<String, ItemPrototype>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the bundled fruit, snack, and staple-food items.
    pub fn seeded() -> Result<Self> {
        let mut catalog = Self::new();
        for (name, json) in SEED_FILES {
            let loaded = catalog.load_json_str(json, false)?;
            tracing::debug!(file = *name, loaded, "loaded seed items");
        }
        Ok(catalog)
    }

    /// Insert a new prototype.
    ///
    /// Fails with `DuplicateId` if the id is taken; the existing entry is kept.
    pub fn add(&mut self, item: ItemPrototype) -> Result<()> {
        if self.items.contains_key(&item.id) {
            return Err(Error::DuplicateId(item.id));
        }
        validate_prototype(&item)?;
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Insert a prototype described by untyped JSON.
    ///
    /// A taken id fails with `DuplicateId` before the record is validated.
    pub fn add_json(&mut self, value: &Value) -> Result<()> {
        if let Some(id) = value["id"].as_str() {
            if self.has(id) {
                return Err(Error::DuplicateId(id.to_string()));
            }
        }
        let item = prototype_from_value(value)?;
        self.add(item)
    }

    /// Bulk insert. Existing ids are skipped unless `overwrite` is set.
    ///
    /// Returns how many items were stored. Items stored before a validation
    /// failure stay in the catalog.
    pub fn load_many(
        &mut self,
        items: impl IntoIterator<Item = ItemPrototype>,
        overwrite: bool,
    ) -> Result<usize> {
        let mut stored = 0;
        for item in items {
            if !overwrite && self.items.contains_key(&item.id) {
                continue;
            }
            validate_prototype(&item)?;
            self.items.insert(item.id.clone(), item);
            stored += 1;
        }
        Ok(stored)
    }

    /// Bulk insert from a JSON array of untyped item records.
    ///
    /// Records whose id is already stored are skipped unvalidated unless
    /// `overwrite` is set.
    pub fn load_json_str(&mut self, json: &str, overwrite: bool) -> Result<usize> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        let mut stored = 0;
        for value in &values {
            if !overwrite && value["id"].as_str().is_some_and(|id| self.has(id)) {
                continue;
            }
            let item = prototype_from_value(value)?;
            stored += self.load_many([item], overwrite)?;
        }
        Ok(stored)
    }

    pub fn get(&self, item_id: &str) -> Option<&ItemPrototype> {
        self.items.get(item_id)
    }

    pub fn has(&self, item_id: &str) -> bool {
        self.items.contains_key(item_id)
    }

    pub fn delete(&mut self, item_id: &str) -> bool {
        self.items.remove(item_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose name contains `keyword`, ignoring case.
    pub fn search_by_name(&self, keyword: &str) -> Vec<&ItemPrototype> {
        let needle = keyword.to_lowercase();
        self.items
            .values()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Items carrying at least one effect on `kind`.
    pub fn filter_by_effect(&self, kind: AttributeKind) -> Vec<&ItemPrototype> {
        self.items
            .values()
            .filter(|item| item.has_effect(kind))
            .collect()
    }

    pub fn all_items(&self) -> impl Iterator<Item = &ItemPrototype> {
        self.items.values()
    }

    /// Item count per category.
    pub fn category_stats(&self) -> BTreeMap<String, usize> {
        let mut stats = BTreeMap::new();
        for item in self.items.values() {
            let category = item.category.as_deref().unwrap_or(UNCATEGORIZED);
            *stats.entry(category.to_string()).or_insert(0) += 1;
        }
        stats
    }
}
