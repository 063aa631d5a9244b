//! The character aggregate: gauges, inventory, and active timed effects.
//!
//! All mutation goes through explicit methods. Every gauge change runs the
//! side-effect check (starvation warning, death), and every observable change
//! is recorded as a [`CharacterEvent`] the host can drain.

mod effects;
mod snapshot;

use std::collections::BTreeMap;

pub use effects::ActiveEffect;
pub use snapshot::{ActiveEffectRecord, CharacterSnapshot};

use super::config::SimConfig;
use super::inventory::Inventory;
use super::scheduler::TimerQueue;
use crate::catalog::ItemCatalog;
use crate::error::{Error, Result};
use crate::id::EffectIdGenerator;
use crate::model::{
    AttributeKind, Attributes, CharacterEvent, CharacterEventKind, InventoryEntry, SimTime,
    clamp_gauge,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeState {
    Alive,
    /// Terminal. Entered when health reaches zero.
    Dead,
}

#[derive(Debug)]
pub struct Character {
    id: String,
    name: String,
    attributes: Attributes,
    inventory: Inventory,
    active_effects: BTreeMap<String, ActiveEffect>,
    life: LifeState,
    timers: TimerQueue,
    effect_ids: EffectIdGenerator,
    events: Vec<CharacterEvent>,
    config: SimConfig,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_config(id, name, SimConfig::default())
    }

    pub fn with_config(id: impl Into<String>, name: impl Into<String>, config: SimConfig) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Attributes::uniform(config.initial_attribute),
            inventory: Inventory::new(),
            active_effects: BTreeMap::new(),
            life: LifeState::Alive,
            timers: TimerQueue::default(),
            effect_ids: EffectIdGenerator::new(),
            events: Vec::new(),
            config,
        }
    }

    /// New character holding `initial` items. Fails on the first unknown item.
    pub fn with_inventory(
        id: impl Into<String>,
        name: impl Into<String>,
        catalog: &ItemCatalog,
        initial: &[(&str, u32)],
    ) -> Result<Self> {
        let mut character = Self::new(id, name);
        for (item_id, quantity) in initial {
            character.add_item(catalog, item_id, *quantity)?;
        }
        Ok(character)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, kind: AttributeKind) -> f64 {
        self.attributes.get(kind)
    }

    pub fn life_state(&self) -> LifeState {
        self.life
    }

    pub fn is_alive(&self) -> bool {
        self.life == LifeState::Alive
    }

    /// Current simulated time on this character's clock.
    pub fn now(&self) -> SimTime {
        self.timers.now()
    }

    // -- Inventory ledger --

    pub fn inventory(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.inventory.entries()
    }

    pub fn inventory_entry(&self, item_id: &str) -> Option<&InventoryEntry> {
        self.inventory.get(item_id)
    }

    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.inventory.quantity_of(item_id)
    }

    /// Add `quantity` units of a catalog item, silently capped at its stack
    /// limit. Fails with `UnknownItem` if the catalog has no such item.
    pub fn add_item(&mut self, catalog: &ItemCatalog, item_id: &str, quantity: u32) -> Result<()> {
        let proto = catalog
            .get(item_id)
            .ok_or_else(|| Error::UnknownItem(item_id.to_string()))?;
        let kept = self.inventory.add(proto, quantity);
        if kept > 0 {
            self.record(CharacterEventKind::ItemAdded {
                item_id: item_id.to_string(),
                quantity: kept,
            });
        }
        Ok(())
    }

    /// Remove up to `quantity` units. Returns false if the item is not held.
    pub fn remove_item(&mut self, item_id: &str, quantity: u32) -> bool {
        let before = self.inventory.quantity_of(item_id);
        match self.inventory.remove(item_id, quantity) {
            None => false,
            Some(remaining) => {
                let removed = before - remaining;
                if removed > 0 {
                    self.record(CharacterEventKind::ItemRemoved {
                        item_id: item_id.to_string(),
                        quantity: removed,
                    });
                }
                true
            }
        }
    }

    /// Consume one unit of a held item, applying its prototype's effects in
    /// order. Returns `Ok(false)` without touching anything if the item is not
    /// held; fails with `CorruptCatalog` if the prototype has been deleted.
    ///
    /// Effects already applied are not rolled back if a later one kills the
    /// character.
    pub fn use_item(&mut self, catalog: &ItemCatalog, item_id: &str) -> Result<bool> {
        if !self.inventory.contains(item_id) {
            return Ok(false);
        }
        let proto = catalog
            .get(item_id)
            .ok_or_else(|| Error::CorruptCatalog(item_id.to_string()))?;

        for effect in &proto.effects {
            if effect.is_timed() {
                self.apply_status_effect(effect);
            } else {
                self.apply_immediate_effect(effect);
            }
        }

        self.record(CharacterEventKind::ItemUsed {
            item_id: item_id.to_string(),
        });
        self.remove_item(item_id, 1);
        Ok(true)
    }

    // -- Gauges --

    /// Add `delta` to a gauge (clamped to 0..=100) and run the side-effect check.
    pub fn adjust_attribute(&mut self, kind: AttributeKind, delta: f64) {
        let (old, new) = self.attributes.apply_delta(kind, delta);
        if old != new {
            self.record(CharacterEventKind::AttributeChanged {
                attribute: kind,
                old,
                new,
            });
        }
        self.check_side_effects(kind);
    }

    /// Set a gauge (clamped to 0..=100) and run the side-effect check.
    pub fn set_attribute(&mut self, kind: AttributeKind, value: f64) {
        let delta = clamp_gauge(value) - self.attributes.get(kind);
        self.adjust_attribute(kind, delta);
    }

    fn check_side_effects(&mut self, kind: AttributeKind) {
        match kind {
            AttributeKind::Satiety => {
                let satiety = self.attributes.satiety;
                if satiety <= self.config.starvation_threshold {
                    tracing::warn!(character = %self.id, name = %self.name, satiety, "character is starving");
                    self.record(CharacterEventKind::Starving { satiety });
                }
            }
            AttributeKind::Health => {
                if self.attributes.health <= 0.0 {
                    self.handle_death();
                }
            }
            AttributeKind::Energy | AttributeKind::Mood => {}
        }
    }

    /// Enter the dead state and cancel every active timed effect.
    /// Inventory and gauges are left as they are.
    fn handle_death(&mut self) {
        if self.life == LifeState::Alive {
            self.life = LifeState::Dead;
            tracing::error!(character = %self.id, name = %self.name, "character died");
            self.record(CharacterEventKind::Died);
        }
        let ids: Vec<String> = self.active_effects.keys().cloned().collect();
        for id in ids {
            self.cancel_effect(&id);
        }
    }

    // -- Events --

    fn record(&mut self, kind: CharacterEventKind) {
        self.events.push(CharacterEvent {
            at: self.timers.now(),
            kind,
        });
    }

    /// Events recorded since the last drain, oldest first.
    pub fn events(&self) -> &[CharacterEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }
}
