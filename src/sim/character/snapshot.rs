use serde::{Deserialize, Serialize};

use super::{Character, LifeState};
use crate::catalog::ItemCatalog;
use crate::error::Result;
use crate::model::{AttributeKind, Attributes, InventoryEntry, ItemEffect};
use crate::sim::config::SimConfig;

/// Serialized form of a character.
///
/// Active effects carry their original duration, not the time remaining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub id: String,
    pub name: String,
    pub attributes: Attributes,
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,
    #[serde(default)]
    pub effects: Vec<ActiveEffectRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffectRecord {
    pub id: String,
    pub effect: ItemEffect,
    pub duration: f64,
}

impl Character {
    pub fn serialize(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            attributes: self.attributes,
            inventory: self.inventory.entries().cloned().collect(),
            effects: self
                .active_effects
                .values()
                .map(|a| ActiveEffectRecord {
                    id: a.id.clone(),
                    effect: a.effect.clone(),
                    duration: a.duration,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    /// Rebuild a character from a snapshot.
    ///
    /// Gauges are restored verbatim, without clamping. Inventory goes back
    /// through `add_item`, so stack caps apply again. Each active effect is
    /// started afresh and runs its full duration, with a new instance id.
    ///
    /// A snapshot with health at or below zero comes back dead, and its
    /// active effects are dropped.
    pub fn deserialize(snapshot: CharacterSnapshot, catalog: &ItemCatalog) -> Result<Character> {
        Self::deserialize_with_config(snapshot, catalog, SimConfig::default())
    }

    pub fn deserialize_with_config(
        snapshot: CharacterSnapshot,
        catalog: &ItemCatalog,
        config: SimConfig,
    ) -> Result<Character> {
        let mut character = Character::with_config(snapshot.id, snapshot.name, config);
        for kind in AttributeKind::ALL {
            character
                .attributes
                .set_raw(kind, snapshot.attributes.get(kind));
        }
        for entry in &snapshot.inventory {
            character.add_item(catalog, &entry.item_id, entry.quantity)?;
        }
        if character.attributes.health <= 0.0 {
            character.life = LifeState::Dead;
            tracing::debug!(
                character = %character.id,
                dropped = snapshot.effects.len(),
                "restored a dead character"
            );
            return Ok(character);
        }
        for record in &snapshot.effects {
            character.apply_status_effect(&record.effect);
        }
        Ok(character)
    }

    pub fn from_json(json: &str, catalog: &ItemCatalog) -> Result<Character> {
        let snapshot: CharacterSnapshot = serde_json::from_str(json)?;
        Self::deserialize(snapshot, catalog)
    }
}
