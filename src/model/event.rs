use serde::{Deserialize, Serialize};

use super::attribute::AttributeKind;
use super::timestamp::SimTime;

/// Something observable that happened to a character.
///
/// Characters buffer these in order; hosts drain them to drive UI or logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterEvent {
    pub at: SimTime,
    pub kind: CharacterEventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CharacterEventKind {
    AttributeChanged {
        attribute: AttributeKind,
        old: f64,
        new: f64,
    },
    /// Satiety is at or below the starvation threshold.
    Starving {
        satiety: f64,
    },
    /// Health reached zero. Emitted once, on the transition.
    Died,
    ItemAdded {
        item_id: String,
        quantity: u32,
    },
    ItemRemoved {
        item_id: String,
        quantity: u32,
    },
    ItemUsed {
        item_id: String,
    },
    EffectStarted {
        effect_id: String,
        attribute: AttributeKind,
    },
    EffectExpired {
        effect_id: String,
    },
    EffectCancelled {
        effect_id: String,
    },
}

impl CharacterEventKind {
    /// Return the serde tag string for this variant.
    pub fn type_str(&self) -> &'static str {
        match self {
            CharacterEventKind::AttributeChanged { .. } => "attribute_changed",
            CharacterEventKind::Starving { .. } => "starving",
            CharacterEventKind::Died => "died",
            CharacterEventKind::ItemAdded { .. } => "item_added",
            CharacterEventKind::ItemRemoved { .. } => "item_removed",
            CharacterEventKind::ItemUsed { .. } => "item_used",
            CharacterEventKind::EffectStarted { .. } => "effect_started",
            CharacterEventKind::EffectExpired { .. } => "effect_expired",
            CharacterEventKind::EffectCancelled { .. } => "effect_cancelled",
        }
    }
}
