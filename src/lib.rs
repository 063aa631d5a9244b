pub mod catalog;
pub mod chat;
pub mod db;
pub mod error;
pub mod id;
pub mod model;
pub mod sim;

pub use catalog::ItemCatalog;
pub use error::{Error, Result};
pub use id::EffectIdGenerator;
pub use model::{
    AttributeKind, Attributes, CharacterEvent, CharacterEventKind, InventoryEntry, ItemEffect,
    ItemPrototype, SimTime,
};
pub use sim::{Character, CharacterSnapshot, LifeState, SimConfig};
