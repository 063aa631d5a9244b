pub mod attribute;
pub mod event;
pub mod item;
pub mod timestamp;

pub use attribute::{ATTRIBUTE_MAX, ATTRIBUTE_MIN, AttributeKind, Attributes, clamp_gauge};
pub use event::{CharacterEvent, CharacterEventKind};
pub use item::{InventoryEntry, ItemEffect, ItemPrototype};
pub use timestamp::SimTime;
