mod character;
mod config;
mod inventory;
mod scheduler;

pub use character::{ActiveEffect, ActiveEffectRecord, Character, CharacterSnapshot, LifeState};
pub use config::SimConfig;
pub use inventory::Inventory;
pub use scheduler::{TimerAction, TimerHandle, TimerQueue};
