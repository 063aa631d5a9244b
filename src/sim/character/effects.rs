use serde::Serialize;

use super::Character;
use crate::model::timestamp::secs_to_millis;
use crate::model::{CharacterEventKind, ItemEffect, SimTime};
use crate::sim::scheduler::{TimerAction, TimerHandle};

/// A live timed effect ticking on a character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveEffect {
    pub id: String,
    pub effect: ItemEffect,
    /// Full duration in seconds, as given by the effect.
    pub duration: f64,
    pub started_at: SimTime,
    #[serde(skip)]
    pub(crate) recurring: TimerHandle,
    #[serde(skip)]
    pub(crate) expiry: TimerHandle,
}

impl ActiveEffect {
    pub fn expires_at(&self) -> SimTime {
        self.started_at + secs_to_millis(self.duration)
    }
}

impl Character {
    pub fn active_effects(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.active_effects.values()
    }

    pub fn active_effect(&self, effect_id: &str) -> Option<&ActiveEffect> {
        self.active_effects.get(effect_id)
    }

    /// Live timers on this character's clock (two per active effect).
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub(super) fn apply_immediate_effect(&mut self, effect: &ItemEffect) {
        self.adjust_attribute(effect.kind, effect.value);
    }

    /// Start a timed effect: record it, schedule its expiry and recurring
    /// tick, then apply the first tick right away.
    ///
    /// The record exists before the first tick so a fatal first tick cancels
    /// it along with everything else. Expiry is scheduled ahead of the
    /// recurring tick, so when the two fall due together the effect expires
    /// and that last tick never fires: `d` whole seconds apply `d` times,
    /// not `d + 1`.
    pub(super) fn apply_status_effect(&mut self, effect: &ItemEffect) {
        let now = self.timers.now();
        let effect_id = self.effect_ids.next_id(effect.kind, now);
        if self.active_effects.contains_key(&effect_id) {
            tracing::debug!(character = %self.id, effect = %effect_id, "effect already active, skipping");
            return;
        }

        let duration = effect.duration.unwrap_or(0.0);
        let expiry = self.timers.schedule_once(
            secs_to_millis(duration),
            TimerAction::Expire {
                effect_id: effect_id.clone(),
            },
        );
        let recurring = self.timers.schedule_every(
            self.config.tick_interval_ms,
            TimerAction::Tick {
                effect_id: effect_id.clone(),
            },
        );
        self.active_effects.insert(
            effect_id.clone(),
            ActiveEffect {
                id: effect_id.clone(),
                effect: effect.clone(),
                duration,
                started_at: now,
                recurring,
                expiry,
            },
        );
        tracing::debug!(character = %self.id, effect = %effect_id, duration, "timed effect started");
        self.record(CharacterEventKind::EffectStarted {
            effect_id,
            attribute: effect.kind,
        });

        self.apply_immediate_effect(effect);
    }

    /// Cancel an active effect before it expires. Returns false for unknown ids.
    pub fn cancel_effect(&mut self, effect_id: &str) -> bool {
        match self.remove_status_effect(effect_id) {
            Some(_) => {
                tracing::debug!(character = %self.id, effect = %effect_id, "timed effect cancelled");
                self.record(CharacterEventKind::EffectCancelled {
                    effect_id: effect_id.to_string(),
                });
                true
            }
            None => false,
        }
    }

    /// Stop both timers and drop the record.
    fn remove_status_effect(&mut self, effect_id: &str) -> Option<ActiveEffect> {
        let active = self.active_effects.remove(effect_id)?;
        self.timers.cancel(active.recurring);
        self.timers.cancel(active.expiry);
        Some(active)
    }

    fn run_timer(&mut self, action: TimerAction) {
        match action {
            TimerAction::Tick { effect_id } => {
                if let Some(active) = self.active_effects.get(&effect_id) {
                    let effect = active.effect.clone();
                    self.apply_immediate_effect(&effect);
                }
            }
            TimerAction::Expire { effect_id } => {
                if self.remove_status_effect(&effect_id).is_some() {
                    tracing::debug!(character = %self.id, effect = %effect_id, "timed effect expired");
                    self.record(CharacterEventKind::EffectExpired { effect_id });
                }
            }
        }
    }

    /// Advance this character's clock to `time`, firing every due tick and
    /// expiry in order. Earlier times are ignored.
    pub fn advance_to(&mut self, time: SimTime) {
        while let Some(action) = self.timers.next_due(time) {
            self.run_timer(action);
        }
        self.timers.settle(time);
    }

    pub fn advance_by(&mut self, millis: u64) {
        let target = self.timers.now() + millis;
        self.advance_to(target);
    }

    pub fn advance_secs(&mut self, secs: u64) {
        self.advance_by(secs.saturating_mul(1_000));
    }
}
