use crate::model::ATTRIBUTE_MAX;

/// Tunables for a character simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Period of the recurring tick for timed effects, in milliseconds.
    pub tick_interval_ms: u64,
    /// Satiety at or below this value raises a starvation warning.
    pub starvation_threshold: f64,
    /// Starting value of every gauge for a new character.
    pub initial_attribute: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1_000,
            starvation_threshold: 20.0,
            initial_attribute: ATTRIBUTE_MAX,
        }
    }
}
