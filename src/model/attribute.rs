use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ATTRIBUTE_MIN: f64 = 0.0;
pub const ATTRIBUTE_MAX: f64 = 100.0;

/// The four character gauges. Also the closed set of item effect types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Satiety,
    Energy,
    Health,
    Mood,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::Satiety,
        AttributeKind::Energy,
        AttributeKind::Health,
        AttributeKind::Mood,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Satiety => "satiety",
            AttributeKind::Energy => "energy",
            AttributeKind::Health => "health",
            AttributeKind::Mood => "mood",
        }
    }
}

impl FromStr for AttributeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "satiety" => Ok(AttributeKind::Satiety),
            "energy" => Ok(AttributeKind::Energy),
            "health" => Ok(AttributeKind::Health),
            "mood" => Ok(AttributeKind::Mood),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a gauge value into `[ATTRIBUTE_MIN, ATTRIBUTE_MAX]`.
pub fn clamp_gauge(value: f64) -> f64 {
    value.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX)
}

/// Bounded character gauges.
///
/// Mutation through [`Attributes::apply_delta`] always clamps. [`Attributes::set_raw`]
/// bypasses the clamp and exists for restoring persisted snapshots verbatim.
/// Gauges missing from serialized input default to full.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub satiety: f64,
    pub energy: f64,
    pub health: f64,
    pub mood: f64,
}

impl Attributes {
    /// All four gauges at the same starting value (clamped).
    pub fn uniform(value: f64) -> Self {
        let v = clamp_gauge(value);
        Self {
            satiety: v,
            energy: v,
            health: v,
            mood: v,
        }
    }

    pub fn get(&self, kind: AttributeKind) -> f64 {
        match kind {
            AttributeKind::Satiety => self.satiety,
            AttributeKind::Energy => self.energy,
            AttributeKind::Health => self.health,
            AttributeKind::Mood => self.mood,
        }
    }

    fn slot(&mut self, kind: AttributeKind) -> &mut f64 {
        match kind {
            AttributeKind::Satiety => &mut self.satiety,
            AttributeKind::Energy => &mut self.energy,
            AttributeKind::Health => &mut self.health,
            AttributeKind::Mood => &mut self.mood,
        }
    }

    /// Add `delta` to a gauge and clamp. Returns `(old, new)`.
    pub fn apply_delta(&mut self, kind: AttributeKind, delta: f64) -> (f64, f64) {
        let slot = self.slot(kind);
        let old = *slot;
        *slot = clamp_gauge(old + delta);
        (old, *slot)
    }

    pub fn set_raw(&mut self, kind: AttributeKind, value: f64) {
        *self.slot(kind) = value;
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(ATTRIBUTE_MAX)
    }
}
