use crate::model::{AttributeKind, SimTime};

/// Generates active-effect instance ids.
///
/// Ids combine the effect type, the creation time, and a per-generator
/// sequence number, so two effects of the same type created at the same
/// instant still get distinct ids.
#[derive(Debug)]
pub struct EffectIdGenerator {
    next: u64,
}

impl EffectIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self, kind: AttributeKind, at: SimTime) -> String {
        let seq = self.next;
        self.next += 1;
        format!("{}_{}_{}", kind, at.as_millis(), seq)
    }
}

impl Default for EffectIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
