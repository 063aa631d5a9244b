use serde::{Deserialize, Serialize};

use super::attribute::AttributeKind;

/// One attribute delta carried by an item.
///
/// A positive `duration` (seconds) makes this a timed effect that re-applies
/// `value` every tick until it expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEffect {
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl ItemEffect {
    pub fn instant(kind: AttributeKind, value: f64) -> Self {
        Self {
            kind,
            value,
            duration: None,
        }
    }

    pub fn timed(kind: AttributeKind, value: f64, duration_secs: f64) -> Self {
        Self {
            kind,
            value,
            duration: Some(duration_secs),
        }
    }

    pub fn is_timed(&self) -> bool {
        self.duration.is_some_and(|d| d > 0.0)
    }
}

/// Catalog-owned template for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPrototype {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub describe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub max_stack: u32,
    pub stackable: bool,
    pub effects: Vec<ItemEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemPrototype {
    pub fn has_effect(&self, kind: AttributeKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }
}

/// Held quantity of one item, with the effect list copied at acquisition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub item_id: String,
    pub quantity: u32,
    pub effects: Vec<ItemEffect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_requires_positive_duration() {
        assert!(!ItemEffect::instant(AttributeKind::Mood, 3.0).is_timed());
        assert!(!ItemEffect::timed(AttributeKind::Mood, 3.0, 0.0).is_timed());
        assert!(ItemEffect::timed(AttributeKind::Energy, 20.0, 300.0).is_timed());
    }

    #[test]
    fn effect_serializes_type_key_and_omits_missing_duration() {
        let json = serde_json::to_value(ItemEffect::instant(AttributeKind::Satiety, 15.0)).unwrap();
        assert_eq!(json["type"], "satiety");
        assert_eq!(json["value"], 15.0);
        assert!(json.get("duration").is_none());
    }

    #[test]
    fn prototype_uses_camel_case_keys() {
        let proto = ItemPrototype {
            id: "apple".to_string(),
            name: "Apple".to_string(),
            describe: None,
            icon: None,
            max_stack: 8,
            stackable: true,
            effects: vec![ItemEffect::instant(AttributeKind::Satiety, 15.0)],
            category: Some("fruit".to_string()),
        };
        let json = serde_json::to_value(&proto).unwrap();
        assert_eq!(json["maxStack"], 8);
        assert_eq!(json["category"], "fruit");
        assert!(json.get("icon").is_none());
        assert!(proto.has_effect(AttributeKind::Satiety));
        assert!(!proto.has_effect(AttributeKind::Health));
    }
}
