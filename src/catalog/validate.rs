use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{AttributeKind, ItemEffect, ItemPrototype};

const REQUIRED_FIELDS: [&str; 5] = ["id", "name", "maxStack", "stackable", "effects"];
const UNKNOWN_ID: &str = "<unknown>";

/// Check the invariants a typed prototype can still violate.
pub fn validate_prototype(item: &ItemPrototype) -> Result<()> {
    if item.max_stack == 0 || (item.stackable && item.max_stack < 2) {
        return Err(Error::InvalidStackRule {
            item_id: item.id.clone(),
            stackable: item.stackable,
            max_stack: u64::from(item.max_stack),
        });
    }
    for effect in &item.effects {
        validate_effect(&item.id, effect)?;
    }
    Ok(())
}

fn validate_effect(item_id: &str, effect: &ItemEffect) -> Result<()> {
    if !effect.value.is_finite() {
        return Err(Error::InvalidEffectValue {
            item_id: item_id.to_string(),
            found: effect.value.to_string(),
        });
    }
    if let Some(duration) = effect.duration {
        if duration.is_nan() {
            return Err(Error::InvalidEffectValue {
                item_id: item_id.to_string(),
                found: duration.to_string(),
            });
        }
        if duration < 0.0 {
            return Err(Error::NegativeDuration {
                item_id: item_id.to_string(),
                duration,
            });
        }
    }
    Ok(())
}

/// Build a prototype from untyped JSON, reporting the first rule it breaks.
///
/// Required fields are checked before anything else so a record missing
/// several fields reports the first one in `REQUIRED_FIELDS` order.
pub fn prototype_from_value(value: &Value) -> Result<ItemPrototype> {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            return Err(Error::MissingField {
                item_id: UNKNOWN_ID.to_string(),
                field: "id",
            });
        }
    };
    let item_id = obj
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ID)
        .to_string();

    for field in REQUIRED_FIELDS {
        if obj.get(field).is_none_or(Value::is_null) {
            return Err(Error::MissingField {
                item_id: item_id.clone(),
                field,
            });
        }
    }

    let name = required_str(value, &item_id, "name")?;
    let id = required_str(value, &item_id, "id")?;
    let stackable = value["stackable"].as_bool().ok_or_else(|| Error::MissingField {
        item_id: item_id.clone(),
        field: "stackable",
    })?;
    let max_stack = value["maxStack"]
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| Error::InvalidStackRule {
            item_id: item_id.clone(),
            stackable,
            max_stack: value["maxStack"].as_u64().unwrap_or(0),
        })?;
    let effects = value["effects"]
        .as_array()
        .ok_or_else(|| Error::MissingField {
            item_id: item_id.clone(),
            field: "effects",
        })?
        .iter()
        .map(|e| effect_from_value(&item_id, e))
        .collect::<Result<Vec<_>>>()?;

    let item = ItemPrototype {
        id,
        name,
        describe: optional_str(obj, "describe"),
        icon: optional_str(obj, "icon"),
        max_stack,
        stackable,
        effects,
        category: optional_str(obj, "category"),
    };
    validate_prototype(&item)?;
    Ok(item)
}

fn effect_from_value(item_id: &str, value: &Value) -> Result<ItemEffect> {
    let type_value = value.get("type").unwrap_or(&Value::Null);
    let kind = type_value
        .as_str()
        .and_then(|s| s.parse::<AttributeKind>().ok())
        .ok_or_else(|| Error::InvalidEffectType {
            item_id: item_id.to_string(),
            found: type_value.to_string(),
        })?;

    let raw_value = value.get("value").unwrap_or(&Value::Null);
    let delta = raw_value.as_f64().ok_or_else(|| Error::InvalidEffectValue {
        item_id: item_id.to_string(),
        found: raw_value.to_string(),
    })?;

    let duration = match value.get("duration") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(raw.as_f64().ok_or_else(|| Error::InvalidEffectValue {
            item_id: item_id.to_string(),
            found: raw.to_string(),
        })?),
    };

    Ok(ItemEffect {
        kind,
        value: delta,
        duration,
    })
}

fn required_str(value: &Value, item_id: &str, field: &'static str) -> Result<String> {
    value[field]
        .as_str()
        .map(String::from)
        .ok_or_else(|| Error::MissingField {
            item_id: item_id.to_string(),
            field,
        })
}

fn optional_str(obj: &Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn apple() -> Value {
        json!({
            "id": "apple",
            "name": "Apple",
            "maxStack": 8,
            "stackable": true,
            "effects": [{ "type": "satiety", "value": 15 }, { "type": "mood", "value": 3 }],
            "category": "fruit"
        })
    }

    #[test]
    fn parses_well_formed_item() {
        let item = prototype_from_value(&apple()).unwrap();
        assert_eq!(item.id, "apple");
        assert_eq!(item.max_stack, 8);
        assert_eq!(item.effects.len(), 2);
        assert_eq!(item.effects[0], ItemEffect::instant(AttributeKind::Satiety, 15.0));
        assert_eq!(item.category.as_deref(), Some("fruit"));
        assert_eq!(item.describe, None);
    }

    #[test]
    fn each_required_field_is_reported() {
        for field in REQUIRED_FIELDS {
            let mut value = apple();
            value.as_object_mut().unwrap().remove(field);
            match prototype_from_value(&value) {
                Err(Error::MissingField { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected MissingField({field}), got {other:?}"),
            }
        }
    }

    #[test]
    fn stackable_needs_room_for_two() {
        let mut value = apple();
        value["maxStack"] = json!(1);
        assert!(matches!(
            prototype_from_value(&value),
            Err(Error::InvalidStackRule { max_stack: 1, .. })
        ));

        value["stackable"] = json!(false);
        assert!(prototype_from_value(&value).is_ok());
    }

    #[test]
    fn rejects_unknown_effect_type() {
        let mut value = apple();
        value["effects"] = json!([{ "type": "stamina", "value": 3 }]);
        assert!(matches!(
            prototype_from_value(&value),
            Err(Error::InvalidEffectType { found, .. }) if found == "\"stamina\""
        ));
    }

    #[test]
    fn rejects_non_numeric_value() {
        let mut value = apple();
        value["effects"] = json!([{ "type": "mood", "value": "lots" }]);
        assert!(matches!(
            prototype_from_value(&value),
            Err(Error::InvalidEffectValue { .. })
        ));
    }

    #[test]
    fn rejects_negative_duration_but_allows_zero() {
        let mut value = apple();
        value["effects"] = json!([{ "type": "energy", "value": 5, "duration": -1 }]);
        assert!(matches!(
            prototype_from_value(&value),
            Err(Error::NegativeDuration { .. })
        ));

        value["effects"] = json!([{ "type": "energy", "value": 5, "duration": 0 }]);
        let item = prototype_from_value(&value).unwrap();
        assert_eq!(item.effects[0].duration, Some(0.0));
    }

    #[test]
    fn typed_validation_catches_non_finite_value() {
        let mut item = prototype_from_value(&apple()).unwrap();
        item.effects[0].value = f64::NAN;
        assert!(matches!(
            validate_prototype(&item),
            Err(Error::InvalidEffectValue { .. })
        ));
    }
}
