mod common;

use lifesim::model::AttributeKind;
use lifesim::{Character, Error, LifeState};

#[test]
fn apple_stacks_to_cap_and_clamps_satiety() {
    let catalog = common::build_test_catalog();
    let mut c = common::character_with(&[(AttributeKind::Satiety, 90.0), (AttributeKind::Mood, 50.0)]);

    c.add_item(&catalog, "apple", 3).unwrap();
    c.add_item(&catalog, "apple", 7).unwrap();
    assert_eq!(c.quantity_of("apple"), 8, "stack should cap at 8, not 10");

    assert!(c.use_item(&catalog, "apple").unwrap());
    assert_eq!(c.attribute(AttributeKind::Satiety), 100.0);
    assert_eq!(c.attribute(AttributeKind::Mood), 53.0);
    assert_eq!(c.quantity_of("apple"), 7);
}

#[test]
fn energy_drink_ticks_for_its_duration_then_expires() {
    let catalog = common::build_test_catalog();
    let mut c = common::character_with(&[(AttributeKind::Energy, 0.0)]);
    c.add_item(&catalog, "energy_drink", 1).unwrap();

    assert!(c.use_item(&catalog, "energy_drink").unwrap());
    assert_eq!(c.active_effects().count(), 1);
    assert_eq!(c.attribute(AttributeKind::Energy), 20.0);
    assert_eq!(c.attribute(AttributeKind::Health), 99.0);
    assert_eq!(c.quantity_of("energy_drink"), 0);

    c.advance_secs(1);
    assert_eq!(c.attribute(AttributeKind::Energy), 40.0);

    c.set_attribute(AttributeKind::Energy, 0.0);
    c.advance_secs(298);
    assert_eq!(c.active_effects().count(), 1, "still active just before expiry");

    c.advance_secs(1);
    assert_eq!(c.active_effects().count(), 0);
    assert_eq!(common::count_events(&c, "effect_expired"), 1);

    c.set_attribute(AttributeKind::Energy, 0.0);
    c.advance_secs(60);
    assert_eq!(c.attribute(AttributeKind::Energy), 0.0);
    assert_eq!(c.attribute(AttributeKind::Health), 99.0);
}

#[test]
fn timed_health_drain_stops_at_expiry() {
    let catalog = common::build_test_catalog();
    let mut c = common::character_with(&[]);
    c.add_item(&catalog, "slow_poison", 1).unwrap();
    c.use_item(&catalog, "slow_poison").unwrap();

    c.advance_secs(5);
    assert_eq!(c.attribute(AttributeKind::Health), 94.0);

    c.advance_secs(100);
    assert_eq!(c.attribute(AttributeKind::Health), 90.0);
    assert_eq!(c.pending_timers(), 0);
}

#[test]
fn lethal_item_clamps_health_and_clears_effects() {
    let catalog = common::build_test_catalog();
    let mut c = common::character_with(&[]);
    c.add_item(&catalog, "energy_drink", 1).unwrap();
    c.add_item(&catalog, "hemlock", 1).unwrap();

    c.use_item(&catalog, "energy_drink").unwrap();
    c.set_attribute(AttributeKind::Health, 1.0);
    assert_eq!(c.active_effects().count(), 1);

    c.use_item(&catalog, "hemlock").unwrap();
    assert_eq!(c.attribute(AttributeKind::Health), 0.0);
    assert_eq!(c.life_state(), LifeState::Dead);
    assert_eq!(c.active_effects().count(), 0);
    assert_eq!(common::count_events(&c, "died"), 1);

    let energy = c.attribute(AttributeKind::Energy);
    c.advance_secs(30);
    assert_eq!(c.attribute(AttributeKind::Energy), energy, "no ticks after death");
}

#[test]
fn gauges_stay_in_bounds_under_any_delta() {
    let mut c = Character::new("c", "C");
    for delta in [1e6, -1e6, 55.5, -0.25, 250.0, -99.0] {
        for kind in AttributeKind::ALL {
            c.adjust_attribute(kind, delta);
            let v = c.attribute(kind);
            assert!((0.0..=100.0).contains(&v), "{kind} out of range: {v}");
        }
    }
}

#[test]
fn stack_never_exceeds_max_for_any_seed_item() {
    let catalog = common::build_test_catalog();
    let mut c = Character::new("c", "C");
    for proto in catalog.all_items() {
        for _ in 0..3 {
            c.add_item(&catalog, &proto.id, 7).unwrap();
        }
        assert!(c.quantity_of(&proto.id) <= proto.max_stack, "{} over cap", proto.id);
    }
}

#[test]
fn catalog_desync_is_an_error_not_false() {
    let mut catalog = common::build_test_catalog();
    let mut c = Character::new("c", "C");
    c.add_item(&catalog, "banana", 2).unwrap();
    assert!(catalog.delete("banana"));

    assert!(matches!(
        c.use_item(&catalog, "banana"),
        Err(Error::CorruptCatalog(_))
    ));
    assert!(matches!(
        c.add_item(&catalog, "banana", 1),
        Err(Error::UnknownItem(_))
    ));
}

#[test]
fn starvation_warning_fires_on_each_low_satiety_change() {
    let mut c = common::character_with(&[(AttributeKind::Satiety, 25.0)]);
    c.adjust_attribute(AttributeKind::Satiety, -5.0);
    c.adjust_attribute(AttributeKind::Satiety, -5.0);
    assert_eq!(common::count_events(&c, "starving"), 2);
    assert!(c.is_alive());
}
