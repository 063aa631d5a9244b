/// Bundled item data, as `(file name, JSON array)` pairs, in load order.
pub const SEED_FILES: &[(&str, &str)] = &[
    ("fruits.json", include_str!("../../data/items/fruits.json")),
    ("snacks.json", include_str!("../../data/items/snacks.json")),
    (
        "staple_foods.json",
        include_str!("../../data/items/staple_foods.json"),
    ),
];
