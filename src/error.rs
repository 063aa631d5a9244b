use thiserror::Error;

/// Errors raised by the item catalog and the character simulation.
#[derive(Error, Debug)]
pub enum Error {
    /// An inventory operation named an item the catalog does not know.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("duplicate item id: {0}")]
    DuplicateId(String),

    #[error("item {item_id} is missing required field `{field}`")]
    MissingField { item_id: String, field: &'static str },

    #[error("item {item_id} has an invalid stack rule: stackable={stackable}, max_stack={max_stack}")]
    InvalidStackRule {
        item_id: String,
        stackable: bool,
        max_stack: u64,
    },

    #[error("item {item_id} has an invalid effect type: {found}")]
    InvalidEffectType { item_id: String, found: String },

    #[error("item {item_id} has a non-numeric effect value: {found}")]
    InvalidEffectValue { item_id: String, found: String },

    #[error("item {item_id} has a negative effect duration: {duration}")]
    NegativeDuration { item_id: String, duration: f64 },

    /// An item is held but its prototype is gone from the catalog.
    #[error("catalog is missing prototype for held item {0}")]
    CorruptCatalog(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
