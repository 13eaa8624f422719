use serde::{Deserialize, Serialize};

/// A catalogue item. The price is resolved once, when the item is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
}

/// Payload for creating a new item, as received from callers.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub description: String,
    pub category: String,
}

/// An [`ItemCreate`] with its price already resolved.
#[derive(Debug, Clone)]
pub struct PricedItem {
    pub item: ItemCreate,
    pub price: f64,
}
