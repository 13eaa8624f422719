use serde::{Deserialize, Serialize};

/// Represents a customer order linking a user to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub item_id: i64,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrderCreate {
    pub user_id: i64,
    pub item_id: i64,
}
