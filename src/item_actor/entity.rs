use crate::actor_framework::Entity;
use crate::domain::{Item, PricedItem};

impl Entity for Item {
    type Id = i64;
    type CreatePayload = PricedItem;

    const NAME: &'static str = "item";

    /// Creates a new Item from a payload whose price is already resolved.
    fn from_create(id: i64, params: PricedItem) -> Self {
        let PricedItem { item, price } = params;
        Self {
            id,
            name: item.name,
            description: item.description,
            category: item.category,
            price,
        }
    }
}
