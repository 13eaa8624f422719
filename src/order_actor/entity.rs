use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = i64;
    type CreatePayload = OrderCreate;

    const NAME: &'static str = "order";

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// Referenced ids are checked by `OrderClient` before the payload reaches the actor.
    fn from_create(id: i64, params: OrderCreate) -> Self {
        Self {
            id,
            user_id: params.user_id,
            item_id: params.item_id,
        }
    }
}
