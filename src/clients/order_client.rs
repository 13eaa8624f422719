use tracing::{error, info, instrument};
use crate::domain::{Order, OrderCreate};
use crate::order_actor::OrderError;
use crate::actor_framework::ResourceClient;
use crate::clients::{ItemClient, UserClient};

/// Client for interacting with the Order actor.
///
/// This client validates the referenced user and item before creating an order.
/// Users and items are never deleted, so a reference that validates here is
/// still valid when the order actor inserts the record.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    item_client: ItemClient,
}

impl_list_method!(OrderClient, Order, OrderError, list_orders);

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        item_client: ItemClient,
    ) -> Self {
        Self {
            inner,
            user_client,
            item_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate user
        match self.user_client.get_user(order.user_id).await {
            Ok(Some(user)) => info!(username = %user.username, "User validation successful"),
            Ok(None) => {
                error!("User not found");
                return Err(OrderError::InvalidUser(order.user_id));
            }
            Err(e) => {
                error!(error = %e, "User validation failed");
                return Err(OrderError::ActorCommunicationError(e.to_string()));
            }
        }

        // Step 2: Validate item
        match self.item_client.find_item(order.item_id).await {
            Ok(Some(item)) => info!(item_name = %item.name, "Item validation successful"),
            Ok(None) => {
                error!("Item not found");
                return Err(OrderError::InvalidItem(order.item_id));
            }
            Err(e) => {
                error!(error = %e, "Item validation failed");
                return Err(OrderError::ActorCommunicationError(e.to_string()));
            }
        }

        // Step 3: Create order
        let order = self
            .inner
            .create(order)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        info!(order_id = %order.id, "Order created successfully");
        Ok(order)
    }
}
