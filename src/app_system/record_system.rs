use std::sync::Arc;

use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::{ItemClient, OrderClient, UserClient};
use crate::domain::{Item, Order, User};
use crate::predictor::PricePredictor;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct RecordSystem {
    pub user_client: UserClient,
    pub item_client: ItemClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl RecordSystem {
    pub fn new(buffer_size: usize, predictor: Arc<dyn PricePredictor>) -> Self {
        info!(buffer_size, "Starting record system");

        let (user_actor, user_resource_client) = ResourceActor::<User>::new(buffer_size);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        let (item_actor, item_resource_client) = ResourceActor::<Item>::new(buffer_size);
        let item_client = ItemClient::new(item_resource_client, predictor);
        let item_handle = tokio::spawn(item_actor.run());

        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(buffer_size);
        let order_client = OrderClient::new(order_resource_client, user_client.clone(), item_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            user_client,
            item_client,
            order_client,
            handles: vec![user_handle, item_handle, order_handle],
        }
    }

    /// Stops the actors and waits for them to finish.
    ///
    /// Actors exit once every client clone is gone, so anything else holding
    /// a client (the HTTP router state) must be dropped first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.item_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
