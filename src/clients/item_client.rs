use std::sync::Arc;

use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Item, ItemCreate, PricedItem};
use crate::item_actor::ItemError;
use crate::predictor::PricePredictor;

/// Price stored when the predictor has no answer.
pub const DEFAULT_PRICE: f64 = 0.0;

/// Client for interacting with the Item actor.
///
/// Creation asks the [`PricePredictor`] first and never fails because of it.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
    predictor: Arc<dyn PricePredictor>,
}

impl_get_method!(ItemClient, Item, ItemError, find_item);
impl_list_method!(ItemClient, Item, ItemError, list_items);

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>, predictor: Arc<dyn PricePredictor>) -> Self {
        Self { inner, predictor }
    }

    #[instrument(skip(self, item), fields(item_name = %item.name, category = %item.category))]
    pub async fn create_item(&self, item: ItemCreate) -> Result<Item, ItemError> {
        let price = match self.predictor.predict(&item).await {
            Some(price) => price,
            None => {
                info!("No prediction available, using default price");
                DEFAULT_PRICE
            }
        };

        debug!(price, "Sending request");
        let item = self
            .inner
            .create(PricedItem { item, price })
            .await
            .map_err(|e| ItemError::ActorCommunicationError(e.to_string()))?;
        info!(item_id = %item.id, price = item.price, "Item created");
        Ok(item)
    }

    /// Like [`ItemClient::find_item`], but an absent id is an error.
    pub async fn get_item(&self, id: i64) -> Result<Item, ItemError> {
        self.find_item(id).await?.ok_or(ItemError::NotFound(id))
    }
}
